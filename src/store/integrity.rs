//! Integrity tags for record slots.
//!
//! A tag is a deterministic `u64` derived from a slot's time value. It only
//! detects accidental corruption or hand edits of the record file; it is not
//! a cryptographic guarantee.

use sha2::{Digest, Sha256};

/// Computes the integrity tag of an optional time value.
///
/// Implemented for any `Fn(Option<f64>) -> u64`, so a store can be built
/// with a custom tag function.
pub trait IntegrityTag {
    fn tag(&self, time: Option<f64>) -> u64;
}

impl<F> IntegrityTag for F
where
    F: Fn(Option<f64>) -> u64,
{
    fn tag(&self, time: Option<f64>) -> u64 {
        self(time)
    }
}

/// Default tag: the first eight bytes (big-endian) of the SHA-256 digest of
/// the little-endian IEEE-754 bytes of the time, or of `b"null"` when the
/// slot is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Tag;

impl IntegrityTag for Sha256Tag {
    fn tag(&self, time: Option<f64>) -> u64 {
        match time {
            Some(t) => sha256_prefix(&t.to_le_bytes()),
            None => sha256_prefix(b"null"),
        }
    }
}

fn sha256_prefix(bytes: &[u8]) -> u64 {
    let digest = Sha256::digest(bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}
