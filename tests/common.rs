#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use camelcube::store::integrity::{IntegrityTag, Sha256Tag};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CamelCube binary with HOME pointed at a private temp dir, so no test
/// reads or writes the real configuration.
pub fn cc() -> Command {
    let mut home = env::temp_dir();
    home.push("camelcube_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("camelcube");
    cmd.env("HOME", home);
    cmd
}

/// Unique record file path inside the system temp dir; any leftover file
/// and its event log are removed.
pub fn setup_record_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_camelcube.json", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    path.to_string_lossy().to_string()
}

/// Temporary output path, removed before use.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn tag(time: Option<f64>) -> u64 {
    Sha256Tag.tag(time)
}

/// JSON text of a slot with a caller-chosen code.
pub fn slot_json(time: Option<f64>, code: u64) -> String {
    match time {
        Some(t) => format!(r#"{{ "time": {:?}, "code": {} }}"#, t, code),
        None => format!(r#"{{ "time": null, "code": {} }}"#, code),
    }
}

/// Write a record file by hand.
pub fn write_record_file(path: &str, now: String, before: String) {
    let content = format!(
        r#"{{ "record_now": {}, "record_before": {} }}"#,
        now, before
    );
    fs::write(path, content).expect("write record file");
}

pub fn read_json(path: &str) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("read record file");
    serde_json::from_str(&content).expect("record file is JSON")
}
