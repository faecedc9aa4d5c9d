use camelcube::core::session::{Decision, Session, is_new_best};
use camelcube::errors::{AppError, AppResult};
use camelcube::store::BestTimeStore;
use camelcube::timer::{Outcome, Signal, TimerMachine, TimerState};
use std::time::{Duration, Instant};

/// In-memory store counting every call.
#[derive(Default)]
struct MockStore {
    best: Option<f64>,
    reads: usize,
    writes: Vec<f64>,
}

impl MockStore {
    fn with_best(best: f64) -> Self {
        Self {
            best: Some(best),
            ..Self::default()
        }
    }
}

impl BestTimeStore for MockStore {
    fn current_best(&mut self) -> AppResult<Option<f64>> {
        self.reads += 1;
        Ok(self.best)
    }

    fn record_best(&mut self, time: f64) -> AppResult<()> {
        self.writes.push(time);
        self.best = Some(time);
        Ok(())
    }
}

/// Store whose reads or writes fail on demand.
#[derive(Default)]
struct FailingStore {
    best: Option<f64>,
    fail_reads: bool,
    fail_writes: bool,
}

impl BestTimeStore for FailingStore {
    fn current_best(&mut self) -> AppResult<Option<f64>> {
        if self.fail_reads {
            return Err(AppError::Io(std::io::Error::other("disk unavailable")));
        }
        Ok(self.best)
    }

    fn record_best(&mut self, time: f64) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Io(std::io::Error::other("disk full")));
        }
        self.best = Some(time);
        Ok(())
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Run one solve of exactly `millis` through the session and stop it.
fn timed_solve<S: BestTimeStore>(session: &mut Session<S>, millis: u64) {
    let t0 = Instant::now();
    session.start(t0);
    session.tick(t0 + ms(millis));
    session.stop();
}

#[test]
fn test_transition_table() {
    use Signal::*;
    use TimerState::*;

    assert_eq!(Idle.next(Start), Some(Running));
    assert_eq!(Running.next(Stop), Some(AwaitingDecision));
    assert_eq!(AwaitingDecision.next(Confirm), Some(Idle));
    assert_eq!(AwaitingDecision.next(Discard), Some(Idle));

    for ignored in [
        (Idle, Stop),
        (Idle, Confirm),
        (Idle, Discard),
        (Running, Start),
        (Running, Confirm),
        (Running, Discard),
        (AwaitingDecision, Start),
        (AwaitingDecision, Stop),
    ] {
        assert_eq!(ignored.0.next(ignored.1), None, "{:?}", ignored);
    }
}

#[test]
fn test_ticks_accumulate_real_elapsed_time() {
    let t0 = Instant::now();
    let mut m = TimerMachine::new();

    assert_eq!(m.start(t0), Outcome::Started);
    assert_eq!(m.tick(t0 + ms(10)), 0.01);
    assert_eq!(m.tick(t0 + ms(35)), 0.035);
    // jitter: a late tick still adds the real delta
    assert_eq!(m.tick(t0 + ms(1500)), 1.5);
}

#[test]
fn test_elapsed_is_rounded_to_milliseconds() {
    let t0 = Instant::now();
    let mut m = TimerMachine::new();

    m.start(t0);
    assert_eq!(m.tick(t0 + Duration::from_micros(1_234_567)), 1.235);
}

#[test]
fn test_start_while_running_is_ignored() {
    let t0 = Instant::now();
    let mut m = TimerMachine::new();

    m.start(t0);
    m.tick(t0 + ms(1000));

    assert_eq!(m.start(t0 + ms(2000)), Outcome::Ignored);
    assert_eq!(m.state(), TimerState::Running);
    assert_eq!(m.elapsed(), 1.0);

    // neither reset nor re-anchored: the next tick counts from the last tick
    assert_eq!(m.tick(t0 + ms(3000)), 3.0);
}

#[test]
fn test_start_while_awaiting_decision_is_ignored() {
    let t0 = Instant::now();
    let mut m = TimerMachine::new();

    m.start(t0);
    m.tick(t0 + ms(800));
    m.stop();

    assert_eq!(m.start(t0 + ms(900)), Outcome::Ignored);
    assert_eq!(m.state(), TimerState::AwaitingDecision);
    assert_eq!(m.elapsed(), 0.8);
}

#[test]
fn test_stop_freezes_elapsed() {
    let t0 = Instant::now();
    let mut m = TimerMachine::new();

    m.start(t0);
    m.tick(t0 + ms(2500));

    assert_eq!(m.stop(), Outcome::Stopped { elapsed: 2.5 });
    assert_eq!(m.tick(t0 + ms(9000)), 2.5);
    assert!(!m.is_running());
}

#[test]
fn test_confirm_and_discard_reset_to_idle() {
    let t0 = Instant::now();
    let mut m = TimerMachine::new();

    m.start(t0);
    m.tick(t0 + ms(400));
    m.stop();
    assert_eq!(m.confirm(), Outcome::Confirmed { elapsed: 0.4 });
    assert_eq!(m.state(), TimerState::Idle);
    assert_eq!(m.elapsed(), 0.0);

    m.start(t0);
    m.tick(t0 + ms(600));
    m.stop();
    assert_eq!(m.discard(), Outcome::Discarded { elapsed: 0.6 });
    assert_eq!(m.state(), TimerState::Idle);
    assert_eq!(m.elapsed(), 0.0);
}

#[test]
fn test_is_new_best_is_strict() {
    assert!(is_new_best(9.999, Some(10.0)));
    assert!(!is_new_best(10.0, Some(10.0)));
    assert!(!is_new_best(10.5, Some(10.0)));
    assert!(is_new_best(7.5, None));
}

#[test]
fn test_confirm_equal_time_is_not_a_record() {
    let mut session = Session::new(MockStore::with_best(10.0));

    timed_solve(&mut session, 10_000);
    let decision = session.confirm().unwrap();

    assert_eq!(
        decision,
        Some(Decision::NotBest {
            time: 10.0,
            best: 10.0
        })
    );
    assert!(session.store().writes.is_empty());
}

#[test]
fn test_confirm_faster_time_sets_record() {
    let mut session = Session::new(MockStore::with_best(10.0));

    timed_solve(&mut session, 9_999);
    let decision = session.confirm().unwrap();

    assert_eq!(
        decision,
        Some(Decision::NewBest {
            time: 9.999,
            previous: Some(10.0)
        })
    );
    assert_eq!(session.store().writes, vec![9.999]);
    assert_eq!(session.best(), Some(9.999));
    assert_eq!(session.state(), TimerState::Idle);
    assert_eq!(session.elapsed(), 0.0);
}

#[test]
fn test_first_confirm_without_best_sets_record() {
    let mut session = Session::new(MockStore::default());

    timed_solve(&mut session, 7_500);

    assert_eq!(
        session.confirm().unwrap(),
        Some(Decision::NewBest {
            time: 7.5,
            previous: None
        })
    );
    assert_eq!(session.store().writes, vec![7.5]);
}

#[test]
fn test_discard_never_touches_store() {
    let mut session = Session::new(MockStore::with_best(10.0));

    timed_solve(&mut session, 3_000);
    let decision = session.discard();

    assert_eq!(decision, Some(Decision::Discarded { time: 3.0 }));
    assert_eq!(session.store().reads, 0);
    assert!(session.store().writes.is_empty());
    assert_eq!(session.elapsed(), 0.0);
    assert_eq!(session.state(), TimerState::Idle);
}

#[test]
fn test_confirm_outside_awaiting_decision_does_nothing() {
    let mut session = Session::new(MockStore::default());

    assert_eq!(session.confirm().unwrap(), None);
    assert_eq!(session.discard(), None);

    session.start(Instant::now());
    assert_eq!(session.confirm().unwrap(), None);
    assert_eq!(session.state(), TimerState::Running);
    assert_eq!(session.store().reads, 0);
}

#[test]
fn test_zero_length_solve_is_not_stored() {
    let mut session = Session::new(MockStore::default());

    session.start(Instant::now());
    session.stop();

    assert_eq!(session.confirm().unwrap(), Some(Decision::TooShort));
    assert!(session.store().writes.is_empty());
}

#[test]
fn test_refresh_best_reads_store() {
    let mut session = Session::new(MockStore::with_best(12.0));
    assert_eq!(session.best(), None);

    assert_eq!(session.refresh_best().unwrap(), Some(12.0));
    assert_eq!(session.best(), Some(12.0));
    assert_eq!(session.store().reads, 1);
}

#[test]
fn test_failed_read_keeps_solve_awaiting_decision() {
    let mut session = Session::new(FailingStore {
        fail_reads: true,
        ..FailingStore::default()
    });
    timed_solve(&mut session, 8_250);

    assert!(session.confirm().is_err());
    assert_eq!(session.state(), TimerState::AwaitingDecision);
    assert_eq!(session.elapsed(), 8.25);

    // once the store recovers the same solve can still be counted
    session.store_mut().fail_reads = false;
    assert_eq!(
        session.confirm().unwrap(),
        Some(Decision::NewBest {
            time: 8.25,
            previous: None
        })
    );
    assert_eq!(session.state(), TimerState::Idle);
}

#[test]
fn test_failed_write_keeps_solve_awaiting_decision() {
    let mut session = Session::new(FailingStore {
        best: Some(10.0),
        fail_writes: true,
        ..FailingStore::default()
    });
    timed_solve(&mut session, 9_000);

    assert!(session.confirm().is_err());
    assert_eq!(session.state(), TimerState::AwaitingDecision);
    assert_eq!(session.elapsed(), 9.0);
    assert_eq!(session.best(), Some(10.0));

    // skipping is still possible
    assert_eq!(session.discard(), Some(Decision::Discarded { time: 9.0 }));
    assert_eq!(session.state(), TimerState::Idle);
}
