#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tickcount_core::{Counter, TickerState};

#[test]
fn zero_max_is_rejected() {
    let err = Counter::new(0).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn advances_one_by_one_up_to_max() {
    let mut c = Counter::new(10).unwrap();
    assert_eq!(c.value(), 0);
    assert_eq!(c.max(), 10);

    let seen: Vec<u32> = std::iter::from_fn(|| c.advance()).map(|p| p.value).collect();
    assert_eq!(seen, (1..=10).collect::<Vec<_>>());
    assert!(c.is_complete());
    assert_eq!(c.value(), 10);
    assert_eq!(c.max(), 10);
}

#[test]
fn advance_after_bound_is_a_noop() {
    let mut c = Counter::new(1).unwrap();
    let p = c.advance().unwrap();
    assert!(p.is_final());

    assert!(c.advance().is_none());
    assert!(c.advance().is_none());
    assert_eq!(c.value(), 1);
}

#[test]
fn only_the_last_report_is_final() {
    let mut c = Counter::new(3).unwrap();
    let finals: Vec<bool> = std::iter::from_fn(|| c.advance())
        .map(|p| p.is_final())
        .collect();
    assert_eq!(finals, vec![false, false, true]);
}

#[test]
fn progress_line_format() {
    let mut c = Counter::new(50).unwrap();
    let p = c.advance().unwrap();
    assert_eq!(p.to_string(), "Counting 1/50");
}

#[test]
fn only_done_is_terminal() {
    assert!(!TickerState::Idle.is_terminal());
    assert!(!TickerState::Running.is_terminal());
    assert!(TickerState::Done.is_terminal());
    assert_eq!(TickerState::Running.as_str(), "running");
}
