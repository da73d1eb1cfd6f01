// Host-side tests for the bounded widget override retries.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod retry {
        include!("../src/core/retry.rs");
    }
}

use crate::core::constants::{WIDGET_RETRY_ATTEMPTS, WIDGET_RETRY_MS};
use crate::core::retry::*;

#[test]
fn widget_override_retries_exactly_five_times() {
    let mut budget = RetryBudget::new(WIDGET_RETRY_ATTEMPTS);
    let ran = (0..10).filter(|_| budget.tick()).count();
    assert_eq!(ran, 5);
    assert_eq!(budget.attempts(), 5);
    assert!(budget.exhausted());
}

#[test]
fn budget_stops_on_the_tick_after_the_cap() {
    let mut budget = RetryBudget::new(3);
    assert!(budget.tick());
    assert!(budget.tick());
    assert!(!budget.exhausted());
    assert!(budget.tick());
    assert!(budget.exhausted());
    assert!(!budget.tick());
    assert_eq!(budget.attempts(), 3);
}

#[test]
fn zero_budget_never_runs() {
    let mut budget = RetryBudget::new(0);
    assert!(budget.exhausted());
    assert!(!budget.tick());
    assert_eq!(budget.attempts(), 0);
}

#[test]
fn retry_window_spans_ten_seconds() {
    assert_eq!(WIDGET_RETRY_MS * WIDGET_RETRY_ATTEMPTS, 10_000);
}
