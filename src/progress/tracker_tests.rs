//! Tests for progress/tracker and progress/snapshot

use super::*;
use crate::stats::Counters;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn test_first_line_always_refreshes() {
    let mut tracker = ProgressTracker::new(1000);
    assert!(tracker.advance(1));
    assert_eq!(tracker.percent().trunc(), 0.0);
}

#[test]
fn test_unknown_total_keeps_percent_at_zero() {
    let mut tracker = ProgressTracker::new(0);
    assert!(tracker.advance(100));
    assert_eq!(tracker.percent(), 0.0);
    tracker.refresh(Duration::from_secs(1));

    for _ in 0..50 {
        assert!(!tracker.advance(100));
        assert_eq!(tracker.percent(), 0.0);
    }
    assert_eq!(tracker.bytes_read(), 5100);
    assert_eq!(tracker.eta_secs(), 0);
}

#[test]
fn test_no_refresh_while_integer_percent_unchanged() {
    let mut tracker = ProgressTracker::new(1000);
    assert!(tracker.advance(10));
    tracker.refresh(Duration::ZERO);

    // 1.0% .. 1.9%
    assert!(!tracker.advance(5));
    assert!(!tracker.advance(4));
    assert!(tracker.advance(1));
}

#[test]
fn test_repeated_check_without_refresh_stays_pending() {
    let mut tracker = ProgressTracker::new(100);
    assert!(tracker.advance(3));
    // Not yet displayed, so the next line still differs from the last display
    assert!(tracker.advance(0));
    tracker.refresh(Duration::ZERO);
    assert!(!tracker.advance(0));
}

#[test]
fn test_percent_clamped_on_overshoot() {
    let mut tracker = ProgressTracker::new(10);
    tracker.advance(15);
    assert_eq!(tracker.percent(), 100.0);
}

#[test]
fn test_eta_recomputed_at_five_percent() {
    let mut tracker = ProgressTracker::new(100);
    tracker.advance(5);
    tracker.refresh(Duration::from_secs(10));
    assert_eq!(tracker.eta_secs(), 200);
}

#[test]
fn test_eta_kept_between_boundaries() {
    let mut tracker = ProgressTracker::new(100);
    tracker.advance(5);
    tracker.refresh(Duration::from_secs(10));

    tracker.advance(1);
    tracker.refresh(Duration::from_secs(60));
    assert_eq!(tracker.eta_secs(), 200);

    tracker.advance(2);
    tracker.refresh(Duration::from_secs(80));
    assert_eq!(tracker.eta_secs(), 200);

    tracker.advance(2);
    tracker.refresh(Duration::from_secs(30));
    assert_eq!(tracker.eta_secs(), 300);
}

#[test]
fn test_eta_not_computed_when_rounded_to_zero() {
    let mut tracker = ProgressTracker::new(1000);
    tracker.advance(3);
    tracker.refresh(Duration::from_secs(10));
    assert_eq!(tracker.eta_secs(), 0);
}

#[test]
fn test_eta_uses_rounded_percent() {
    // 47 / 1024 = 4.59% rounds to 5
    let mut tracker = ProgressTracker::new(1024);
    tracker.advance(47);
    tracker.refresh(Duration::from_secs(47));
    assert_eq!(tracker.eta_secs(), 1024);
}

#[test]
fn test_finish_reaches_exactly_hundred() {
    let mut tracker = ProgressTracker::new(1000);
    tracker.advance(998);
    tracker.finish();
    assert_eq!(tracker.percent(), 100.0);
}

#[test]
fn test_finish_with_unknown_total() {
    let mut tracker = ProgressTracker::new(0);
    tracker.advance(998);
    tracker.finish();
    assert_eq!(tracker.percent(), 100.0);
}

#[test]
fn test_snapshot_gauge_label_known_total() {
    let mut tracker = ProgressTracker::new(4096);
    tracker.advance(1024);
    let snapshot = Snapshot::capture(Counters::default(), &tracker, Duration::ZERO, false);
    assert_eq!(snapshot.gauge_percent(), 25);
    assert_eq!(snapshot.gauge_label(), "25% (1.0 KiB / 4.0 KiB)");
}

#[test]
fn test_snapshot_gauge_label_unknown_total() {
    let mut tracker = ProgressTracker::new(0);
    tracker.advance(512);
    let snapshot = Snapshot::capture(Counters::default(), &tracker, Duration::ZERO, false);
    assert_eq!(snapshot.gauge_label(), "0% (512 B read)");
}

#[test]
fn test_snapshot_eta_zeroed_when_finished() {
    let mut tracker = ProgressTracker::new(100);
    tracker.advance(5);
    tracker.refresh(Duration::from_secs(10));

    let running = Snapshot::capture(Counters::default(), &tracker, Duration::from_secs(10), false);
    assert_eq!(running.eta_display(), "0:3:20");

    tracker.finish();
    let done = Snapshot::capture(Counters::default(), &tracker, Duration::from_secs(12), true);
    assert_eq!(done.eta_display(), "00:00:00");
    assert_eq!(done.gauge_percent(), 100);
    assert_eq!(done.elapsed_display(), "0:0:12");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_percent_non_decreasing(
        total in 0u64..10_000,
        lines in prop::collection::vec(0usize..500, 1..100)
    ) {
        let mut tracker = ProgressTracker::new(total);
        let mut previous = tracker.percent();
        for len in lines {
            if tracker.advance(len) {
                tracker.refresh(Duration::from_millis(len as u64));
            }
            prop_assert!(tracker.percent() >= previous);
            prop_assert!(tracker.percent() <= 100.0);
            previous = tracker.percent();
        }
        tracker.finish();
        prop_assert_eq!(tracker.percent(), 100.0);
    }

    // ETA changes only on refreshes whose rounded percent is a positive multiple of 5.
    #[test]
    fn prop_eta_changes_only_on_five_percent_boundaries(
        lines in prop::collection::vec(1usize..40, 1..200),
        secs in 1u64..1000
    ) {
        let mut tracker = ProgressTracker::new(2000);
        for len in lines {
            if tracker.advance(len) {
                let before = tracker.eta_secs();
                let rounded = tracker.percent().round() as u64;
                tracker.refresh(Duration::from_secs(secs));
                if rounded == 0 || rounded % 5 != 0 {
                    prop_assert_eq!(tracker.eta_secs(), before);
                }
            }
        }
    }
}
