//! Property-based tests for parsing and retry pacing.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::time::Duration;

use proptest::prelude::*;

use gate_cli::domain::{GateError, RetryPolicy, Step, Target, parse_duration};

proptest! {
    /// Every integer with a known unit parses to the matching duration.
    #[test]
    fn prop_duration_units_round_trip(value in 0u64..1_000_000) {
        prop_assert_eq!(parse_duration(&format!("{value}ms")).ok(), Some(Duration::from_millis(value)));
        prop_assert_eq!(parse_duration(&format!("{value}s")).ok(), Some(Duration::from_secs(value)));
        prop_assert_eq!(parse_duration(&value.to_string()).ok(), Some(Duration::from_secs(value)));
        prop_assert_eq!(parse_duration(&format!("{value}m")).ok(), Some(Duration::from_secs(value * 60)));
    }

    /// Unknown suffixes are always rejected.
    #[test]
    fn prop_unknown_units_rejected(value in 0u64..1000, unit in "[a-z]{1,3}") {
        prop_assume!(unit != "ms" && unit != "s" && unit != "m");
        let rejected = matches!(
            parse_duration(&format!("{value}{unit}")),
            Err(GateError::InvalidDuration(_))
        );
        prop_assert!(rejected, "accepted {value}{unit}");
    }

    /// The unbounded policy always sleeps the configured interval.
    #[test]
    fn prop_unbounded_policy_never_gives_up(
        failures in any::<u32>(),
        elapsed_ms in any::<u32>(),
        interval_ms in 0u64..10_000,
    ) {
        let policy = RetryPolicy {
            interval: Duration::from_millis(interval_ms),
            ..RetryPolicy::default()
        };
        prop_assert_eq!(
            policy.next_step(failures, Duration::from_millis(u64::from(elapsed_ms))),
            Step::Sleep(Duration::from_millis(interval_ms))
        );
    }

    /// A deadline-bounded policy never sleeps past the deadline.
    #[test]
    fn prop_deadline_sleep_never_overshoots(
        deadline_ms in 1u64..100_000,
        elapsed_ms in 0u64..100_000,
        interval_ms in 0u64..10_000,
    ) {
        let policy = RetryPolicy {
            interval: Duration::from_millis(interval_ms),
            deadline: Some(Duration::from_millis(deadline_ms)),
            ..RetryPolicy::default()
        };
        let elapsed = Duration::from_millis(elapsed_ms);
        match policy.next_step(1, elapsed) {
            Step::Sleep(pause) => {
                prop_assert!(elapsed < Duration::from_millis(deadline_ms));
                prop_assert!(elapsed + pause <= Duration::from_millis(deadline_ms));
            }
            Step::GiveUp(_) => prop_assert!(elapsed >= Duration::from_millis(deadline_ms)),
        }
    }

    /// Hostnames display as `host:port`.
    #[test]
    fn prop_target_display(host in "[a-z][a-z0-9-]{0,20}(\\.[a-z0-9-]{1,10}){0,3}", port in any::<u16>()) {
        let target = Target::new(&host, port).expect("non-empty host");
        prop_assert_eq!(target.to_string(), format!("{host}:{port}"));
    }
}
