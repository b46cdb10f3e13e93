//! Property-based tests for ledger validation and transitions.

use super::{CancellationWindow, Ledger};
use crate::error::Error;
use crate::hours::{Day, WeeklyHours};
use crate::registry::Registry;
use crate::reservation::{ReservationRequest, ReservationStatus};
use crate::Restaurant;
use proptest::prelude::*;

fn registry_with(max: Day, min: Day) -> Registry {
    let mut registry = Registry::new();
    registry.register(
        Restaurant::builder("R1", "555-0100")
            .booking_window(max, min)
            .group_size(1, 8)
            .hours(WeeklyHours::every_day(&["00:00-24:00"]))
            .build(),
    );
    registry
}

fn request(rid: String, date: Day, group_size: i64) -> ReservationRequest {
    ReservationRequest {
        rid,
        uid: "U1".to_string(),
        sid: "R1".to_string(),
        date,
        time: "12:00".to_string(),
        group_size,
    }
}

#[derive(Debug, Clone)]
enum Step {
    Confirm(usize),
    Reject(usize),
    Cancel(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..6).prop_map(Step::Confirm),
        (0usize..6).prop_map(Step::Reject),
        (0usize..6).prop_map(Step::Cancel),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Requests outside the booking window are always rejected, whatever the
    // other fields say
    #[test]
    fn outside_window_always_rejected(
        max in 0i64..10,
        min in 0i64..10,
        today in 1i64..20,
        date in -5i64..40,
        group_size in -3i64..12
    ) {
        let registry = registry_with(max, min);
        let mut ledger = Ledger::new(today);
        let offset = date - today;
        let result = ledger.request(&registry, request("X".to_string(), date, group_size));

        if offset < min || offset > max {
            let rejected_for_window = matches!(result, Err(Error::OutsideBookingWindow { .. }));
            prop_assert!(rejected_for_window);
            prop_assert!(ledger.is_empty());
        }
    }

    // A reservation leaves PENDING at most once; only a confirmed one can
    // move again, to CANCELLED
    #[test]
    fn at_most_one_transition(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let registry = registry_with(7, 1);
        let mut ledger = Ledger::new(1);
        let rids: Vec<String> = (0..6).map(|i| format!("X{i}")).collect();
        for rid in &rids {
            // Day 8 is period_max ahead, so cancellation is self-service
            ledger.request(&registry, request(rid.clone(), 8, 2)).unwrap();
        }

        let mut transitions = vec![0usize; rids.len()];
        for step in steps {
            let (index, result) = match step {
                Step::Confirm(i) => (i, ledger.confirm(&registry, "R1", &rids[i])),
                Step::Reject(i) => (i, ledger.reject(&registry, "R1", &rids[i])),
                Step::Cancel(i) => (
                    i,
                    ledger.cancel(&registry, CancellationWindow::PeriodMax, "U1", &rids[i]),
                ),
            };
            if result.is_ok() {
                transitions[index] += 1;
            }
        }

        for (i, rid) in rids.iter().enumerate() {
            let status = ledger.get(rid).unwrap().status();
            prop_assert!(transitions[i] <= 2);
            if transitions[i] == 2 {
                prop_assert_eq!(status, ReservationStatus::Cancelled);
            }
            if transitions[i] == 0 {
                prop_assert_eq!(status, ReservationStatus::Pending);
            } else {
                prop_assert!(status.is_terminal());
            }
        }
    }

    // The day sweep rejects exactly the pending reservations in ascending order
    #[test]
    fn sweep_rejects_exactly_pending(
        ids in prop::collection::btree_set("[a-z]{1,4}", 1..12),
        confirm_mask in prop::collection::vec(any::<bool>(), 12)
    ) {
        let registry = registry_with(7, 1);
        let mut ledger = Ledger::new(1);
        let ids: Vec<String> = ids.into_iter().collect();
        for id in &ids {
            ledger.request(&registry, request(id.clone(), 3, 2)).unwrap();
        }

        let mut expected = Vec::new();
        for (id, confirm) in ids.iter().zip(&confirm_mask) {
            if *confirm {
                ledger.confirm(&registry, "R1", id).unwrap();
            } else {
                expected.push(format!("to:U1 {id} has been auto-rejected"));
            }
        }

        let lines: Vec<String> = ledger.advance_day().iter().map(ToString::to_string).collect();
        prop_assert_eq!(lines, expected);
        prop_assert_eq!(ledger.count(ReservationStatus::Pending), 0);
        let confirmed = confirm_mask.iter().take(ids.len()).filter(|c| **c).count();
        prop_assert_eq!(ledger.count(ReservationStatus::Confirmed), confirmed);
    }
}
