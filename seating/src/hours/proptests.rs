//! Property-based tests for clock times and time ranges.

use super::{weekday_for, ClockTime, StopOverrides, TimeRange};
use proptest::prelude::*;

fn clock_strategy() -> impl Strategy<Value = ClockTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| ClockTime::from_hm(h, m))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Formatting a clock time and parsing it back yields the same minute count
    #[test]
    fn clock_time_display_parses_back(t in clock_strategy()) {
        let parsed: ClockTime = t.to_string().parse().unwrap();
        prop_assert_eq!(parsed, t);
    }

    // Containment is exactly start <= t < end
    #[test]
    fn range_containment_is_half_open(
        start in clock_strategy(),
        end in clock_strategy(),
        probe in clock_strategy()
    ) {
        let range = TimeRange::new(start, end);
        let expected = start.minutes() <= probe.minutes() && probe.minutes() < end.minutes();
        prop_assert_eq!(range.contains(probe), expected);
        prop_assert!(!range.contains(end));
    }

    // Interior segments never influence the parsed bounds
    #[test]
    fn range_ignores_interior_segments(
        start in clock_strategy(),
        middle in "[a-z0-9:]{0,6}",
        end in clock_strategy()
    ) {
        let plain: TimeRange = format!("{start}-{end}").parse().unwrap();
        let noisy: TimeRange = format!("{start}-{middle}-{end}").parse().unwrap();
        prop_assert_eq!(plain, noisy);
    }

    // Weekdays repeat with period seven
    #[test]
    fn weekday_has_period_seven(date in -1000i64..1000) {
        prop_assert_eq!(weekday_for(date), weekday_for(date + 7));
    }

    // Stop slots exist for days 1..=7 only
    #[test]
    fn stop_slots_cover_first_week_only(date in -50i64..50) {
        let mut stops = StopOverrides::default();
        let stored = stops.set(date, "00:00-24:00");
        prop_assert_eq!(stored, (1..=7).contains(&date));
        prop_assert_eq!(stops.blocks(date, ClockTime::from_hm(12, 0)), stored);
    }
}
