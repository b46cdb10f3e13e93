//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::ledger::CancellationWindow;
use crate::output::OutputFormat;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(-5i64..400),
        prop::option::of(prop_oneof![
            Just(CancellationWindow::PeriodMax),
            Just(CancellationWindow::BookingWindow),
        ]),
        prop::option::of(prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]),
    )
        .prop_map(|(start_day, cancellation_window, output_format)| Config {
            start_day,
            cancellation_window,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins wherever it sets a value
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.start_day, high.start_day.or(low.start_day));
        prop_assert_eq!(
            merged.cancellation_window,
            high.cancellation_window.or(low.cancellation_window)
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Validation accepts exactly the configs that start on day 1 or later
    #[test]
    fn config_validation_matches_start_day(config in config_strategy()) {
        let valid = config.start_day.map_or(true, |day| day >= 1);
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), valid);
    }
}
