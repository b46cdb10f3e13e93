//! Environment variable handling for configuration overrides.
//!
//! `SEATING_*` variables override values from configuration files.

use clap::ValueEnum;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides the initial simulated day.
pub const START_DAY_ENV: &str = "SEATING_START_DAY";
/// Overrides the cancellation policy.
pub const CANCELLATION_WINDOW_ENV: &str = "SEATING_CANCELLATION_WINDOW";
/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "SEATING_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use seating::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(day) = env::var(START_DAY_ENV) {
            config.start_day = Some(day.trim().parse().map_err(|_| Error::Validation {
                field: START_DAY_ENV.into(),
                message: format!("must be an integer, found {day:?}"),
            })?);
        }

        if let Ok(value) = env::var(CANCELLATION_WINDOW_ENV) {
            config.cancellation_window = Some(Self::parse_enum(CANCELLATION_WINDOW_ENV, &value)?);
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_enum(OUTPUT_FORMAT_ENV, &value)?);
        }

        Ok(())
    }

    fn parse_enum<T: ValueEnum>(field: &str, value: &str) -> Result<T> {
        T::from_str(value.trim(), true).map_err(|_| {
            let expected: Vec<String> = T::value_variants()
                .iter()
                .filter_map(ValueEnum::to_possible_value)
                .map(|v| v.get_name().to_string())
                .collect();
            Error::Validation {
                field: field.into(),
                message: format!("expected one of {}, found {value:?}", expected.join(", ")),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::CancellationWindow;
    use crate::output::OutputFormat;
    use serial_test::serial;

    const ALL: [&str; 3] = [START_DAY_ENV, CANCELLATION_WINDOW_ENV, OUTPUT_FORMAT_ENV];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<(&str, Option<String>)> =
            ALL.iter().map(|name| (*name, env::var(name).ok())).collect();
        for name in ALL {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }

        f();

        for (name, value) in saved {
            match value {
                Some(v) => env::set_var(name, v),
                None => env::remove_var(name),
            }
        }
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        with_env(&[], || {
            let mut config = Config {
                start_day: Some(4),
                ..Config::default()
            };
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.start_day, Some(4));
            assert_eq!(config.cancellation_window, None);
        });
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        with_env(
            &[
                (START_DAY_ENV, "6"),
                (CANCELLATION_WINDOW_ENV, "booking-window"),
                (OUTPUT_FORMAT_ENV, "JSON"),
            ],
            || {
                let mut config = Config {
                    start_day: Some(4),
                    ..Config::default()
                };
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.start_day, Some(6));
                assert_eq!(
                    config.cancellation_window,
                    Some(CancellationWindow::BookingWindow)
                );
                assert_eq!(config.output_format, Some(OutputFormat::Json));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_start_day() {
        with_env(&[(START_DAY_ENV, "tomorrow")], || {
            let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
            assert!(matches!(err, Error::Validation { ref field, .. } if field == START_DAY_ENV));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_enum_lists_choices() {
        with_env(&[(CANCELLATION_WINDOW_ENV, "anytime")], || {
            let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
            let message = err.to_string();
            assert!(message.contains("period-max"));
            assert!(message.contains("booking-window"));
        });
    }
}
