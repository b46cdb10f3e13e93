//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::hours::Day;
use crate::ledger::CancellationWindow;
use crate::output::OutputFormat;

/// Day the simulation starts on when nothing else is configured.
pub const DEFAULT_START_DAY: Day = 1;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; the accessor
/// methods resolve unset fields to their defaults.
///
/// # Examples
///
/// ```
/// use seating::config::Config;
/// use seating::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("output_format: json\n").unwrap();
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert_eq!(config.start_day(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial simulated day.
    pub start_day: Option<Day>,

    /// Which offsets allow self-service cancellation.
    pub cancellation_window: Option<CancellationWindow>,

    /// Output format for events.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Initial simulated day, defaulting to 1.
    #[must_use]
    pub fn start_day(&self) -> Day {
        self.start_day.unwrap_or(DEFAULT_START_DAY)
    }

    /// Cancellation policy, defaulting to [`CancellationWindow::PeriodMax`].
    #[must_use]
    pub fn cancellation_window(&self) -> CancellationWindow {
        self.cancellation_window.unwrap_or_default()
    }

    /// Output format, defaulting to [`OutputFormat::Text`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.start_day(), 1);
        assert_eq!(config.cancellation_window(), CancellationWindow::PeriodMax);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "start_day: 4\ncancellation_window: booking-window\noutput_format: json\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.start_day, Some(4));
        assert_eq!(
            config.cancellation_window,
            Some(CancellationWindow::BookingWindow)
        );
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("start_day: 1\ntimezone: UTC\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("cancellation_window: anytime\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config {
            start_day: Some(2),
            cancellation_window: Some(CancellationWindow::BookingWindow),
            output_format: None,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("booking-window"));
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
