//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use seating::config::{Config, ConfigMerger};
///
/// let low = Config { start_day: Some(2), ..Default::default() };
/// let high = Config { start_day: Some(5), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.start_day, Some(5));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into the final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.start_day.is_some() {
            target.start_day = source.start_day;
        }

        if source.cancellation_window.is_some() {
            target.cancellation_window = source.cancellation_window;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
