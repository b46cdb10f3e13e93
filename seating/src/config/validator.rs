//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use seating::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let config = Config { start_day: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `start_day` is below 1.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(day) = config.start_day {
            if day < 1 {
                return Err(Error::Validation {
                    field: "start_day".into(),
                    message: format!("must be at least 1, found {day}"),
                });
            }
        }

        Ok(())
    }
}
