//! Output formatting for batch events.
//!
//! Every processed command produces zero or more [`Event`]s. A formatter
//! turns one event into one line of output: the plain text protocol, or a
//! JSON object per line for machine consumption.

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatch::Event;
use crate::Result;

pub use formatters::{legacy_message, JsonFormatter, TextFormatter};

/// Trait for formatting events into output lines.
pub trait OutputFormatter {
    /// Formats one event as a single line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be serialized.
    fn format(&self, event: &Event) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use seating::output::OutputFormat;
///
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `to:<recipient> <message>` and `Error: ...` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
