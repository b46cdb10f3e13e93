//! Configuration system for seating.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and a per-directory `seating.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEATING_*`)
//! 3. Explicit config file, or `seating.yaml` in the working directory
//! 4. User config (`~/.seating/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use seating::config::{Config, ConfigBuilder};
//! use seating::CancellationWindow;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         start_day: Some(3),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.start_day(), 3);
//! assert_eq!(config.cancellation_window(), CancellationWindow::PeriodMax);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
