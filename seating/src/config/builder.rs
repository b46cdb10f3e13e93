//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```no_run
/// use seating::config::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_working_dir(Path::new("/srv/bookings"))
///     .build()
///     .unwrap();
/// println!("starting on day {}", config.start_day());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory searched for `seating.yaml`; defaults to the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Reads this file instead of looking for `seating.yaml`.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Reads the user config from `{dir}/config.yaml` instead of
    /// `~/.seating/config.yaml`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Values that override every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `SEATING_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merges all enabled sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(
                &working_dir,
                self.config_file.as_deref(),
                self.user_dir.as_deref(),
            )?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
