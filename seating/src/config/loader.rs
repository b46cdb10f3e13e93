//! Configuration file discovery and loading.
//!
//! This module finds the YAML configuration files that apply to a run and
//! parses them, tagging each with its precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "seating.yaml";

/// Directory under the home directory holding the user config.
pub const USER_CONFIG_DIR: &str = ".seating";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use seating::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None, None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Loads:
    /// 1. User config at `~/.seating/config.yaml`, or `{user_dir}/config.yaml`
    ///    when `user_dir` is given (precedence 1)
    /// 2. `explicit` if given, otherwise `seating.yaml` in `working_dir`
    ///    (precedence 2)
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist, or if any discovered
    /// file cannot be read or parsed.
    pub fn load_all(
        working_dir: &Path,
        explicit: Option<&Path>,
        user_dir: Option<&Path>,
    ) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(project) = Self::load_project_config(working_dir, explicit)? {
            sources.push(project);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory; skipping user config");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    fn load_project_config(
        working_dir: &Path,
        explicit: Option<&Path>,
    ) -> Result<Option<ConfigSource>> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "configuration file does not exist".into(),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let path = working_dir.join(PROJECT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(None);
                }
                path
            }
        };

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 2,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        log::debug!("loading configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Path of the user config, if the home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_no_configs() {
        let work = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(work.path(), None, Some(user.path())).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_discover_project_config() {
        let work = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(work.path().join(PROJECT_CONFIG_FILE), "start_day: 3\n").unwrap();

        let sources = ConfigLoader::load_all(work.path(), None, Some(user.path())).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].precedence, 2);
        assert_eq!(sources[0].config.start_day, Some(3));
    }

    #[test]
    fn test_explicit_file_replaces_project_lookup() {
        let work = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(work.path().join(PROJECT_CONFIG_FILE), "start_day: 3\n").unwrap();
        let explicit = work.path().join("other.yaml");
        fs::write(&explicit, "output_format: json\n").unwrap();

        let sources =
            ConfigLoader::load_all(work.path(), Some(&explicit), Some(user.path())).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].path, explicit);
        assert_eq!(sources[0].config.output_format, Some(OutputFormat::Json));
        assert_eq!(sources[0].config.start_day, None);
    }

    #[test]
    fn test_missing_explicit_file() {
        let work = TempDir::new().unwrap();
        let result = ConfigLoader::load_all(
            work.path(),
            Some(&work.path().join("missing.yaml")),
            Some(work.path()),
        );
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_all_sorts_by_precedence() {
        let work = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(work.path().join(PROJECT_CONFIG_FILE), "start_day: 3\n").unwrap();
        fs::write(user.path().join("config.yaml"), "start_day: 9\n").unwrap();

        let sources = ConfigLoader::load_all(work.path(), None, Some(user.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }
}
