//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading lotkeeper configuration
//! files from various locations with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

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
/// use lotkeeper::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.lotkeeper/config.yaml` (precedence 1)
    /// 2. Project `lotkeeper.yaml` files walking up from `working_dir`
    ///    (precedence 2)
    /// 3. Project `lotkeeper.local.yaml` files (precedence 3)
    ///
    /// The `data_dir` parameter allows overriding where the user config is
    /// loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        // Load user config (~/.lotkeeper/config.yaml or custom data dir)
        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        // Walk up directory tree looking for lotkeeper.yaml/lotkeeper.local.yaml
        let project_configs = Self::discover_project_configs(working_dir)?;
        sources.extend(project_configs);

        // Sort by precedence (higher precedence last for easier processing)
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load user configuration file.
    ///
    /// If `data_dir` is provided, loads from `{data_dir}/config.yaml`.
    /// Otherwise uses the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = if let Some(dir) = data_dir {
            dir.join("config.yaml")
        } else {
            Self::user_config_path()?
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1, // Lowest precedence
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `lotkeeper.yaml` or
    /// `lotkeeper.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            let mut found_any = false;

            let project_yaml = current.join("lotkeeper.yaml");
            if project_yaml.exists() {
                let config = Self::load_file(&project_yaml)?;
                configs.push(ConfigSource {
                    path: project_yaml,
                    precedence: 2,
                    config,
                });
                found_any = true;
            }

            // Local overrides take precedence over the shared project file
            let local_yaml = current.join("lotkeeper.local.yaml");
            if local_yaml.exists() {
                let config = Self::load_file(&local_yaml)?;
                configs.push(ConfigSource {
                    path: local_yaml,
                    precedence: 3,
                    config,
                });
                found_any = true;
            }

            // Stop if we found configs or can't go up anymore
            if found_any || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Loads and parses a single YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for the configuration schema.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Returns the default user configuration path.
    fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(".lotkeeper").join("config.yaml"))
    }
}
