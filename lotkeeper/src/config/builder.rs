//! Configuration assembly: merging, environment overrides and the builder.
//!
//! Sources are merged lowest precedence first; each overlay wins field by
//! field where it is set. Environment variables sit between files and
//! programmatic overrides.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::loader::ConfigLoader;
use crate::config::schema::{CapacityConfig, Config, RatesConfig, ReservationConfig};
use crate::error::{Error, Result};

/// Merges an overlay configuration over a base, field by field.
///
/// Set fields in the overlay win; unset fields keep the base value. Rate
/// overrides merge per entry rather than wholesale.
#[must_use]
pub fn merge(base: &Config, overlay: &Config) -> Config {
    Config {
        capacity: overlay.capacity.or(base.capacity),
        reservations: overlay.reservations.or(base.reservations),
        rates: merge_rates(base.rates, overlay.rates),
        maximum_lock_wait_seconds: overlay
            .maximum_lock_wait_seconds
            .or(base.maximum_lock_wait_seconds),
    }
}

fn merge_rates(base: Option<RatesConfig>, overlay: Option<RatesConfig>) -> Option<RatesConfig> {
    match (base, overlay) {
        (None, None) => None,
        (Some(rates), None) | (None, Some(rates)) => Some(rates),
        (Some(base), Some(overlay)) => Some(RatesConfig {
            car_inside: overlay.car_inside.or(base.car_inside),
            car_outside: overlay.car_outside.or(base.car_outside),
            motorcycle_inside: overlay.motorcycle_inside.or(base.motorcycle_inside),
            motorcycle_outside: overlay.motorcycle_outside.or(base.motorcycle_outside),
        }),
    }
}

/// Reads configuration overrides from `LOTKEEPER_*` environment variables.
///
/// Recognized variables:
/// - `LOTKEEPER_INSIDE_LIMIT`
/// - `LOTKEEPER_RESERVATION_MINUTES`
/// - `LOTKEEPER_MAX_LOCK_WAIT`
///
/// # Errors
///
/// Returns [`Error::Validation`] if a variable is set but does not parse
/// as a number.
pub fn from_environment() -> Result<Config> {
    let mut config = Config::default();

    if let Some(limit) = parse_env_var::<u32>("LOTKEEPER_INSIDE_LIMIT")? {
        config.capacity = Some(CapacityConfig {
            inside_limit: limit,
        });
    }
    if let Some(minutes) = parse_env_var::<u32>("LOTKEEPER_RESERVATION_MINUTES")? {
        config.reservations = Some(ReservationConfig {
            validity_minutes: minutes,
        });
    }
    if let Some(seconds) = parse_env_var::<u64>("LOTKEEPER_MAX_LOCK_WAIT")? {
        config.maximum_lock_wait_seconds = Some(seconds);
    }

    Ok(config)
}

fn parse_env_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|_| Error::Validation {
            field: name.to_string(),
            message: format!("cannot parse '{value}' as a number"),
        }),
        Err(_) => Ok(None),
    }
}

/// Builds an effective configuration from files, environment and
/// programmatic overrides.
///
/// # Examples
///
/// ```
/// use lotkeeper::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert_eq!(config.inside_limit(), 20);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory from which project config discovery starts.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the data directory holding the user config file.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Skips loading configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides on top of all other sources.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds and validates the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable does not parse, or the merged configuration
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut effective = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in sources {
                effective = merge(&effective, &source.config);
            }
        }

        if !self.skip_env {
            let env_config = from_environment()?;
            effective = merge(&effective, &env_config);
        }

        if let Some(overrides) = self.overrides {
            effective = merge(&effective, &overrides);
        }

        effective.validate()?;
        Ok(effective)
    }
}
