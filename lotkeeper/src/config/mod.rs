//! Configuration system for lotkeeper.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of capacity, validity and rate settings
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LOTKEEPER_*`)
//! 3. Private project config (`lotkeeper.local.yaml`)
//! 4. Project config (`lotkeeper.yaml`)
//! 5. User config (`~/.lotkeeper/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use lotkeeper::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Inside limit: {}", config.inside_limit());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use lotkeeper::config::{CapacityConfig, Config, ConfigBuilder};
//!
//! let custom = Config {
//!     capacity: Some(CapacityConfig { inside_limit: 2 }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.inside_limit(), 2);
//! ```

pub mod builder;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::{CapacityConfig, Config, RatesConfig, ReservationConfig};
