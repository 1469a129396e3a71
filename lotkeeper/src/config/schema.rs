//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for lotkeeper,
//! including capacity limits, reservation validity and the hourly rate
//! table. All fields are optional so partial files merge cleanly; the
//! effective accessors fill in the built-in defaults.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tariff::RateTable;

/// Default per-category inside capacity.
pub const DEFAULT_INSIDE_LIMIT: u32 = 20;

/// Default reservation validity in minutes.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use lotkeeper::config::{CapacityConfig, Config};
///
/// let config = Config {
///     capacity: Some(CapacityConfig { inside_limit: 2 }),
///     ..Default::default()
/// };
/// assert_eq!(config.inside_limit(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Inside-zone capacity settings.
    pub capacity: Option<CapacityConfig>,

    /// Reservation validity settings.
    pub reservations: Option<ReservationConfig>,

    /// Hourly rate overrides.
    pub rates: Option<RatesConfig>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,
}

/// Inside-zone capacity configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CapacityConfig {
    /// Number of inside slots per vehicle category.
    pub inside_limit: u32,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            inside_limit: DEFAULT_INSIDE_LIMIT,
        }
    }
}

/// Reservation validity configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReservationConfig {
    /// Minutes a reservation stays redeemable after creation.
    pub validity_minutes: u32,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            validity_minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }
}

/// Hourly rate overrides, in whole currency units.
///
/// Each field overrides one entry of the rate table; unset fields keep
/// the built-in default.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RatesConfig {
    /// Hourly rate for a car parked inside.
    pub car_inside: Option<i64>,
    /// Hourly rate for a car parked outside.
    pub car_outside: Option<i64>,
    /// Hourly rate for a motorcycle parked inside.
    pub motorcycle_inside: Option<i64>,
    /// Hourly rate for a motorcycle parked outside.
    pub motorcycle_outside: Option<i64>,
}

impl Config {
    /// Effective per-category inside capacity.
    #[must_use]
    pub fn inside_limit(&self) -> u32 {
        self.capacity
            .map_or(DEFAULT_INSIDE_LIMIT, |c| c.inside_limit)
    }

    /// Effective reservation validity window.
    #[must_use]
    pub fn reservation_validity(&self) -> Duration {
        let minutes = self
            .reservations
            .map_or(DEFAULT_VALIDITY_MINUTES, |r| r.validity_minutes);
        Duration::minutes(i64::from(minutes))
    }

    /// Effective rate table with overrides applied over the defaults.
    #[must_use]
    pub fn rate_table(&self) -> RateTable {
        let defaults = RateTable::default();
        let rates = self.rates.unwrap_or_default();
        RateTable {
            car_inside: rates.car_inside.unwrap_or(defaults.car_inside),
            car_outside: rates.car_outside.unwrap_or(defaults.car_outside),
            motorcycle_inside: rates
                .motorcycle_inside
                .unwrap_or(defaults.motorcycle_inside),
            motorcycle_outside: rates
                .motorcycle_outside
                .unwrap_or(defaults.motorcycle_outside),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the capacity limit or reservation
    /// validity is zero, or any configured rate is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.inside_limit() == 0 {
            return Err(Error::Validation {
                field: "capacity.inside_limit".into(),
                message: "must be at least 1".into(),
            });
        }
        if let Some(reservations) = self.reservations {
            if reservations.validity_minutes == 0 {
                return Err(Error::Validation {
                    field: "reservations.validity_minutes".into(),
                    message: "must be at least 1".into(),
                });
            }
        }
        let rates = self.rate_table();
        for (field, rate) in [
            ("rates.car_inside", rates.car_inside),
            ("rates.car_outside", rates.car_outside),
            ("rates.motorcycle_inside", rates.motorcycle_inside),
            ("rates.motorcycle_outside", rates.motorcycle_outside),
        ] {
            if rate <= 0 {
                return Err(Error::Validation {
                    field: field.into(),
                    message: "must be positive".into(),
                });
            }
        }
        Ok(())
    }
}
