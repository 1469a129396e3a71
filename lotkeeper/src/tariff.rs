//! Hourly rate table and fee arithmetic.
//!
//! Fees are charged per started hour: the elapsed time is rounded up to
//! whole hours, with a minimum of one hour for any positive stay. The rate
//! is keyed by the vehicle category and the zone assigned at entry.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::session::Zone;
use crate::vehicle::VehicleCategory;

/// Hourly rates in whole currency units, per category and zone.
///
/// # Examples
///
/// ```
/// use lotkeeper::{RateTable, VehicleCategory, Zone};
///
/// let rates = RateTable::default();
/// assert_eq!(rates.rate(VehicleCategory::Car, Zone::Inside), 2000);
/// assert_eq!(rates.rate(VehicleCategory::Motorcycle, Zone::Outside), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Hourly rate for a car parked inside.
    pub car_inside: i64,
    /// Hourly rate for a car parked outside.
    pub car_outside: i64,
    /// Hourly rate for a motorcycle parked inside.
    pub motorcycle_inside: i64,
    /// Hourly rate for a motorcycle parked outside.
    pub motorcycle_outside: i64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            car_inside: 2000,
            car_outside: 1500,
            motorcycle_inside: 1500,
            motorcycle_outside: 1000,
        }
    }
}

impl RateTable {
    /// Returns the hourly rate for the given category and zone.
    #[must_use]
    pub const fn rate(&self, category: VehicleCategory, zone: Zone) -> i64 {
        match (category, zone) {
            (VehicleCategory::Car, Zone::Inside) => self.car_inside,
            (VehicleCategory::Car, Zone::Outside) => self.car_outside,
            (VehicleCategory::Motorcycle, Zone::Inside) => self.motorcycle_inside,
            (VehicleCategory::Motorcycle, Zone::Outside) => self.motorcycle_outside,
        }
    }

    /// Computes the fee for a stay of `elapsed` at the given category and
    /// zone.
    #[must_use]
    pub fn fee(&self, category: VehicleCategory, zone: Zone, elapsed: Duration) -> i64 {
        billable_hours(elapsed) * self.rate(category, zone)
    }
}

/// Rounds an elapsed stay up to whole billable hours.
///
/// Any positive stay bills at least one hour; a non-positive stay bills
/// zero.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use lotkeeper::tariff::billable_hours;
///
/// assert_eq!(billable_hours(Duration::minutes(1)), 1);
/// assert_eq!(billable_hours(Duration::minutes(60)), 1);
/// assert_eq!(billable_hours(Duration::minutes(61)), 2);
/// assert_eq!(billable_hours(Duration::zero()), 0);
/// ```
#[must_use]
pub fn billable_hours(elapsed: Duration) -> i64 {
    if elapsed <= Duration::zero() {
        return 0;
    }
    // num_seconds truncates, so a sub-second stay still bills one hour
    // (n + 3599) / 3600 == div_ceil for the non-negative seconds we have here;
    // i64::div_ceil is unstable on this toolchain.
    ((elapsed.num_seconds() + 3599) / 3600).max(1)
}

/// Returns the elapsed stay in whole minutes, clamped at zero.
///
/// This is the informational figure recorded on the session at exit; it is
/// not used for billing.
#[must_use]
pub fn elapsed_whole_minutes(elapsed: Duration) -> i64 {
    elapsed.num_minutes().max(0)
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billable_hours_rounds_up() {
        assert_eq!(billable_hours(Duration::minutes(1)), 1);
        assert_eq!(billable_hours(Duration::minutes(59)), 1);
        assert_eq!(billable_hours(Duration::minutes(60)), 1);
        assert_eq!(billable_hours(Duration::minutes(61)), 2);
        assert_eq!(billable_hours(Duration::minutes(120)), 2);
        assert_eq!(billable_hours(Duration::minutes(121)), 3);
    }

    #[test]
    fn test_billable_hours_sub_minute_stay() {
        assert_eq!(billable_hours(Duration::seconds(1)), 1);
        assert_eq!(billable_hours(Duration::seconds(59)), 1);
    }

    #[test]
    fn test_billable_hours_non_positive() {
        assert_eq!(billable_hours(Duration::zero()), 0);
        assert_eq!(billable_hours(Duration::seconds(-5)), 0);
    }

    #[test]
    fn test_default_rates() {
        let rates = RateTable::default();
        assert_eq!(rates.rate(VehicleCategory::Car, Zone::Inside), 2000);
        assert_eq!(rates.rate(VehicleCategory::Car, Zone::Outside), 1500);
        assert_eq!(rates.rate(VehicleCategory::Motorcycle, Zone::Inside), 1500);
        assert_eq!(rates.rate(VehicleCategory::Motorcycle, Zone::Outside), 1000);
    }

    #[test]
    fn test_fee_uses_zone_at_entry() {
        let rates = RateTable::default();
        // 61 minutes bills as 2 hours.
        let elapsed = Duration::minutes(61);
        assert_eq!(rates.fee(VehicleCategory::Car, Zone::Inside, elapsed), 4000);
        assert_eq!(rates.fee(VehicleCategory::Car, Zone::Outside, elapsed), 3000);
        assert_eq!(
            rates.fee(VehicleCategory::Motorcycle, Zone::Outside, elapsed),
            2000
        );
    }

    #[test]
    fn test_elapsed_whole_minutes_floors() {
        assert_eq!(elapsed_whole_minutes(Duration::seconds(59)), 0);
        assert_eq!(elapsed_whole_minutes(Duration::seconds(61)), 1);
        assert_eq!(elapsed_whole_minutes(Duration::minutes(61)), 61);
        assert_eq!(elapsed_whole_minutes(Duration::seconds(-5)), 0);
    }
}
