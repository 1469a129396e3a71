//! Occupancy snapshots.
//!
//! An [`Occupancy`] is a point-in-time tally of open parking sessions,
//! grouped by category and zone. It is always computed fresh from the
//! session table; no occupancy counters are stored anywhere.

use serde::{Deserialize, Serialize};

use crate::session::Zone;
use crate::vehicle::VehicleCategory;

/// A point-in-time tally of parked vehicles.
///
/// Counts reflect open sessions only. Because reservation redemption can
/// admit a vehicle into a full inside zone, an inside count may exceed the
/// configured limit; `inside_free` saturates at zero in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Cars parked inside.
    pub car_inside: u32,
    /// Cars parked outside.
    pub car_outside: u32,
    /// Motorcycles parked inside.
    pub motorcycle_inside: u32,
    /// Motorcycles parked outside.
    pub motorcycle_outside: u32,
}

impl Occupancy {
    /// Returns the count for one category and zone.
    #[must_use]
    pub const fn count(&self, category: VehicleCategory, zone: Zone) -> u32 {
        match (category, zone) {
            (VehicleCategory::Car, Zone::Inside) => self.car_inside,
            (VehicleCategory::Car, Zone::Outside) => self.car_outside,
            (VehicleCategory::Motorcycle, Zone::Inside) => self.motorcycle_inside,
            (VehicleCategory::Motorcycle, Zone::Outside) => self.motorcycle_outside,
        }
    }

    /// Returns the inside count for one category.
    #[must_use]
    pub const fn inside(&self, category: VehicleCategory) -> u32 {
        self.count(category, Zone::Inside)
    }

    /// Returns the remaining inside capacity for one category, saturating
    /// at zero when redeemed reservations have pushed the count over the
    /// limit.
    #[must_use]
    pub const fn inside_free(&self, category: VehicleCategory, limit: u32) -> u32 {
        limit.saturating_sub(self.inside(category))
    }

    /// Total number of parked vehicles, both zones.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.car_inside + self.car_outside + self.motorcycle_inside + self.motorcycle_outside
    }

    /// Adds one open session to the tally.
    pub fn record(&mut self, category: VehicleCategory, zone: Zone, count: u32) {
        match (category, zone) {
            (VehicleCategory::Car, Zone::Inside) => self.car_inside += count,
            (VehicleCategory::Car, Zone::Outside) => self.car_outside += count,
            (VehicleCategory::Motorcycle, Zone::Inside) => self.motorcycle_inside += count,
            (VehicleCategory::Motorcycle, Zone::Outside) => self.motorcycle_outside += count,
        }
    }
}
