//! Property-based tests for fee arithmetic.

use chrono::Duration;
use proptest::prelude::*;

use super::{billable_hours, elapsed_whole_minutes, RateTable};
use crate::session::Zone;
use crate::vehicle::VehicleCategory;

fn category_strategy() -> impl Strategy<Value = VehicleCategory> {
    prop_oneof![
        Just(VehicleCategory::Car),
        Just(VehicleCategory::Motorcycle)
    ]
}

fn zone_strategy() -> impl Strategy<Value = Zone> {
    prop_oneof![Just(Zone::Inside), Just(Zone::Outside)]
}

proptest! {
    // Every positive stay bills at least one hour.
    #[test]
    fn positive_stay_bills_at_least_one_hour(seconds in 1i64..10_000_000) {
        prop_assert!(billable_hours(Duration::seconds(seconds)) >= 1);
    }

    // The ceiling never undershoots and overshoots by less than an hour.
    #[test]
    fn billable_hours_is_a_tight_ceiling(seconds in 1i64..10_000_000) {
        let hours = billable_hours(Duration::seconds(seconds));
        prop_assert!(hours * 3600 >= seconds);
        prop_assert!((hours - 1) * 3600 < seconds);
    }

    // Billing is monotone in elapsed time.
    #[test]
    fn billable_hours_is_monotone(a in 0i64..10_000_000, b in 0i64..10_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            billable_hours(Duration::seconds(lo)) <= billable_hours(Duration::seconds(hi))
        );
    }

    // Recorded minutes always floor the true elapsed time.
    #[test]
    fn whole_minutes_floor(seconds in 0i64..10_000_000) {
        let minutes = elapsed_whole_minutes(Duration::seconds(seconds));
        prop_assert!(minutes * 60 <= seconds);
        prop_assert!((minutes + 1) * 60 > seconds);
    }

    // The fee is exactly hours times the configured rate.
    #[test]
    fn fee_is_hours_times_rate(
        seconds in 0i64..10_000_000,
        category in category_strategy(),
        zone in zone_strategy(),
        rate in 1i64..100_000,
    ) {
        let rates = RateTable {
            car_inside: rate,
            car_outside: rate,
            motorcycle_inside: rate,
            motorcycle_outside: rate,
        };
        let elapsed = Duration::seconds(seconds);
        prop_assert_eq!(
            rates.fee(category, zone, elapsed),
            billable_hours(elapsed) * rate
        );
    }
}
