//! Parking session types.
//!
//! A parking session records one stay: the zone assigned at entry, the
//! entry timestamp, and (once the vehicle leaves) the exit timestamp, the
//! elapsed whole minutes and the fee charged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a vehicle was placed when it was admitted.
///
/// The zone is decided once at entry and never changes for the lifetime of
/// the session; billing uses the zone recorded here even after exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// A covered slot inside the lot. Counted against the capacity limit.
    Inside,
    /// The open area outside the lot. Unlimited.
    Outside,
}

impl Zone {
    /// Returns the canonical lowercase name used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Outside => "outside",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inside" => Ok(Self::Inside),
            "outside" => Ok(Self::Outside),
            _ => Err(format!("invalid zone: {s}")),
        }
    }
}

/// One parking stay for one vehicle.
///
/// A session is open while `exited_at` is `None`. A vehicle has at most one
/// open session at a time, and a session is closed at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSession {
    /// Database row id.
    pub id: i64,
    /// The vehicle this session belongs to.
    pub vehicle_id: i64,
    /// The zone assigned at entry.
    pub zone: Zone,
    /// When the vehicle entered.
    pub entered_at: DateTime<Utc>,
    /// When the vehicle left; `None` while the session is open.
    pub exited_at: Option<DateTime<Utc>>,
    /// Whole minutes between entry and exit; `None` while open.
    pub elapsed_minutes: Option<i64>,
    /// The fee charged at exit; `None` while open.
    pub amount: Option<i64>,
}

impl ParkingSession {
    /// Whether the vehicle is still parked.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_zone_round_trip() {
        for zone in [Zone::Inside, Zone::Outside] {
            let parsed: Zone = zone.as_str().parse().unwrap();
            assert_eq!(parsed, zone);
        }
        assert!("roof".parse::<Zone>().is_err());
    }

    #[test]
    fn test_session_open_state() {
        let entered = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let mut session = ParkingSession {
            id: 1,
            vehicle_id: 7,
            zone: Zone::Inside,
            entered_at: entered,
            exited_at: None,
            elapsed_minutes: None,
            amount: None,
        };
        assert!(session.is_open());

        session.exited_at = Some(entered + chrono::Duration::minutes(61));
        session.elapsed_minutes = Some(61);
        session.amount = Some(4000);
        assert!(!session.is_open());
    }
}
