//! Slot reservation types.
//!
//! A reservation lets a resident claim the next opening while the inside
//! zone is full. Reservations are valid for a fixed window after creation
//! and are redeemed (or swept) exactly once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A slot reservation held by a resident's vehicle.
///
/// The `active` flag is cleared when the reservation is redeemed at entry
/// or deactivated by the expiry sweep. An expired reservation may still
/// carry `active = true` until one of those happens; readers must check
/// `expires_at` as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Database row id.
    pub id: i64,
    /// The vehicle this reservation belongs to.
    pub vehicle_id: i64,
    /// When the reservation was created.
    pub reserved_at: DateTime<Utc>,
    /// When the reservation stops being redeemable.
    pub expires_at: DateTime<Utc>,
    /// Whether the reservation is still live (not redeemed, not swept).
    pub active: bool,
}

impl Reservation {
    /// Whether the validity window has passed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Whether this reservation would be honored at entry at `now`.
    #[must_use]
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        self.active && !self.is_expired(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reservation_at(reserved: DateTime<Utc>) -> Reservation {
        Reservation {
            id: 1,
            vehicle_id: 3,
            reserved_at: reserved,
            expires_at: reserved + Duration::minutes(30),
            active: true,
        }
    }

    #[test]
    fn test_redeemable_inside_window() {
        let reserved = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let reservation = reservation_at(reserved);

        assert!(reservation.is_redeemable(reserved + Duration::minutes(29)));
        assert!(!reservation.is_expired(reserved + Duration::minutes(29)));
    }

    #[test]
    fn test_expired_at_exact_boundary() {
        let reserved = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let reservation = reservation_at(reserved);

        // The boundary instant itself is no longer redeemable.
        assert!(reservation.is_expired(reserved + Duration::minutes(30)));
        assert!(!reservation.is_redeemable(reserved + Duration::minutes(30)));
    }

    #[test]
    fn test_inactive_is_never_redeemable() {
        let reserved = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut reservation = reservation_at(reserved);
        reservation.active = false;

        assert!(!reservation.is_redeemable(reserved + Duration::minutes(1)));
    }
}
