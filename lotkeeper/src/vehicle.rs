//! Vehicle types for the parking lot registry.
//!
//! This module provides the vehicle category, the owner role that governs
//! admission behavior, validated license plates, and the registered vehicle
//! record itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The category of a registered vehicle.
///
/// Capacity limits and hourly rates are tracked per category.
///
/// # Examples
///
/// ```
/// use lotkeeper::VehicleCategory;
///
/// assert_eq!(VehicleCategory::Car.as_str(), "car");
/// assert_eq!("motorcycle".parse::<VehicleCategory>().unwrap(), VehicleCategory::Motorcycle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// A car. Occupies a car slot.
    Car,
    /// A motorcycle. Occupies a motorcycle slot.
    Motorcycle,
}

impl VehicleCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 2] = [Self::Car, Self::Motorcycle];

    /// Returns the canonical lowercase name used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(format!("invalid vehicle category: {s}")),
        }
    }
}

/// The role of the user who owns a vehicle.
///
/// The role is fixed at registration and selects the admission policy once,
/// at entry time. Residents may hold and redeem slot reservations when the
/// lot is full; operators never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerRole {
    /// A resident of the building the lot serves.
    Resident,
    /// Facility staff.
    Operator,
}

impl OwnerRole {
    /// Returns the canonical lowercase name used in storage and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Operator => "operator",
        }
    }

    /// Whether this role may hold and redeem reservations.
    #[must_use]
    pub const fn may_reserve(self) -> bool {
        matches!(self, Self::Resident)
    }
}

impl fmt::Display for OwnerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resident" => Ok(Self::Resident),
            "operator" => Ok(Self::Operator),
            _ => Err(format!("invalid owner role: {s}")),
        }
    }
}

/// A validated license plate.
///
/// Plates are stored uppercase. A valid plate is 2 to 10 characters of
/// ASCII letters, digits and dashes.
///
/// # Examples
///
/// ```
/// use lotkeeper::Plate;
///
/// let plate = Plate::new("abc123").unwrap();
/// assert_eq!(plate.as_str(), "ABC123");
///
/// assert!(Plate::new("").is_err());
/// assert!(Plate::new("no spaces").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    /// Creates a plate from user input, trimming and uppercasing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is shorter than 2 or longer
    /// than 10 characters, or contains anything other than ASCII letters,
    /// digits and dashes.
    pub fn new(input: &str) -> Result<Self, InvalidPlateError> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.len() < 2 || normalized.len() > 10 {
            return Err(InvalidPlateError {
                value: input.to_string(),
                reason: "must be 2 to 10 characters".into(),
            });
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(InvalidPlateError {
                value: input.to_string(),
                reason: "only letters, digits and dashes are allowed".into(),
            });
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized plate text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Plate {
    type Err = InvalidPlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error type for invalid license plates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPlateError {
    /// The rejected input.
    pub value: String,
    /// The reason the plate is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidPlateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid plate '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidPlateError {}

/// A registered vehicle.
///
/// Vehicles are registered once and treated as read-only by the admission
/// and reservation operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Database row id.
    pub id: i64,
    /// The vehicle's license plate (unique).
    pub plate: Plate,
    /// The vehicle category.
    pub category: VehicleCategory,
    /// Manufacturer, if recorded.
    pub make: Option<String>,
    /// Model, if recorded.
    pub model: Option<String>,
    /// Name of the owning user.
    pub owner_name: String,
    /// Role of the owning user.
    pub owner_role: OwnerRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in VehicleCategory::ALL {
            let parsed: VehicleCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(
            "Car".parse::<VehicleCategory>().unwrap(),
            VehicleCategory::Car
        );
        assert_eq!(
            "MOTORCYCLE".parse::<VehicleCategory>().unwrap(),
            VehicleCategory::Motorcycle
        );
        assert!("bicycle".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [OwnerRole::Resident, OwnerRole::Operator] {
            let parsed: OwnerRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("visitor".parse::<OwnerRole>().is_err());
    }

    #[test]
    fn test_role_reservation_policy() {
        assert!(OwnerRole::Resident.may_reserve());
        assert!(!OwnerRole::Operator.may_reserve());
    }

    #[test]
    fn test_plate_normalization() {
        let plate = Plate::new("  abc-123 ").unwrap();
        assert_eq!(plate.as_str(), "ABC-123");
        assert_eq!(format!("{plate}"), "ABC-123");
    }

    #[test]
    fn test_plate_rejects_bad_input() {
        assert!(Plate::new("").is_err());
        assert!(Plate::new("a").is_err());
        assert!(Plate::new("way-too-long-plate").is_err());
        assert!(Plate::new("ab c").is_err());
        assert!(Plate::new("ab_c").is_err());
    }

    #[test]
    fn test_invalid_plate_error_display() {
        let err = Plate::new("x").unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("invalid plate"));
        assert!(display.contains('x'));
    }
}
