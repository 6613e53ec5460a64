//! # Unit and Movement Types
//!
//! Weight units are carried as labels only. A value entered in pounds stays in
//! pounds through every formula and table; nothing is ever converted.
//!
//! ## Example
//!
//! ```rust
//! use liftmax_core::units::{MovementType, WeightUnit};
//!
//! let unit: WeightUnit = "lb".parse().unwrap();
//! assert_eq!(unit.label(), "lb");
//! assert!(MovementType::Bodyweight.requires_bodyweight());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// ============================================================================
// Weight Units
// ============================================================================

/// Display unit for every weight the calculator handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// All selectable units, in menu order
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Kg, WeightUnit::Lb];

    /// Short label printed after every weight ("kg" / "lb")
    pub fn label(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" | "kgs" => Ok(WeightUnit::Kg),
            "lb" | "lbs" => Ok(WeightUnit::Lb),
            other => Err(CalcError::invalid_input("unit", other, "Expected 'kg' or 'lb'")),
        }
    }
}

// ============================================================================
// Movement Types
// ============================================================================

/// Whether the lifter's bodyweight is part of the load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Barbell/dumbbell lifts: the entered weight is the whole load
    #[default]
    Standard,
    /// Pull-ups, dips and similar: load is bodyweight plus added weight
    Bodyweight,
}

impl MovementType {
    /// Whether a positive bodyweight must accompany the input
    pub fn requires_bodyweight(self) -> bool {
        matches!(self, MovementType::Bodyweight)
    }

    /// Label for the weight field
    pub fn weight_label(self) -> &'static str {
        match self {
            MovementType::Standard => "Weight Lifted",
            MovementType::Bodyweight => "Added Weight",
        }
    }

    /// Helper text for the weight field
    pub fn weight_description(self) -> &'static str {
        match self {
            MovementType::Standard => "Total weight lifted",
            MovementType::Bodyweight => "Weight added to bodyweight (use 0 for bodyweight only)",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MovementType::Standard => "standard",
            MovementType::Bodyweight => "bodyweight",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MovementType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" => Ok(MovementType::Standard),
            "bodyweight" | "bw" => Ok(MovementType::Bodyweight),
            other => Err(CalcError::invalid_input(
                "movement",
                other,
                "Expected 'standard' or 'bodyweight'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kg);
        assert_eq!(" LBS ".parse::<WeightUnit>().unwrap(), WeightUnit::Lb);
        assert!("stone".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn test_movement_parsing() {
        assert_eq!("bw".parse::<MovementType>().unwrap(), MovementType::Bodyweight);
        assert_eq!("Standard".parse::<MovementType>().unwrap(), MovementType::Standard);
        assert!("cardio".parse::<MovementType>().is_err());
    }

    #[test]
    fn test_movement_labels() {
        assert_eq!(MovementType::Standard.weight_label(), "Weight Lifted");
        assert_eq!(MovementType::Bodyweight.weight_label(), "Added Weight");
        assert!(!MovementType::Standard.requires_bodyweight());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&WeightUnit::Lb).unwrap();
        assert_eq!(json, "\"lb\"");

        let roundtrip: MovementType = serde_json::from_str("\"bodyweight\"").unwrap();
        assert_eq!(roundtrip, MovementType::Bodyweight);
    }
}
