//! # Lift Estimation
//!
//! Turns one logged set into a full [`EstimationResult`]. Follows the usual
//! calculation pattern:
//!
//! - [`LiftInput`] - what the lifter did (JSON-serializable)
//! - [`EstimationResult`] - the four estimates (JSON-serializable)
//! - [`calculate`] - pure function from one to the other
//!
//! ## Example
//!
//! ```rust
//! use liftmax_core::lift::{calculate, LiftInput};
//! use liftmax_core::units::WeightUnit;
//!
//! let input = LiftInput::standard(100.0, 8, 2.0, WeightUnit::Kg);
//! let result = calculate(&input).unwrap();
//!
//! // 8 reps + 2 in reserve = 10 effective reps
//! assert_eq!(format!("{:.1}", result.epley), "133.3");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas::{estimate_all, Formula};
use crate::units::{MovementType, WeightUnit};

/// One performed set.
///
/// ## JSON Example
///
/// ```json
/// {
///   "added_weight": 20.0,
///   "bodyweight": 70.0,
///   "reps_performed": 5,
///   "rir": 0.0,
///   "unit": "kg",
///   "movement_type": "bodyweight"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftInput {
    /// Weight on the bar, or added to the body for bodyweight movements
    pub added_weight: f64,

    /// Lifter's bodyweight; ignored for standard movements
    #[serde(default)]
    pub bodyweight: f64,

    /// Reps actually completed
    pub reps_performed: i64,

    /// Reps left in the tank (fractional allowed)
    #[serde(default)]
    pub rir: f64,

    #[serde(default)]
    pub unit: WeightUnit,

    #[serde(default)]
    pub movement_type: MovementType,
}

impl LiftInput {
    /// A standard (non-bodyweight) set
    pub fn standard(weight: f64, reps_performed: i64, rir: f64, unit: WeightUnit) -> Self {
        LiftInput {
            added_weight: weight,
            bodyweight: 0.0,
            reps_performed,
            rir,
            unit,
            movement_type: MovementType::Standard,
        }
    }

    /// A bodyweight set (pull-up, dip, ...) with optional added weight
    pub fn bodyweight(
        added_weight: f64,
        bodyweight: f64,
        reps_performed: i64,
        rir: f64,
        unit: WeightUnit,
    ) -> Self {
        LiftInput {
            added_weight,
            bodyweight,
            reps_performed,
            rir,
            unit,
            movement_type: MovementType::Bodyweight,
        }
    }

    /// Validate input parameters.
    ///
    /// Reps are checked before bodyweight.
    pub fn validate(&self) -> CalcResult<()> {
        if self.reps_performed < 1 {
            return Err(CalcError::invalid_reps(self.reps_performed));
        }
        if self.movement_type.requires_bodyweight() && (self.bodyweight <= 0.0 || self.bodyweight.is_nan()) {
            return Err(CalcError::missing_bodyweight(self.bodyweight));
        }
        Ok(())
    }

    /// Reps performed plus reps in reserve
    pub fn effective_total_reps(&self) -> f64 {
        self.reps_performed as f64 + self.rir
    }

    /// Bodyweight that actually counts toward the load
    pub fn effective_bodyweight(&self) -> f64 {
        match self.movement_type {
            MovementType::Standard => 0.0,
            MovementType::Bodyweight => self.bodyweight,
        }
    }

    /// Load fed into the formulas
    pub fn total_weight(&self) -> f64 {
        self.added_weight + self.effective_bodyweight()
    }
}

/// Four estimates for the last successful calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "epley": 133.33,
///   "brzycki": 133.33,
///   "lander": 134.07,
///   "average": 133.58,
///   "unit": "kg",
///   "bodyweight_corrected": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub epley: f64,
    pub brzycki: f64,
    pub lander: f64,
    pub average: f64,

    pub unit: WeightUnit,

    /// True when bodyweight was subtracted, so the values are
    /// added-weight equivalents rather than total load
    pub bodyweight_corrected: bool,
}

impl EstimationResult {
    /// Value stored for one formula
    pub fn value(&self, formula: Formula) -> f64 {
        match formula {
            Formula::Epley => self.epley,
            Formula::Brzycki => self.brzycki,
            Formula::Lander => self.lander,
            Formula::Average => self.average,
        }
    }

    /// "133.3 kg"
    pub fn format_value(&self, formula: Formula) -> String {
        format!("{:.1} {}", self.value(formula), self.unit)
    }

    /// Labelled lines in display order
    pub fn display_lines(&self) -> Vec<(Formula, String)> {
        Formula::ALL
            .into_iter()
            .map(|f| (f, self.format_value(f)))
            .collect()
    }
}

/// Estimate the one-rep max for a performed set.
///
/// For bodyweight movements the formulas run on `added_weight + bodyweight`
/// and the bodyweight is then subtracted from every estimate.
///
/// # Returns
///
/// * `Ok(EstimationResult)` - all four estimates
/// * `Err(CalcError::InvalidReps)` - reps below 1
/// * `Err(CalcError::MissingBodyweight)` - bodyweight movement without a bodyweight
///
/// # Example
///
/// ```rust
/// use liftmax_core::lift::{calculate, LiftInput};
/// use liftmax_core::units::WeightUnit;
///
/// let input = LiftInput::bodyweight(20.0, 70.0, 1, 0.0, WeightUnit::Kg);
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.epley, 20.0);
/// assert!(result.bodyweight_corrected);
/// ```
pub fn calculate(input: &LiftInput) -> CalcResult<EstimationResult> {
    input.validate()?;

    let total_reps = input.effective_total_reps();
    let raw = estimate_all(input.total_weight(), total_reps);

    let bodyweight_corrected = input.movement_type.requires_bodyweight();
    let values = if bodyweight_corrected {
        raw.minus(input.bodyweight)
    } else {
        raw
    };

    Ok(EstimationResult {
        epley: values.epley,
        brzycki: values.brzycki,
        lander: values.lander,
        average: values.average,
        unit: input.unit,
        bodyweight_corrected,
    })
}
