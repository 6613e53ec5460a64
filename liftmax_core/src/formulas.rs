//! # One-Rep-Max Formulas
//!
//! The three empirical estimators and their average. Every function takes the
//! weight moved and the *effective* total reps (reps performed plus reps in
//! reserve) and returns an estimated one-rep max in the same unit as the
//! weight.
//!
//! ## Notation
//!
//! - `w` = Weight lifted
//! - `r` = Effective total reps (may be fractional)
//!
//! ## Domain
//!
//! A single effective rep is already a max, so every formula returns `w`
//! unchanged for `r == 1`. Brzycki and Lander have denominators that reach
//! zero near `r = 37` and `r ≈ 37.9`; past that point the arithmetic result is
//! returned as-is (negative or infinite). Callers that care should check
//! [`Formula::denominator_is_valid`].
//!
//! ## References
//!
//! - Epley, B. (1985). Poundage Chart. Boyd Epley Workout.
//! - Brzycki, M. (1993). Strength testing: predicting a one-rep max from reps-to-fatigue.
//! - Lander, J. (1985). Maximums based on reps. NSCA Journal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Divisor in the Epley relation `w(1 + r/30)`
pub const EPLEY_DIVISOR: f64 = 30.0;

/// Brzycki numerator in `36 / (37 - r)`
pub const BRZYCKI_NUMERATOR: f64 = 36.0;

/// Brzycki rep offset in `36 / (37 - r)`; the denominator hits zero at 37 reps
pub const BRZYCKI_OFFSET: f64 = 37.0;

/// Lander intercept in `100w / (101.3 - 2.67123r)`
pub const LANDER_INTERCEPT: f64 = 101.3;

/// Lander per-rep slope in `100w / (101.3 - 2.67123r)`
pub const LANDER_SLOPE: f64 = 2.67123;

/// Epley estimate
///
/// # Formula
/// - 1RM = w(1 + r/30)
///
/// ```rust
/// use liftmax_core::formulas::epley;
/// assert!((epley(100.0, 10.0) - 133.333).abs() < 0.001);
/// assert_eq!(epley(100.0, 1.0), 100.0);
/// ```
#[inline]
pub fn epley(weight: f64, total_reps: f64) -> f64 {
    if total_reps == 1.0 {
        return weight;
    }
    weight * (1.0 + total_reps / EPLEY_DIVISOR)
}

/// Brzycki estimate
///
/// # Formula
/// - 1RM = w × 36 / (37 - r)
#[inline]
pub fn brzycki(weight: f64, total_reps: f64) -> f64 {
    if total_reps == 1.0 {
        return weight;
    }
    weight * BRZYCKI_NUMERATOR / (BRZYCKI_OFFSET - total_reps)
}

/// Lander estimate
///
/// # Formula
/// - 1RM = 100w / (101.3 - 2.67123r)
#[inline]
pub fn lander(weight: f64, total_reps: f64) -> f64 {
    if total_reps == 1.0 {
        return weight;
    }
    100.0 * weight / (LANDER_INTERCEPT - LANDER_SLOPE * total_reps)
}

/// Arithmetic mean of the three estimates
#[inline]
pub fn average(epley: f64, brzycki: f64, lander: f64) -> f64 {
    (epley + brzycki + lander) / 3.0
}

/// All four estimates for one weight/reps pair, before any bodyweight correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaValues {
    pub epley: f64,
    pub brzycki: f64,
    pub lander: f64,
    pub average: f64,
}

impl FormulaValues {
    /// Look up a single estimate
    pub fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::Epley => self.epley,
            Formula::Brzycki => self.brzycki,
            Formula::Lander => self.lander,
            Formula::Average => self.average,
        }
    }

    /// Subtract the same amount from every estimate
    pub fn minus(self, amount: f64) -> Self {
        FormulaValues {
            epley: self.epley - amount,
            brzycki: self.brzycki - amount,
            lander: self.lander - amount,
            average: self.average - amount,
        }
    }
}

/// Run every estimator on one weight/reps pair.
///
/// Out-of-domain denominators are logged but not rejected.
pub fn estimate_all(weight: f64, total_reps: f64) -> FormulaValues {
    for formula in [Formula::Brzycki, Formula::Lander] {
        if !formula.denominator_is_valid(total_reps) {
            tracing::warn!(
                formula = formula.key(),
                total_reps,
                "effective reps outside the formula's valid range, estimate is unreliable"
            );
        }
    }

    let e = epley(weight, total_reps);
    let b = brzycki(weight, total_reps);
    let l = lander(weight, total_reps);
    FormulaValues {
        epley: e,
        brzycki: b,
        lander: l,
        average: average(e, b, l),
    }
}

/// Closed set of selectable estimates.
///
/// Replaces string-keyed lookups: every variant maps to exactly one stored
/// value, so there is no "unknown formula" case past parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    Epley,
    Brzycki,
    Lander,
    Average,
}

impl Formula {
    /// All formulas in display order
    pub const ALL: [Formula; 4] = [
        Formula::Epley,
        Formula::Brzycki,
        Formula::Lander,
        Formula::Average,
    ];

    /// Lowercase identifier ("epley", "brzycki", ...)
    pub fn key(self) -> &'static str {
        match self {
            Formula::Epley => "epley",
            Formula::Brzycki => "brzycki",
            Formula::Lander => "lander",
            Formula::Average => "average",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Formula::Epley => "Epley",
            Formula::Brzycki => "Brzycki",
            Formula::Lander => "Lander",
            Formula::Average => "Average",
        }
    }

    /// Evaluate this formula directly (the average runs all three)
    pub fn estimate(self, weight: f64, total_reps: f64) -> f64 {
        match self {
            Formula::Epley => epley(weight, total_reps),
            Formula::Brzycki => brzycki(weight, total_reps),
            Formula::Lander => lander(weight, total_reps),
            Formula::Average => average(
                epley(weight, total_reps),
                brzycki(weight, total_reps),
                lander(weight, total_reps),
            ),
        }
    }

    /// Whether the formula's denominator is still positive at `total_reps`.
    ///
    /// Epley has no denominator and is always valid; the average is only as
    /// valid as its weakest member.
    pub fn denominator_is_valid(self, total_reps: f64) -> bool {
        match self {
            Formula::Epley => true,
            Formula::Brzycki => BRZYCKI_OFFSET - total_reps > 0.0,
            Formula::Lander => LANDER_INTERCEPT - LANDER_SLOPE * total_reps > 0.0,
            Formula::Average => {
                Formula::Brzycki.denominator_is_valid(total_reps)
                    && Formula::Lander.denominator_is_valid(total_reps)
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Formula {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Formula::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| {
                CalcError::invalid_input("formula", key, "Expected epley, brzycki, lander or average")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_single_rep_is_identity() {
        for weight in [0.0, 1.0, 62.5, 100.0, 317.5] {
            assert_eq!(epley(weight, 1.0), weight);
            assert_eq!(brzycki(weight, 1.0), weight);
            assert_eq!(lander(weight, 1.0), weight);
        }
    }

    #[test]
    fn test_epley_ten_reps() {
        // 100 × (1 + 10/30) = 133.33
        let e = epley(100.0, 10.0);
        assert!(approx_eq(e, 133.333, 0.001));
        assert_eq!(format!("{:.1}", e), "133.3");
    }

    #[test]
    fn test_brzycki_ten_reps() {
        // 100 × 36/27 = 133.33
        let b = brzycki(100.0, 10.0);
        assert!(approx_eq(b, 133.333, 0.001));
        assert_eq!(format!("{:.1}", b), "133.3");
    }

    #[test]
    fn test_lander_ten_reps() {
        // 100 × 100 / (101.3 - 26.7123) = 134.07
        let l = lander(100.0, 10.0);
        assert!(approx_eq(l, 134.07, 0.01));
        assert_eq!(format!("{:.1}", l), "134.1");
    }

    #[test]
    fn test_average_ten_reps() {
        let values = estimate_all(100.0, 10.0);
        assert!(approx_eq(values.average, 133.58, 0.01));
        assert_eq!(format!("{:.1}", values.average), "133.6");
    }

    #[test]
    fn test_fractional_reps_flow_through() {
        // 5 reps + 1.5 RIR
        let e = epley(100.0, 6.5);
        assert!(approx_eq(e, 121.667, 0.001));
    }

    #[test]
    fn test_brzycki_out_of_domain_is_unguarded() {
        // Denominator goes negative past 37 reps: value is returned as computed
        assert!(brzycki(100.0, 40.0) < 0.0);
        assert!(brzycki(100.0, 37.0).is_infinite());
        assert!(!Formula::Brzycki.denominator_is_valid(37.0));
        assert!(Formula::Brzycki.denominator_is_valid(36.0));
    }

    #[test]
    fn test_lander_domain_boundary() {
        assert!(Formula::Lander.denominator_is_valid(37.0));
        assert!(!Formula::Lander.denominator_is_valid(38.0));
        assert!(lander(100.0, 38.0) < 0.0);
    }

    #[test]
    fn test_formula_estimate_matches_free_functions() {
        let values = estimate_all(80.0, 8.0);
        for formula in Formula::ALL {
            assert!(approx_eq(formula.estimate(80.0, 8.0), values.get(formula), 1e-9));
        }
    }

    #[test]
    fn test_minus_applies_to_all_fields() {
        let raw = estimate_all(90.0, 5.0);
        let corrected = raw.minus(70.0);
        for formula in Formula::ALL {
            assert!(approx_eq(corrected.get(formula), raw.get(formula) - 70.0, 1e-9));
        }
    }

    #[test]
    fn test_formula_parsing() {
        assert_eq!("Epley".parse::<Formula>().unwrap(), Formula::Epley);
        assert_eq!("average".parse::<Formula>().unwrap(), Formula::Average);
        assert!("wathan".parse::<Formula>().is_err());
    }

    #[test]
    fn test_formula_serialization() {
        let json = serde_json::to_string(&Formula::Lander).unwrap();
        assert_eq!(json, "\"lander\"");
    }
}
