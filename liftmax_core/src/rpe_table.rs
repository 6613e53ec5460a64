//! # RPE Training Table
//!
//! Projects sub-maximal working weights from a one-rep max across eleven
//! effort levels (RPE 10 down to 5) and rep counts 1 through 12.
//!
//! The projection always inverts the Epley relation, whichever formula
//! produced the 1RM:
//!
//! ```text
//! w = 1RM / (1 + r/30)        r = reps + RIR
//! ```
//!
//! ## Example
//!
//! ```rust
//! use liftmax_core::formulas::Formula;
//! use liftmax_core::rpe_table::RpeTable;
//! use liftmax_core::units::WeightUnit;
//!
//! let table = RpeTable::project(Formula::Epley, 150.0, WeightUnit::Kg);
//! assert_eq!(table.rows.len(), 11);
//! assert_eq!(table.weight_at(10.0, 1), Some(150.0));
//! assert_eq!(table.caption(), "Based on Epley 1RM: 150.0 kg");
//! ```

use serde::{Deserialize, Serialize};

use crate::formulas::{Formula, EPLEY_DIVISOR};
use crate::units::WeightUnit;

/// Highest rep count shown as a column
pub const MAX_TABLE_REPS: u32 = 12;

/// Two label columns (RPE, RIR) plus one per rep count
pub const DISPLAY_COLUMNS: usize = 2 + MAX_TABLE_REPS as usize;

/// One effort level. RIR is always `10 - RPE`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RpeRow {
    pub rpe: f64,
    pub rir: f64,
}

/// Fixed effort levels, hardest first
pub const RPE_ROWS: [RpeRow; 11] = [
    RpeRow { rpe: 10.0, rir: 0.0 },
    RpeRow { rpe: 9.5, rir: 0.5 },
    RpeRow { rpe: 9.0, rir: 1.0 },
    RpeRow { rpe: 8.5, rir: 1.5 },
    RpeRow { rpe: 8.0, rir: 2.0 },
    RpeRow { rpe: 7.5, rir: 2.5 },
    RpeRow { rpe: 7.0, rir: 3.0 },
    RpeRow { rpe: 6.5, rir: 3.5 },
    RpeRow { rpe: 6.0, rir: 4.0 },
    RpeRow { rpe: 5.5, rir: 4.5 },
    RpeRow { rpe: 5.0, rir: 5.0 },
];

/// Weight that takes a lifter with `one_rm` to `total_reps` effective reps.
///
/// Inverse of [`crate::formulas::epley`]: feeding the result back through
/// Epley at the same rep count returns `one_rm`.
///
/// ```rust
/// use liftmax_core::formulas::epley;
/// use liftmax_core::rpe_table::weight_for_reps;
///
/// let w = weight_for_reps(140.0, 6.0);
/// assert!((epley(w, 6.0) - 140.0).abs() < 1e-9);
/// ```
#[inline]
pub fn weight_for_reps(one_rm: f64, total_reps: f64) -> f64 {
    if total_reps == 1.0 {
        return one_rm;
    }
    one_rm / (1.0 + total_reps / EPLEY_DIVISOR)
}

/// One projected row: the effort level and a weight per rep count (1..=12).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpeTableRow {
    pub rpe: f64,
    pub rir: f64,
    pub weights: [f64; MAX_TABLE_REPS as usize],
}

/// Projected table for one formula's 1RM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpeTable {
    /// Formula whose estimate seeded the table
    pub formula: Formula,

    pub one_rm: f64,

    pub unit: WeightUnit,

    /// Eleven rows in [`RPE_ROWS`] order
    pub rows: Vec<RpeTableRow>,
}

impl RpeTable {
    /// Heading printed above every table
    pub const TITLE: &'static str = "RPE-Based Training Table";

    /// Build the 11×12 matrix for a 1RM.
    pub fn project(formula: Formula, one_rm: f64, unit: WeightUnit) -> Self {
        let rows = RPE_ROWS
            .iter()
            .map(|row| {
                let mut weights = [0.0; MAX_TABLE_REPS as usize];
                for (i, slot) in weights.iter_mut().enumerate() {
                    let reps = (i + 1) as f64;
                    *slot = weight_for_reps(one_rm, reps + row.rir);
                }
                RpeTableRow {
                    rpe: row.rpe,
                    rir: row.rir,
                    weights,
                }
            })
            .collect();

        RpeTable {
            formula,
            one_rm,
            unit,
            rows,
        }
    }

    /// Weight for an RPE level and rep count, if both are in the table
    pub fn weight_at(&self, rpe: f64, reps: u32) -> Option<f64> {
        if reps == 0 || reps > MAX_TABLE_REPS {
            return None;
        }
        self.rows
            .iter()
            .find(|row| row.rpe == rpe)
            .map(|row| row.weights[(reps - 1) as usize])
    }

    /// "Based on Brzycki 1RM: 133.3 kg"
    pub fn caption(&self) -> String {
        format!(
            "Based on {} 1RM: {:.1} {}",
            self.formula.display_name(),
            self.one_rm,
            self.unit
        )
    }

    /// "RPE", "RIR", "1" .. "12"
    pub fn header_columns() -> Vec<String> {
        let mut columns = vec!["RPE".to_string(), "RIR".to_string()];
        columns.extend((1..=MAX_TABLE_REPS).map(|r| r.to_string()));
        columns
    }

    /// 11 rows of 14 display cells, weights to one decimal place.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(DISPLAY_COLUMNS);
                // f64 Display drops a trailing ".0": 10 stays "10", 9.5 stays "9.5"
                cells.push(row.rpe.to_string());
                cells.push(row.rir.to_string());
                cells.extend(row.weights.iter().map(|w| format!("{:.1}", w)));
                cells
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::epley;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rows_are_fixed() {
        assert_eq!(RPE_ROWS.len(), 11);
        assert_eq!(RPE_ROWS[0], RpeRow { rpe: 10.0, rir: 0.0 });
        assert_eq!(RPE_ROWS[10], RpeRow { rpe: 5.0, rir: 5.0 });
        for pair in RPE_ROWS.windows(2) {
            assert_eq!(pair[0].rpe - pair[1].rpe, 0.5);
            assert_eq!(pair[1].rir - pair[0].rir, 0.5);
        }
        for row in RPE_ROWS {
            assert_eq!(row.rpe + row.rir, 10.0);
        }
    }

    #[test]
    fn test_weight_for_reps_inverts_epley() {
        for one_rm in [40.0, 100.0, 227.5] {
            for reps in [1.5, 2.0, 5.0, 8.5, 12.0, 17.0] {
                let w = weight_for_reps(one_rm, reps);
                assert!((epley(w, reps) - one_rm).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_single_total_rep_is_one_rm() {
        assert_eq!(weight_for_reps(123.4, 1.0), 123.4);
    }

    #[test]
    fn test_table_shape() {
        for one_rm in [0.0, 60.0, 180.0] {
            let table = RpeTable::project(Formula::Average, one_rm, WeightUnit::Lb);
            assert_eq!(table.rows.len(), 11);
            for row in &table.rows {
                assert_eq!(row.weights.len(), 12);
            }
            for pair in table.rows.windows(2) {
                assert!(pair[0].rpe > pair[1].rpe);
                assert!(pair[0].rir < pair[1].rir);
            }
        }
    }

    #[test]
    fn test_cells_use_reps_plus_rir() {
        let table = RpeTable::project(Formula::Lander, 150.0, WeightUnit::Kg);
        // RPE 10, 1 rep: exactly the 1RM
        assert_eq!(table.weight_at(10.0, 1), Some(150.0));
        // RPE 8 (RIR 2), 3 reps: 5 effective reps
        let w = table.weight_at(8.0, 3).unwrap();
        assert!((w - 150.0 / (1.0 + 5.0 / 30.0)).abs() < 1e-9);
        // RPE 9.5, 1 rep: 1.5 effective reps, not the 1RM
        assert!(table.weight_at(9.5, 1).unwrap() < 150.0);
    }

    #[test]
    fn test_weight_at_out_of_range() {
        let table = RpeTable::project(Formula::Epley, 100.0, WeightUnit::Kg);
        assert_eq!(table.weight_at(10.0, 0), None);
        assert_eq!(table.weight_at(10.0, 13), None);
        assert_eq!(table.weight_at(4.5, 3), None);
    }

    #[test]
    fn test_header_columns() {
        let header = RpeTable::header_columns();
        assert_eq!(header.len(), DISPLAY_COLUMNS);
        assert_eq!(header[0], "RPE");
        assert_eq!(header[1], "RIR");
        assert_eq!(header[2], "1");
        assert_eq!(header[13], "12");
    }

    #[test]
    fn test_display_rows() {
        let table = RpeTable::project(Formula::Epley, 100.0, WeightUnit::Kg);
        let rows = table.display_rows();
        assert_eq!(rows.len(), 11);
        assert!(rows.iter().all(|r| r.len() == DISPLAY_COLUMNS));

        assert_eq!(rows[0][0], "10");
        assert_eq!(rows[0][1], "0");
        assert_eq!(rows[0][2], "100.0");
        // 100 / (1 + 3/30) = 90.909
        assert_eq!(rows[0][4], "90.9");
        assert_eq!(rows[1][0], "9.5");
        assert_eq!(rows[1][1], "0.5");
    }

    #[test]
    fn test_caption() {
        let table = RpeTable::project(Formula::Brzycki, 133.333, WeightUnit::Kg);
        assert_eq!(table.caption(), "Based on Brzycki 1RM: 133.3 kg");
        assert_eq!(RpeTable::TITLE, "RPE-Based Training Table");
    }
}
