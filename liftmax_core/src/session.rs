//! # Calculator Session
//!
//! The `Session` struct owns everything that changes while the calculator is
//! in use:
//!
//! ```text
//! Session
//! ├── form: FormState (selected unit and movement type)
//! ├── result: Option<EstimationResult> (last successful calculation)
//! └── open_tables: BTreeSet<Formula> (RPE tables currently shown)
//! ```
//!
//! Front-ends translate raw UI events into [`Command`]s and feed them to
//! [`Session::apply`], then render from the session's state.
//!
//! ## Example
//!
//! ```rust
//! use liftmax_core::formulas::Formula;
//! use liftmax_core::lift::LiftInput;
//! use liftmax_core::session::Session;
//! use liftmax_core::units::WeightUnit;
//!
//! let mut session = Session::new();
//! session.submit(LiftInput::standard(100.0, 5, 0.0, WeightUnit::Kg)).unwrap();
//!
//! assert!(session.toggle_table(Formula::Epley).unwrap().opened);
//! assert!(session.is_open(Formula::Epley));
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas::Formula;
use crate::lift::{calculate, EstimationResult, LiftInput};
use crate::rpe_table::RpeTable;
use crate::settings::CalculatorSettings;
use crate::units::{MovementType, WeightUnit};

/// Currently selected form options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormState {
    pub unit: WeightUnit,
    pub movement_type: MovementType,
}

impl FormState {
    /// Label for the weight field ("Weight Lifted" / "Added Weight")
    pub fn weight_label(&self) -> &'static str {
        self.movement_type.weight_label()
    }

    pub fn weight_description(&self) -> &'static str {
        self.movement_type.weight_description()
    }

    /// Whether the bodyweight field is shown and required
    pub fn bodyweight_required(&self) -> bool {
        self.movement_type.requires_bodyweight()
    }

    /// Unit label shown beside the bodyweight field
    pub fn bodyweight_unit_label(&self) -> &'static str {
        self.unit.label()
    }
}

/// Result of a table toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub formula: Formula,
    /// True if the table is now shown, false if it was just closed
    pub opened: bool,
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value")]
pub enum Command {
    Submit(LiftInput),
    ToggleTable(Formula),
    ChangeUnit(WeightUnit),
    ChangeMovementType(MovementType),
}

/// What a successfully applied command produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value")]
pub enum Outcome {
    Calculated(EstimationResult),
    Toggled(ToggleOutcome),
    FormChanged(FormState),
}

/// Calculator state for one interactive session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub form: FormState,

    result: Option<EstimationResult>,

    /// A formula is present iff its table is currently shown
    open_tables: BTreeSet<Formula>,
}

impl Session {
    /// Create a session with kg / standard movement selected
    pub fn new() -> Self {
        Session::default()
    }

    /// Create a session with the form preset from settings
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        Session {
            form: FormState {
                unit: settings.default_unit,
                movement_type: settings.default_movement,
            },
            ..Session::default()
        }
    }

    /// Last successful estimate, if any
    pub fn result(&self) -> Option<&EstimationResult> {
        self.result.as_ref()
    }

    /// Formulas whose tables are open, in display order
    pub fn open_tables(&self) -> impl Iterator<Item = Formula> + '_ {
        self.open_tables.iter().copied()
    }

    pub fn is_open(&self, formula: Formula) -> bool {
        self.open_tables.contains(&formula)
    }

    /// Validate and calculate, replacing the stored result in full.
    ///
    /// On error nothing is modified. Open tables are left alone either way.
    pub fn submit(&mut self, input: LiftInput) -> CalcResult<EstimationResult> {
        match calculate(&input) {
            Ok(result) => {
                tracing::debug!(
                    total_reps = input.effective_total_reps(),
                    movement = %input.movement_type,
                    average = result.average,
                    "estimate replaced"
                );
                self.result = Some(result);
                Ok(result)
            }
            Err(e) => {
                tracing::debug!(code = e.error_code(), "submit rejected");
                Err(e)
            }
        }
    }

    /// Open the table for `formula` if closed, close it if open.
    ///
    /// Requires a prior successful [`submit`](Self::submit); otherwise returns
    /// [`CalcError::NoEstimate`] and leaves the open set unchanged.
    pub fn toggle_table(&mut self, formula: Formula) -> CalcResult<ToggleOutcome> {
        if self.result.is_none() {
            return Err(CalcError::no_estimate(formula));
        }

        let opened = if self.open_tables.remove(&formula) {
            false
        } else {
            self.open_tables.insert(formula);
            true
        };
        tracing::debug!(formula = formula.key(), opened, "table toggled");
        Ok(ToggleOutcome { formula, opened })
    }

    /// Project the RPE table for `formula` from the stored estimate
    pub fn table(&self, formula: Formula) -> CalcResult<RpeTable> {
        let result = self.result.as_ref().ok_or_else(|| CalcError::no_estimate(formula))?;
        Ok(RpeTable::project(formula, result.value(formula), result.unit))
    }

    /// Summary lines for formulas whose table is closed.
    ///
    /// An open table replaces its formula's summary line; closing the table
    /// brings the line back. Empty before the first successful submit.
    pub fn summary_lines(&self) -> Vec<(Formula, String)> {
        match &self.result {
            Some(result) => result
                .display_lines()
                .into_iter()
                .filter(|(formula, _)| !self.is_open(*formula))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Tables for every open formula, in display order
    pub fn open_table_views(&self) -> CalcResult<Vec<RpeTable>> {
        self.open_tables().map(|f| self.table(f)).collect()
    }

    /// Select a display unit for the next submission.
    ///
    /// The stored result keeps the unit it was calculated with.
    pub fn change_unit(&mut self, unit: WeightUnit) -> FormState {
        self.form.unit = unit;
        self.form
    }

    pub fn change_movement_type(&mut self, movement_type: MovementType) -> FormState {
        self.form.movement_type = movement_type;
        self.form
    }

    /// Dispatch one command.
    pub fn apply(&mut self, command: Command) -> CalcResult<Outcome> {
        match command {
            Command::Submit(input) => self.submit(input).map(Outcome::Calculated),
            Command::ToggleTable(formula) => self.toggle_table(formula).map(Outcome::Toggled),
            Command::ChangeUnit(unit) => Ok(Outcome::FormChanged(self.change_unit(unit))),
            Command::ChangeMovementType(movement) => {
                Ok(Outcome::FormChanged(self.change_movement_type(movement)))
            }
        }
    }
}
