//! # liftmax_core - One-Rep-Max Estimation Engine
//!
//! `liftmax_core` is the computational heart of Liftmax. It estimates a
//! lifter's one-repetition maximum from a sub-maximal set and projects
//! RPE-based training tables from that estimate. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Pure formulas**: estimation and projection are plain functions
//! - **Explicit state**: the only mutable state is an owned [`Session`]
//! - **Rich Errors**: structured error kinds, user-facing copy left to the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use liftmax_core::{Formula, LiftInput, Session, WeightUnit};
//!
//! let mut session = Session::new();
//! let result = session
//!     .submit(LiftInput::standard(100.0, 10, 0.0, WeightUnit::Kg))
//!     .unwrap();
//! assert_eq!(result.format_value(Formula::Brzycki), "133.3 kg");
//!
//! session.toggle_table(Formula::Average).unwrap();
//! let table = session.table(Formula::Average).unwrap();
//! assert_eq!(table.rows.len(), 11);
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - Epley, Brzycki, Lander and their average
//! - [`lift`] - Set input, validation and bodyweight correction
//! - [`rpe_table`] - RPE/RIR training table projection
//! - [`session`] - Session state and command dispatch
//! - [`settings`] - JSON form defaults
//! - [`units`] - Weight unit and movement type labels
//! - [`errors`] - Structured error types

pub mod errors;
pub mod formulas;
pub mod lift;
pub mod rpe_table;
pub mod session;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use formulas::Formula;
pub use lift::{calculate, EstimationResult, LiftInput};
pub use rpe_table::RpeTable;
pub use session::{Command, Outcome, Session};
pub use settings::CalculatorSettings;
pub use units::{MovementType, WeightUnit};
