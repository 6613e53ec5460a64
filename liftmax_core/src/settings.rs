//! # Calculator Settings
//!
//! Startup defaults for the input form, stored as human-readable JSON.
//! Only preferences live here; computed results are never written to disk.
//!
//! ## Example
//!
//! ```json
//! {
//!   "default_unit": "lb",
//!   "default_movement": "standard",
//!   "log_filter": "liftmax_core=debug"
//! }
//! ```
//!
//! Missing fields fall back to [`CalculatorSettings::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{MovementType, WeightUnit};

/// Environment variable the CLI reads the settings path from
pub const CONFIG_ENV_VAR: &str = "LIFTMAX_CONFIG";

/// Form defaults and logging preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Unit selected when a session starts
    pub default_unit: WeightUnit,

    /// Movement type selected when a session starts
    pub default_movement: MovementType,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            default_unit: WeightUnit::Kg,
            default_movement: MovementType::Standard,
            log_filter: "warn".to_string(),
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load settings from a JSON file.
///
/// # Returns
///
/// * `Ok(CalculatorSettings)` - parsed settings
/// * `Err(CalcError::FileError)` - file missing or unreadable
/// * `Err(CalcError::SerializationError)` - file is not valid settings JSON
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::file_error("read settings", path.display().to_string(), e.to_string())
    })?;
    let settings = CalculatorSettings::from_json(&contents)?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Load settings from the path in [`CONFIG_ENV_VAR`], or defaults when unset.
pub fn load_settings_from_env() -> CalcResult<CalculatorSettings> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_settings(Path::new(&path)),
        None => Ok(CalculatorSettings::default()),
    }
}
