//! Error types with fix suggestions
//!
//! Generation-time failures only. Failures inside the emitted script are
//! handled by the script itself (see `script`).

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// A single variable's range cannot be enumerated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("SWG-010: Variable '{name}' has step 0 but start ({start}) != stop ({stop})")]
    ZeroStep { name: String, start: f64, stop: f64 },

    #[error("SWG-011: Variable '{name}' steps by {step} away from stop ({start} -> {stop})")]
    Divergent {
        name: String,
        start: f64,
        stop: f64,
        step: f64,
    },

    #[error("SWG-012: Variable '{name}' has a non-finite {field}")]
    NonFinite { name: String, field: &'static str },

    #[error("SWG-013: Variable '{name}' expands to {count} values (limit {limit})")]
    TooManyValues {
        name: String,
        count: usize,
        limit: usize,
    },
}

/// The configuration is structurally invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("SWG-020: No sweep variables defined")]
    NoVariables,

    #[error("SWG-021: Invalid variable name '{name}'")]
    InvalidVariableName { name: String },

    #[error("SWG-022: Duplicate variable name '{name}'")]
    DuplicateVariable { name: String },

    #[error("SWG-023: Port count {ports} is outside 1-99")]
    PortsOutOfRange { ports: i64 },

    #[error("SWG-024: smartExport and simulateIndividually are mutually exclusive")]
    ConflictingModes,

    #[error("SWG-025: Empty filename prefix with variable values excluded")]
    EmptyFilename,

    #[error("SWG-026: Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("SWG-027: Sweep expands to {count} combinations (limit {limit})")]
    TooManyCombinations { count: usize, limit: usize },

    #[error("SWG-028: Units of variable '{name}' contain control characters")]
    InvalidUnits { name: String },
}

/// All failures surfaced by the library and CLI.
#[derive(Error, Debug)]
pub enum SweepgenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for RangeError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            RangeError::ZeroStep { .. } => Some("Use a non-zero step, or set stop equal to start"),
            RangeError::Divergent { .. } => {
                Some("Flip the sign of step so it moves from start towards stop")
            }
            RangeError::NonFinite { .. } => Some("Use plain finite numbers for start/stop/step"),
            RangeError::TooManyValues { .. } => Some("Use a coarser step"),
        }
    }
}

impl FixSuggestion for ConfigError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            ConfigError::NoVariables => Some("Add at least one entry under variables:"),
            ConfigError::InvalidVariableName { .. } => {
                Some("Use the HFSS design variable name exactly (letters, digits, _)")
            }
            ConfigError::DuplicateVariable { .. } => Some("Declare each variable once"),
            ConfigError::PortsOutOfRange { .. } => Some("Set numPorts between 1 and 99"),
            ConfigError::ConflictingModes => {
                Some("Pick one mode: auto-detect, manual-loop or parametric")
            }
            ConfigError::EmptyFilename => {
                Some("Set filenamePrefix or enable includeVarInName")
            }
            ConfigError::MissingField { .. } => {
                Some("Copy the names from the HFSS Project Manager tree")
            }
            ConfigError::InvalidUnits { .. } => {
                Some("Use plain unit text such as mm or GHz on a single line")
            }
            ConfigError::TooManyCombinations { .. } => {
                Some("Reduce the number of values per variable")
            }
        }
    }
}

impl FixSuggestion for SweepgenError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            SweepgenError::Config(e) => e.fix_suggestion(),
            SweepgenError::Range(e) => e.fix_suggestion(),
            SweepgenError::YamlParse(_) => Some("Check YAML syntax: indentation and quoting"),
            SweepgenError::JsonParse(_) => Some("Check JSON syntax: commas and quoting"),
            SweepgenError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
