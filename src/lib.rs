//! sweepgen - HFSS parametric sweep export script generator

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod init;
pub mod limits;
pub mod manual;
pub mod script;
pub mod sweep;

pub use config::{ExportMode, ScriptConfig, SweepVariable, TargetPlatform};
pub use error::{ConfigError, FixSuggestion, RangeError, SweepgenError};
pub use limits::SweepLimits;
pub use script::{generate_script, ExportEntry, ExportPlan, ScriptAssembler};
pub use sweep::{Combination, Sweep};
