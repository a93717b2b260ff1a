//! Script configuration
//!
//! `ScriptConfig` is the complete input of the generator. It is loaded from
//! YAML or JSON, may be edited field by field, and is handed whole to
//! [`crate::generate_script`] on every run.

use crate::error::{ConfigError, SweepgenError};
use crate::format::decimals;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// HFSS design variable names
static VARIABLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid regex"));

pub const WINDOWS_EXPORT_PATH: &str = "C:\\Temp\\HFSS_Export";
pub const LINUX_EXPORT_PATH: &str = "/tmp/hfss_export";

/// Platform the generated script runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    #[default]
    Windows,
    Linux,
}

impl TargetPlatform {
    /// Directory separator used in export paths
    pub fn separator(self) -> char {
        match self {
            TargetPlatform::Windows => '\\',
            TargetPlatform::Linux => '/',
        }
    }

    pub fn default_export_path(self) -> &'static str {
        match self {
            TargetPlatform::Windows => WINDOWS_EXPORT_PATH,
            TargetPlatform::Linux => LINUX_EXPORT_PATH,
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetPlatform::Windows => write!(f, "Windows"),
            TargetPlatform::Linux => write!(f, "Linux"),
        }
    }
}

impl FromStr for TargetPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(TargetPlatform::Windows),
            "linux" | "centos" => Ok(TargetPlatform::Linux),
            other => Err(format!("unknown platform '{}' (expected windows or linux)", other)),
        }
    }
}

/// How the generated script obtains solved data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportMode {
    /// Solve the setup once and let HFSS reuse already solved variations
    #[serde(alias = "smart", alias = "smart-export")]
    AutoDetect,

    /// Set every variable, solve and export, one combination at a time
    #[serde(alias = "manual", alias = "simulate-individually")]
    ManualLoop,

    /// Run the Optimetrics parametric setup, then export every combination
    #[default]
    #[serde(alias = "default")]
    Parametric,
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportMode::AutoDetect => write!(f, "Smart Export (auto-detect solved variations)"),
            ExportMode::ManualLoop => write!(f, "Simulate Individually (manual loop)"),
            ExportMode::Parametric => write!(f, "Parametric Setup"),
        }
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto-detect" | "smart" | "smart-export" => Ok(ExportMode::AutoDetect),
            "manual-loop" | "manual" | "simulate-individually" => Ok(ExportMode::ManualLoop),
            "parametric" | "default" => Ok(ExportMode::Parametric),
            other => Err(format!(
                "unknown mode '{}' (expected auto-detect, manual-loop or parametric)",
                other
            )),
        }
    }
}

/// One swept design variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepVariable {
    pub name: String,
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    /// Appended verbatim to every value ("mm", "GHz", or empty)
    #[serde(default)]
    pub units: String,
}

impl SweepVariable {
    pub fn new(name: impl Into<String>, start: f64, stop: f64, step: f64, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start,
            stop,
            step,
            units: units.into(),
        }
    }

    /// Fractional digits needed to spell every value of this sweep exactly
    pub fn precision(&self) -> usize {
        decimals(self.start)
            .max(decimals(self.stop))
            .max(decimals(self.step))
    }
}

/// Configuration as written in a file (legacy mode flags included)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScriptConfigRaw {
    #[serde(default)]
    target_platform: TargetPlatform,
    #[serde(default = "default_solution_name")]
    solution_name: String,
    #[serde(default = "default_sweep_name")]
    sweep_name: String,
    #[serde(default = "default_parametric_setup_name")]
    parametric_setup_name: String,
    variables: Vec<SweepVariable>,
    #[serde(default)]
    export_path: Option<String>,
    #[serde(default = "default_filename_prefix")]
    filename_prefix: String,
    #[serde(default = "default_true")]
    include_var_in_name: bool,
    #[serde(default = "default_num_ports")]
    num_ports: u32,
    #[serde(default)]
    mode: Option<ExportMode>,
    #[serde(default)]
    smart_export: Option<bool>,
    #[serde(default)]
    simulate_individually: Option<bool>,
    #[serde(default)]
    debug_mode: bool,
}

fn default_solution_name() -> String {
    "HFSS_Setup_1".to_string()
}

fn default_sweep_name() -> String {
    "Sweep_1".to_string()
}

fn default_parametric_setup_name() -> String {
    "ParametricSetup1".to_string()
}

fn default_filename_prefix() -> String {
    "Dipole".to_string()
}

fn default_true() -> bool {
    true
}

fn default_num_ports() -> u32 {
    2
}

/// Resolve `mode` against the legacy `smartExport`/`simulateIndividually` pair
fn resolve_mode(
    mode: Option<ExportMode>,
    smart_export: Option<bool>,
    simulate_individually: Option<bool>,
) -> Result<ExportMode, ConfigError> {
    let legacy = match (
        smart_export.unwrap_or(false),
        simulate_individually.unwrap_or(false),
    ) {
        (true, true) => return Err(ConfigError::ConflictingModes),
        (true, false) => Some(ExportMode::AutoDetect),
        (false, true) => Some(ExportMode::ManualLoop),
        (false, false) => None,
    };

    match (mode, legacy) {
        (Some(mode), Some(legacy)) if mode != legacy => Err(ConfigError::ConflictingModes),
        (Some(mode), _) => Ok(mode),
        (None, Some(legacy)) => Ok(legacy),
        (None, None) => Ok(ExportMode::Parametric),
    }
}

impl TryFrom<ScriptConfigRaw> for ScriptConfig {
    type Error = ConfigError;

    fn try_from(raw: ScriptConfigRaw) -> Result<Self, Self::Error> {
        let mode = resolve_mode(raw.mode, raw.smart_export, raw.simulate_individually)?;
        let export_path = raw
            .export_path
            .unwrap_or_else(|| raw.target_platform.default_export_path().to_string());

        Ok(ScriptConfig {
            target_platform: raw.target_platform,
            solution_name: raw.solution_name,
            sweep_name: raw.sweep_name,
            parametric_setup_name: raw.parametric_setup_name,
            variables: raw.variables,
            export_path,
            filename_prefix: raw.filename_prefix,
            include_var_in_name: raw.include_var_in_name,
            num_ports: raw.num_ports,
            mode,
            debug_mode: raw.debug_mode,
        })
    }
}

/// Complete generator input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptConfig {
    pub target_platform: TargetPlatform,
    /// Parent setup in the Project Manager tree (e.g. `HFSS_Setup_1`)
    pub solution_name: String,
    /// Frequency sweep under the setup (e.g. `Sweep_1`)
    pub sweep_name: String,
    /// Optimetrics parametric setup, only used in parametric mode
    pub parametric_setup_name: String,
    pub variables: Vec<SweepVariable>,
    pub export_path: String,
    pub filename_prefix: String,
    pub include_var_in_name: bool,
    pub num_ports: u32,
    pub mode: ExportMode,
    pub debug_mode: bool,
}

impl<'de> Deserialize<'de> for ScriptConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = ScriptConfigRaw::deserialize(deserializer)?;
        ScriptConfig::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            target_platform: TargetPlatform::Windows,
            solution_name: default_solution_name(),
            sweep_name: default_sweep_name(),
            parametric_setup_name: default_parametric_setup_name(),
            variables: vec![
                SweepVariable::new("L_ant", 10.0, 20.0, 2.0, "mm"),
                SweepVariable::new("W_sub", 1.0, 3.0, 1.0, "mm"),
            ],
            export_path: WINDOWS_EXPORT_PATH.to_string(),
            filename_prefix: default_filename_prefix(),
            include_var_in_name: true,
            num_ports: default_num_ports(),
            mode: ExportMode::Parametric,
            debug_mode: false,
        }
    }
}

impl ScriptConfig {
    /// Parse YAML. Mode conflicts surface as [`ConfigError`], not parse errors.
    pub fn from_yaml(yaml: &str) -> Result<Self, SweepgenError> {
        let raw: ScriptConfigRaw = serde_yaml::from_str(yaml)?;
        Ok(ScriptConfig::try_from(raw)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SweepgenError> {
        let raw: ScriptConfigRaw = serde_json::from_str(json)?;
        Ok(ScriptConfig::try_from(raw)?)
    }

    /// Load from disk; `.json` files are JSON, everything else YAML
    pub fn from_path(path: &Path) -> Result<Self, SweepgenError> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// `"{solution} : {sweep}"`, the reference HFSS uses for a sweep's results
    pub fn analysis_setup(&self) -> String {
        format!("{} : {}", self.solution_name, self.sweep_name)
    }

    pub fn smart_export(&self) -> bool {
        self.mode == ExportMode::AutoDetect
    }

    pub fn simulate_individually(&self) -> bool {
        self.mode == ExportMode::ManualLoop
    }

    /// Enabling smart export disables individual simulation
    pub fn set_smart_export(&mut self, enabled: bool) {
        if enabled {
            self.mode = ExportMode::AutoDetect;
        } else if self.mode == ExportMode::AutoDetect {
            self.mode = ExportMode::Parametric;
        }
    }

    /// Enabling individual simulation disables smart export
    pub fn set_simulate_individually(&mut self, enabled: bool) {
        if enabled {
            self.mode = ExportMode::ManualLoop;
        } else if self.mode == ExportMode::ManualLoop {
            self.mode = ExportMode::Parametric;
        }
    }

    /// Switch platform, moving an export path that clearly belongs to the
    /// other platform to this platform's default.
    pub fn set_platform(&mut self, platform: TargetPlatform) {
        let foreign = match platform {
            TargetPlatform::Linux => self.export_path.contains(":\\"),
            TargetPlatform::Windows => self.export_path.starts_with('/'),
        };
        if foreign {
            self.export_path = platform.default_export_path().to_string();
        }
        self.target_platform = platform;
    }

    /// Structural checks. Ranges are checked when the sweep is expanded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variables.is_empty() {
            return Err(ConfigError::NoVariables);
        }

        let mut seen = HashSet::new();
        for variable in &self.variables {
            if !VARIABLE_NAME.is_match(&variable.name) {
                return Err(ConfigError::InvalidVariableName {
                    name: variable.name.clone(),
                });
            }
            if variable.units.chars().any(char::is_control) {
                return Err(ConfigError::InvalidUnits {
                    name: variable.name.clone(),
                });
            }
            if !seen.insert(variable.name.as_str()) {
                return Err(ConfigError::DuplicateVariable {
                    name: variable.name.clone(),
                });
            }
        }

        if !(1..=99).contains(&self.num_ports) {
            return Err(ConfigError::PortsOutOfRange {
                ports: i64::from(self.num_ports),
            });
        }

        if self.filename_prefix.trim().is_empty() && !self.include_var_in_name {
            return Err(ConfigError::EmptyFilename);
        }

        if self.solution_name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "solutionName",
            });
        }
        if self.sweep_name.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "sweepName" });
        }
        if self.mode == ExportMode::Parametric && self.parametric_setup_name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "parametricSetupName",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_YAML: &str = r#"
variables:
  - name: L
    start: 1
    stop: 3
    step: 1
    units: mm
"#;

    #[test]
    fn parse_minimal_uses_defaults() {
        let config = ScriptConfig::from_yaml(MINIMAL_YAML).unwrap();
        assert_eq!(config.target_platform, TargetPlatform::Windows);
        assert_eq!(config.export_path, WINDOWS_EXPORT_PATH);
        assert_eq!(config.mode, ExportMode::Parametric);
        assert_eq!(config.num_ports, 2);
        assert!(config.include_var_in_name);
        assert_eq!(config.variables.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn linux_platform_gets_linux_default_path() {
        let yaml = format!("targetPlatform: linux\n{}", MINIMAL_YAML);
        let config = ScriptConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.export_path, LINUX_EXPORT_PATH);
    }

    #[test]
    fn parse_mode_and_aliases() {
        let yaml = format!("mode: auto-detect\n{}", MINIMAL_YAML);
        assert_eq!(ScriptConfig::from_yaml(&yaml).unwrap().mode, ExportMode::AutoDetect);

        let yaml = format!("mode: manual\n{}", MINIMAL_YAML);
        assert_eq!(ScriptConfig::from_yaml(&yaml).unwrap().mode, ExportMode::ManualLoop);
    }

    #[test]
    fn legacy_flags_map_to_mode() {
        let yaml = format!("smartExport: true\n{}", MINIMAL_YAML);
        let config = ScriptConfig::from_yaml(&yaml).unwrap();
        assert!(config.smart_export());
        assert!(!config.simulate_individually());

        let yaml = format!("simulateIndividually: true\nsmartExport: false\n{}", MINIMAL_YAML);
        let config = ScriptConfig::from_yaml(&yaml).unwrap();
        assert!(config.simulate_individually());
    }

    #[test]
    fn both_legacy_flags_is_config_error() {
        let yaml = format!("smartExport: true\nsimulateIndividually: true\n{}", MINIMAL_YAML);
        let err = ScriptConfig::from_yaml(&yaml).unwrap_err();
        assert!(matches!(
            err,
            SweepgenError::Config(ConfigError::ConflictingModes)
        ));
    }

    #[test]
    fn mode_contradicting_legacy_flag_is_config_error() {
        let yaml = format!("mode: parametric\nsmartExport: true\n{}", MINIMAL_YAML);
        assert!(matches!(
            ScriptConfig::from_yaml(&yaml),
            Err(SweepgenError::Config(ConfigError::ConflictingModes))
        ));
    }

    #[test]
    fn parse_json() {
        let json = r#"{
            "targetPlatform": "linux",
            "exportPath": "/data/out",
            "numPorts": 4,
            "variables": [{"name": "W", "start": 0.5, "stop": 1.5, "step": 0.5}]
        }"#;
        let config = ScriptConfig::from_json(json).unwrap();
        assert_eq!(config.num_ports, 4);
        assert_eq!(config.export_path, "/data/out");
        assert_eq!(config.variables[0].units, "");
    }

    #[test]
    fn yaml_roundtrip_keeps_mode() {
        let mut config = ScriptConfig::default();
        config.set_smart_export(true);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("mode: auto-detect"));
        assert_eq!(ScriptConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn smart_export_then_simulate_individually_clears_smart_export() {
        let mut config = ScriptConfig::default();
        config.set_smart_export(true);
        config.set_simulate_individually(true);
        assert!(!config.smart_export());
        assert!(config.simulate_individually());

        config.set_smart_export(true);
        assert!(config.smart_export());
        assert!(!config.simulate_individually());
    }

    #[test]
    fn clearing_active_flag_returns_to_parametric() {
        let mut config = ScriptConfig::default();
        config.set_simulate_individually(true);
        config.set_smart_export(false);
        assert_eq!(config.mode, ExportMode::ManualLoop);

        config.set_simulate_individually(false);
        assert_eq!(config.mode, ExportMode::Parametric);
    }

    #[test]
    fn platform_switch_moves_foreign_paths_only() {
        let mut config = ScriptConfig::default();
        config.set_platform(TargetPlatform::Linux);
        assert_eq!(config.export_path, LINUX_EXPORT_PATH);

        config.export_path = "/home/me/results".to_string();
        config.set_platform(TargetPlatform::Linux);
        assert_eq!(config.export_path, "/home/me/results");

        config.set_platform(TargetPlatform::Windows);
        assert_eq!(config.export_path, WINDOWS_EXPORT_PATH);
        assert_eq!(config.target_platform, TargetPlatform::Windows);
    }

    #[test]
    fn validate_rejects_structural_problems() {
        let mut config = ScriptConfig::default();
        config.variables.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoVariables));

        let mut config = ScriptConfig::default();
        config.variables[1].name = "L_ant".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateVariable { name: "L_ant".into() })
        );

        let mut config = ScriptConfig::default();
        config.variables[0].name = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVariableName { .. })
        ));

        let mut config = ScriptConfig::default();
        config.variables[0].name = "bad name".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVariableName { .. })
        ));

        let mut config = ScriptConfig::default();
        config.filename_prefix = String::new();
        config.include_var_in_name = false;
        assert_eq!(config.validate(), Err(ConfigError::EmptyFilename));

        let mut config = ScriptConfig::default();
        config.sweep_name = " ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField { field: "sweepName" })
        );
    }

    #[test]
    fn validate_rejects_control_characters_in_units() {
        let mut config = ScriptConfig::default();
        config.variables[0].units = "mm\nraise SystemExit".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUnits { name: "L_ant".into() })
        );

        config.variables[0].units = "mm\t".to_string();
        assert!(config.validate().is_err());

        config.variables[0].units = "GHz".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn precision_follows_inputs() {
        assert_eq!(SweepVariable::new("f", 1e12, 1e12 + 0.5, 0.25, "Hz").precision(), 2);
        assert_eq!(SweepVariable::new("L", 10.0, 20.0, 2.0, "mm").precision(), 0);
        assert_eq!(SweepVariable::new("W", 0.1, 1.0, 0.05, "mm").precision(), 2);
    }

    #[test]
    fn validate_port_bounds() {
        let mut config = ScriptConfig::default();
        for ports in [0, 100] {
            config.num_ports = ports;
            assert_eq!(
                config.validate(),
                Err(ConfigError::PortsOutOfRange { ports: i64::from(ports) })
            );
        }
        for ports in [1, 99] {
            config.num_ports = ports;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn parametric_setup_name_only_required_in_parametric_mode() {
        let mut config = ScriptConfig::default();
        config.parametric_setup_name = String::new();
        assert!(config.validate().is_err());

        config.set_simulate_individually(true);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn analysis_setup_combines_names() {
        let config = ScriptConfig::default();
        assert_eq!(config.analysis_setup(), "HFSS_Setup_1 : Sweep_1");
    }

    #[test]
    fn parse_platform_and_mode_strings() {
        assert_eq!("Linux".parse::<TargetPlatform>(), Ok(TargetPlatform::Linux));
        assert!("mac".parse::<TargetPlatform>().is_err());
        assert_eq!("smart".parse::<ExportMode>(), Ok(ExportMode::AutoDetect));
        assert_eq!("manual-loop".parse::<ExportMode>(), Ok(ExportMode::ManualLoop));
    }
}
