//! Starter configuration
//!
//! Writes a commented `sweep.yaml` with the default sweep.

use crate::config::{TargetPlatform, LINUX_EXPORT_PATH, WINDOWS_EXPORT_PATH};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "sweep.yaml";

/// Write `sweep.yaml` into `dir`, refusing to overwrite
pub fn init_config(dir: &Path, platform: TargetPlatform) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, starter_config(platform))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

fn starter_config(platform: TargetPlatform) -> String {
    let (platform_name, export_path) = match platform {
        TargetPlatform::Windows => ("windows", WINDOWS_EXPORT_PATH),
        TargetPlatform::Linux => ("linux", LINUX_EXPORT_PATH),
    };
    CONFIG_TEMPLATE
        .replace("{{platform}}", platform_name)
        .replace("{{export_path}}", &export_path.replace('\\', "\\\\"))
}

const CONFIG_TEMPLATE: &str = r#"# HFSS sweep export configuration
# Generate with: sweepgen generate sweep.yaml -o export_script.py

targetPlatform: {{platform}}

# Names exactly as shown in the Project Manager tree
solutionName: HFSS_Setup_1
sweepName: Sweep_1
parametricSetupName: ParametricSetup1

# auto-detect | manual-loop | parametric
mode: parametric
debugMode: false

# Start/Stop/Step must match the HFSS parametric table
variables:
  - name: L_ant
    start: 10
    stop: 20
    step: 2
    units: mm
  - name: W_sub
    start: 1
    stop: 3
    step: 1
    units: mm

exportPath: "{{export_path}}"
filenamePrefix: Dipole
includeVarInName: true
numPorts: 2
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportMode, ScriptConfig};
    use tempfile::tempdir;

    #[test]
    fn test_init_windows_config() {
        let temp = tempdir().unwrap();
        let path = init_config(temp.path(), TargetPlatform::Windows).unwrap();

        let config = ScriptConfig::from_path(&path).unwrap();
        assert_eq!(config, ScriptConfig::default());
    }

    #[test]
    fn test_init_linux_config() {
        let temp = tempdir().unwrap();
        let path = init_config(temp.path(), TargetPlatform::Linux).unwrap();

        let config = ScriptConfig::from_path(&path).unwrap();
        assert_eq!(config.target_platform, TargetPlatform::Linux);
        assert_eq!(config.export_path, LINUX_EXPORT_PATH);
        assert_eq!(config.mode, ExportMode::Parametric);
    }

    #[test]
    fn test_init_already_exists() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "keep me").unwrap();

        assert!(init_config(temp.path(), TargetPlatform::Windows).is_err());
        let kept = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(kept, "keep me");
    }
}
