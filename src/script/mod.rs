//! Script assembly
//!
//! [`ScriptAssembler`] turns a [`ScriptConfig`] into the complete IronPython
//! script. It is a pure function of its input: no state survives between
//! calls and identical configs give byte-identical scripts.

mod body;
mod template;
mod writer;

pub use writer::ScriptWriter;

use crate::config::{ExportMode, ScriptConfig};
use crate::error::SweepgenError;
use crate::export::{
    compose_filename, join_path, normalize_separators, touchstone_extension, variation_string,
};
use crate::format::{format_number, py_str};
use crate::limits::SweepLimits;
use crate::sweep::Sweep;
use tracing::{debug, info};

/// Everything the script needs to know about one combination
#[derive(Debug, Clone, PartialEq)]
pub struct ExportEntry {
    /// `Name='value'` string HFSS matches against solved variations
    pub variation: String,
    pub filename: String,
    /// Fully qualified export path on the target platform
    pub path: String,
    /// `(name, value-with-units)` in declaration order
    pub assignments: Vec<(String, String)>,
}

/// Per-variable summary kept for the script header
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSummary {
    pub name: String,
    pub description: String,
    pub count: usize,
}

/// The expanded sweep, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub axes: Vec<AxisSummary>,
    pub entries: Vec<ExportEntry>,
    pub export_folder: String,
}

impl ExportPlan {
    /// Total combinations, always the product of the axis counts
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptAssembler {
    limits: SweepLimits,
}

impl ScriptAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SweepLimits) -> Self {
        Self { limits }
    }

    /// Validate the config and compute every variation and export path
    pub fn plan(&self, config: &ScriptConfig) -> Result<ExportPlan, SweepgenError> {
        config.validate()?;
        let extension = touchstone_extension(config.num_ports)?;
        let sweep = Sweep::build(&config.variables, &self.limits)?;

        let axes = sweep
            .axes()
            .iter()
            .map(|axis| {
                let v = axis.variable;
                let digits = v.precision();
                AxisSummary {
                    name: v.name.clone(),
                    description: format!(
                        "{}..{} step {}{}",
                        format_number(v.start, digits),
                        format_number(v.stop, digits),
                        format_number(v.step, digits),
                        if v.units.is_empty() {
                            String::new()
                        } else {
                            format!(" {}", v.units)
                        }
                    ),
                    count: axis.values.len(),
                }
            })
            .collect();

        let entries = sweep
            .combinations()
            .iter()
            .map(|combination| {
                let filename = compose_filename(
                    combination,
                    &config.filename_prefix,
                    config.include_var_in_name,
                    &extension,
                );
                ExportEntry {
                    variation: variation_string(combination),
                    path: join_path(&config.export_path, config.target_platform, &filename),
                    filename,
                    assignments: combination
                        .iter()
                        .map(|a| (a.name().to_string(), a.literal()))
                        .collect(),
                }
            })
            .collect();

        Ok(ExportPlan {
            axes,
            entries,
            export_folder: normalize_separators(&config.export_path, config.target_platform),
        })
    }

    /// Generate the complete script. Fails before producing any text.
    pub fn assemble(&self, config: &ScriptConfig) -> Result<String, SweepgenError> {
        let plan = self.plan(config)?;
        debug!(mode = ?config.mode, total = plan.total(), "assembling script");

        let mut w = ScriptWriter::new();
        write_header(&mut w, config, &plan);
        w.blank().block(template::PROLOGUE).blank();
        write_settings(&mut w, config, &plan);
        w.blank();
        write_combinations(&mut w, &plan);
        w.blank().block(template::EXPORT_FUNCTION).blank();

        body::write_solve(&mut w, config.mode);
        w.blank();
        body::write_export_loop(&mut w, config.mode, config.debug_mode);
        w.blank();
        body::write_summary(&mut w, config.debug_mode);

        let script = w.finish();
        info!(bytes = script.len(), combinations = plan.total(), "script generated");
        Ok(script)
    }
}

/// Generate a script with the default limits
pub fn generate_script(config: &ScriptConfig) -> Result<String, SweepgenError> {
    ScriptAssembler::new().assemble(config)
}

fn write_header(w: &mut ScriptWriter, config: &ScriptConfig, plan: &ExportPlan) {
    let rule = format!("# {}", "=".repeat(62));
    w.line("# -*- coding: utf-8 -*-")
        .line(&rule)
        .line("# HFSS parametric sweep export")
        .line(format!("# Generated by sweepgen {}", env!("CARGO_PKG_VERSION")))
        .line("#")
        .line(format!("# Platform     : {}", config.target_platform))
        .line(format!("# Mode         : {}", config.mode))
        .line(format!(
            "# Debug        : {}",
            if config.debug_mode { "on" } else { "off" }
        ));

    for (i, axis) in plan.axes.iter().enumerate() {
        let label = if i == 0 { "# Variables    : " } else { "#                " };
        w.line(format!(
            "{}{} {} ({} values)",
            label, axis.name, axis.description, axis.count
        ));
    }

    w.line(format!("# Combinations : {}", plan.total()))
        .line("#")
        .line("# Targets the active design. Run from Tools > Run Script, or:")
        .line("#   ansysedt -ng -runscript <this script> <project>.aedt")
        .line(&rule);
}

fn write_settings(w: &mut ScriptWriter, config: &ScriptConfig, plan: &ExportPlan) {
    w.line(format!("export_folder = {}", py_str(&plan.export_folder)))
        .line(format!("solution_name = {}", py_str(&config.analysis_setup())))
        .line(format!("setup_name = {}", py_str(&config.solution_name)));
    if config.mode == ExportMode::Parametric {
        w.line(format!(
            "parametric_setup_name = {}",
            py_str(&config.parametric_setup_name)
        ));
    }
    w.blank().block(template::MAKE_EXPORT_FOLDER);
}

fn write_combinations(w: &mut ScriptWriter, plan: &ExportPlan) {
    w.line("# (variation, touchstone file, variable assignments)")
        .line("combinations = [")
        .indent();
    for entry in &plan.entries {
        let assignments = entry
            .assignments
            .iter()
            .map(|(name, value)| format!("({}, {})", py_str(name), py_str(value)))
            .collect::<Vec<_>>()
            .join(", ");
        w.line(format!(
            "({}, {}, [{}]),",
            py_str(&entry.variation),
            py_str(&entry.path),
            assignments
        ));
    }
    w.dedent()
        .line("]")
        .line("total = len(combinations)");
}
