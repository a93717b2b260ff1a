//! Mode-specific script bodies

use super::writer::ScriptWriter;
use crate::config::ExportMode;

/// Solve step that runs once, before the export loop
pub(super) fn write_solve(w: &mut ScriptWriter, mode: ExportMode) {
    match mode {
        ExportMode::AutoDetect => {
            w.line("# HFSS reuses solved variations and only solves what is missing")
                .line("log(\"Analyzing \" + solution_name)")
                .line("oDesign.Analyze(solution_name)");
        }
        ExportMode::Parametric => {
            w.line("log(\"Running parametric setup \" + parametric_setup_name)")
                .line("oDesign.Analyze(parametric_setup_name)");
        }
        // Solved per combination inside the loop
        ExportMode::ManualLoop => {
            w.line("log(\"Simulating \" + str(total) + \" combinations individually\")");
        }
    }
}

/// The per-combination loop.
///
/// In debug mode every iteration logs its progress and runs inside
/// `try/except`, so one failed export is reported and the run continues.
/// Otherwise the first failure raises and stops the script.
pub(super) fn write_export_loop(w: &mut ScriptWriter, mode: ExportMode, debug: bool) {
    w.line("exported = 0");
    if debug {
        w.line("failed = 0");
    }
    w.line("for index, (variation, path, assignments) in enumerate(combinations):")
        .indent();

    if debug {
        w.line("log(\"[%d/%d] %s\" % (index + 1, total, variation))")
            .line("try:")
            .indent();
    }

    if mode == ExportMode::ManualLoop {
        // `$`-prefixed names are project variables
        w.line("for name, value in assignments:")
            .indent()
            .line("if name.startswith(\"$\"):")
            .indent()
            .line("oProject.SetVariableValue(name, value)")
            .dedent()
            .line("else:")
            .indent()
            .line("oDesign.SetVariableValue(name, value)")
            .dedent()
            .dedent()
            .line("oDesign.Analyze(setup_name)");
    }
    w.line("export_touchstone(variation, path)")
        .line("exported += 1");

    if debug {
        w.dedent()
            .line("except Exception as e:")
            .indent()
            .line("failed += 1")
            .line("log(\"  export failed for %s: %s\" % (variation, e))")
            .dedent();
    }
    w.dedent();
}

pub(super) fn write_summary(w: &mut ScriptWriter, debug: bool) {
    w.line("log(\"Exported %d of %d files to %s\" % (exported, total, export_folder))");
    if debug {
        w.line("if failed:")
            .indent()
            .line("log(\"%d combinations failed, see messages above\" % failed)")
            .dedent();
    }
}
