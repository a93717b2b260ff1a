//! Static blocks of the generated IronPython script

/// Environment initialisation and the guarded window restore
pub const PROLOGUE: &str = r#"import os
import ScriptEnv

ScriptEnv.Initialize("Ansoft.ElectronicsDesktop")
oDesktop = ScriptEnv.GetDesktop()

# No window exists in batch mode (ansysedt -ng)
try:
    oDesktop.RestoreWindow()
except:
    pass


def log(message):
    try:
        oDesktop.AddMessage("", "", 0, message)
    except:
        pass
    print(message)


oProject = oDesktop.GetActiveProject()
oDesign = oProject.GetActiveDesign()
oModule = oDesign.GetModule("Solutions")
"#;

/// Touchstone export of one solved variation
pub const EXPORT_FUNCTION: &str = r#"def export_touchstone(variation, path):
    oModule.ExportNetworkData(variation, [solution_name], 3, path, ["All"], True, 50, "S", -1, 0, 15, True, False, False)
"#;

/// Export folder creation; an empty folder means the working directory
pub const MAKE_EXPORT_FOLDER: &str = r#"if export_folder and not os.path.isdir(export_folder):
    os.makedirs(export_folder)
"#;
