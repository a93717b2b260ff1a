//! Bundled user manual, printed by `sweepgen manual`

pub const MANUAL: &str = r#"# sweepgen User Manual

## 1. What it does

`sweepgen` writes an IronPython script that exports Touchstone (`.sNp`) files
for every combination of a parametric sweep in Ansys HFSS. The script only
solves and exports: it never edits geometry, materials, boundaries or setups.
Manual-loop mode changes design variable values while it runs.

Runs on Ansys Electronics Desktop 2019 R3 or later, on Windows and Linux.

## 2. Preparing the HFSS project

1. Define the design variables you want to sweep (for example `L_ant`, `W_sub`).
2. Add an Optimetrics parametric setup (Optimetrics > Add > Parametric) with
   the same variables. Start/Stop/Step in the configuration must match this
   table exactly, or variation lookups will miss.
3. Make sure a solution setup (`HFSS_Setup_1`) with a frequency sweep
   (`Sweep_1`) exists.

## 3. Configuration

Create a starter file with `sweepgen init`, then edit `sweep.yaml`:

| Field | Meaning |
|-------|---------|
| `targetPlatform` | `windows` or `linux`; decides path separators |
| `solutionName` / `sweepName` | Setup and sweep, combined as `"Setup : Sweep"` |
| `parametricSetupName` | Optimetrics setup, used in parametric mode |
| `variables` | `name`, `start`, `stop`, `step`, `units` per swept variable |
| `exportPath` | Output folder, created if missing |
| `filenamePrefix` | First part of every filename |
| `includeVarInName` | Append `_Name_value` for every variable |
| `numPorts` | 1-99, selects `.s1p` ... `.s99p` |
| `mode` | `auto-detect`, `manual-loop` or `parametric` |
| `debugMode` | Progress messages and keep going after a failed export |

Leave `units` empty for unitless variables. Decimal points in filenames are
written as `d`: `L = 2.4mm` becomes `Prefix_L_2d4mm.s2p`.

## 4. Modes

- **parametric** (default): runs the parametric setup once, then exports each
  combination.
- **auto-detect**: analyzes `"Setup : Sweep"` once; HFSS skips variations it
  has already solved. The variables only drive filenames and progress.
- **manual-loop**: for each combination sets every variable, solves, and
  exports. Slower, but works when the parametric pipeline does not.

## 5. Running

    sweepgen generate sweep.yaml -o export_script.py

In HFSS: Tools > Run Script and pick the file. The script targets the active
design, so select the right design tab first.

Batch mode on Linux:

    ansysedt -ng -runscript export_script.py Project.aedt

## 6. Troubleshooting

| Symptom | Check |
|---------|-------|
| Fails immediately | A project must be open with the intended design active |
| Setup not found | `solutionName`, `sweepName`, `parametricSetupName` spelling |
| Export failed | Start/Stop/Step differ from the HFSS table; turn on `debugMode` |
| Permission denied (Linux) | Write access to `exportPath` |
"#;
