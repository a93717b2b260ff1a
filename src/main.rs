//! sweepgen CLI - HFSS sweep export script generator

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use sweepgen::error::FixSuggestion;
use sweepgen::{ExportMode, ScriptAssembler, ScriptConfig, SweepgenError, TargetPlatform};

#[derive(Parser)]
#[command(name = "sweepgen")]
#[command(about = "Generate HFSS parametric sweep export scripts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an export script from a config file
    Generate {
        /// Path to a .yaml or .json config
        config: PathBuf,

        /// Write the script here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override target platform (windows, linux)
        #[arg(long)]
        platform: Option<TargetPlatform>,

        /// Override mode (auto-detect, manual-loop, parametric)
        #[arg(short, long)]
        mode: Option<ExportMode>,

        /// Emit progress messages and continue after failed exports
        #[arg(short, long)]
        debug: bool,

        /// Override export folder
        #[arg(long)]
        export_path: Option<String>,

        /// Override filename prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Override port count
        #[arg(long)]
        ports: Option<u32>,
    },

    /// Validate a config file and show the sweep it describes
    Validate {
        /// Path to a .yaml or .json config
        config: PathBuf,
    },

    /// Write a starter sweep.yaml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Platform of the starter config (windows, linux)
        #[arg(long, default_value = "windows")]
        platform: TargetPlatform,
    },

    /// Print the user manual (Markdown)
    Manual {
        /// Write the manual here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Overrides applied on top of a loaded config
struct Overrides {
    platform: Option<TargetPlatform>,
    mode: Option<ExportMode>,
    debug: bool,
    export_path: Option<String>,
    prefix: Option<String>,
    ports: Option<u32>,
}

impl Overrides {
    fn apply(self, config: &mut ScriptConfig) {
        if let Some(platform) = self.platform {
            config.set_platform(platform);
        }
        match self.mode {
            Some(ExportMode::AutoDetect) => config.set_smart_export(true),
            Some(ExportMode::ManualLoop) => config.set_simulate_individually(true),
            Some(ExportMode::Parametric) => config.mode = ExportMode::Parametric,
            None => {}
        }
        if self.debug {
            config.debug_mode = true;
        }
        if let Some(path) = self.export_path {
            config.export_path = path;
        }
        if let Some(prefix) = self.prefix {
            config.filename_prefix = prefix;
        }
        if let Some(ports) = self.ports {
            config.num_ports = ports;
        }
    }
}

fn main() {
    // Logs go to stderr so stdout carries only the script
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config,
            output,
            platform,
            mode,
            debug,
            export_path,
            prefix,
            ports,
        } => {
            let overrides = Overrides {
                platform,
                mode,
                debug,
                export_path,
                prefix,
                ports,
            };
            generate(&config, output.as_deref(), overrides)
        }
        Commands::Validate { config } => validate(&config),
        Commands::Init { dir, platform } => init(&dir, platform),
        Commands::Manual { output } => manual(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if let Some(suggestion) = e
            .downcast_ref::<SweepgenError>()
            .and_then(|err| err.fix_suggestion())
        {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn generate(config_path: &Path, output: Option<&Path>, overrides: Overrides) -> anyhow::Result<()> {
    let mut config = ScriptConfig::from_path(config_path)?;
    overrides.apply(&mut config);

    let script = ScriptAssembler::new().assemble(&config)?;

    match output {
        Some(path) => {
            fs::write(path, &script)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Script written to {}", "✓".green(), path.display());
        }
        None => print!("{}", script),
    }
    Ok(())
}

fn validate(config_path: &Path) -> anyhow::Result<()> {
    let config = ScriptConfig::from_path(config_path)?;
    let plan = ScriptAssembler::new().plan(&config)?;

    println!("{} Config '{}' is valid", "✓".green(), config_path.display());
    println!("  Platform: {}", config.target_platform);
    println!("  Mode: {}", config.mode);
    println!("  Solution: {}", config.analysis_setup());
    for axis in &plan.axes {
        println!("  {} {} ({} values)", axis.name.cyan(), axis.description, axis.count);
    }
    println!("  Combinations: {}", plan.total());
    if let Some(first) = plan.entries.first() {
        println!("  First file: {}", first.path);
    }
    Ok(())
}

fn init(dir: &Path, platform: TargetPlatform) -> anyhow::Result<()> {
    let path = sweepgen::init::init_config(dir, platform)?;
    println!("{} Created {}", "✓".green(), path.display());
    println!(
        "  Next: {}",
        format!("sweepgen generate {} -o export_script.py", path.display()).cyan()
    );
    Ok(())
}

fn manual(output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, sweepgen::manual::MANUAL)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Manual written to {}", "✓".green(), path.display());
        }
        None => print!("{}", sweepgen::manual::MANUAL),
    }
    Ok(())
}
