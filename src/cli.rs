use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use crate::colormap::{build_transfer_function, catalog, next_preset};
use crate::controller::{ControllerConfig, PaneController};
use crate::session::{load_spec, run_session, save_report};
use crate::viewer::RecordingViewer;

#[derive(Debug, Parser)]
#[command(
    name = "duoview",
    version,
    about = "Dual-pane medical image viewer control core"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Presets {
        #[command(subcommand)]
        command: PresetsCommand,
    },
    /// Runs a scripted session against in-memory recording viewers and
    /// prints the resulting report.
    Run {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum PresetsCommand {
    /// Prints the full catalog with its control-point tables.
    List,
    /// Prints the 9-entry cycle order starting from grayscale.
    Cycle,
    /// Materializes one preset over a data intensity range.
    Sample {
        #[arg(long)]
        preset: String,
        #[arg(long, default_value_t = 0.0)]
        min: f32,
        #[arg(long, default_value_t = 4095.0)]
        max: f32,
    },
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Presets { command } => match command {
            PresetsCommand::List => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(catalog()).map_err(|error| error.to_string())?
                );
            }
            PresetsCommand::Cycle => {
                let mut current: Option<&str> = None;
                let mut cycle = Vec::new();
                loop {
                    current = next_preset(current).map_err(|error| error.to_string())?;
                    cycle.push(json!(current.unwrap_or("grayscale")));
                    if current.is_none() {
                        break;
                    }
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cycle).map_err(|error| error.to_string())?
                );
            }
            PresetsCommand::Sample { preset, min, max } => {
                let samples =
                    build_transfer_function(&preset, min, max).map_err(|error| error.to_string())?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&samples).map_err(|error| error.to_string())?
                );
            }
        },
        Commands::Run {
            script,
            report,
            config,
        } => {
            let spec = load_spec(&script).map_err(|error| error.to_string())?;
            let controller_config = match config {
                Some(path) => load_config(&path)?,
                None => ControllerConfig::default(),
            };
            let mut controller: PaneController<RecordingViewer> =
                PaneController::new(controller_config);
            for binding in spec.effective_bindings() {
                controller.bind_pane(binding.pane, binding.build_viewer());
            }
            let session_report =
                run_session(&spec, &mut controller).map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                save_report(&report_path, &session_report).map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&session_report)
                    .map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}

fn load_config(path: &PathBuf) -> Result<ControllerConfig, String> {
    let raw = std::fs::read_to_string(path).map_err(|error| error.to_string())?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str(&raw).map_err(|error| error.to_string())
    } else {
        serde_json::from_str(&raw).map_err(|error| error.to_string())
    }
}
