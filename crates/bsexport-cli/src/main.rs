mod cli;
mod input;
mod prompter;

use anyhow::{Context, Result};
use bsexport::{ExportSummary, Exporter, HttpTransport};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::prompter::{CliPrompter, prompt_mode};

fn main() {
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bsexport=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(summary) => {
            println!();
            println!(
                "{} Exported {} of {} maps to {}",
                "Done.".green().bold(),
                summary.exported,
                summary.found,
                summary.path.display()
            );
            if !summary.skipped.is_empty() {
                println!(
                    "{}",
                    format!(
                        "{} maps were not found on BeatSaver and were skipped.",
                        summary.skipped.len()
                    )
                    .yellow()
                );
            }
        }
        Err(e) => {
            eprintln!();
            eprintln!("{} {:?}", "Error:".red().bold(), e);
            eprintln!();
        }
    }

    if !args.no_pause {
        input::wait_for_keypress();
    }
}

fn run(args: &Args) -> Result<ExportSummary> {
    info!("bsexport {} starting...", env!("CARGO_PKG_VERSION"));

    let prompter = CliPrompter;
    let mode = match args.mode {
        Some(mode) => mode,
        None => prompt_mode(&prompter).context("Failed to read export mode")?,
    };

    let config = args.to_config();
    debug!("Using config: {:?}", config);

    let transport = HttpTransport::new(&config);
    let exporter = Exporter::new(config, transport);

    exporter
        .run(mode, &prompter)
        .with_context(|| format!("{} export failed", mode))
}
