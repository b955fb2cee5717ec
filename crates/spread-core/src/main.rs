//! Propagation Simulation
//!
//! Runs one Scan + Propagate pass over the collaborator files in a working
//! directory. Every effect is a local text file.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use spread_core::{Driver, SimConfig};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "spread_sim")]
#[command(about = "Single-pass propagation and infection ledger simulation")]
struct Args {
    /// Directory holding the input and output sinks
    #[arg(long, default_value = ".")]
    workdir: PathBuf,

    /// TOML file overriding sink names and markers
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the run report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.print_default_config {
        match SimConfig::default().to_toml() {
            Ok(text) => print!("{}", text),
            Err(e) => tracing::warn!("Could not render default config: {}", e),
        }
        return;
    }

    let config = SimConfig::load_or_default(args.config.as_deref());

    let mut driver = Driver::initialize(config, args.workdir.clone());
    let report = driver.run();

    if let Some(path) = &args.report {
        write_report(path, &report);
    }
}

fn write_report(path: &Path, report: &spread_core::RunReport) {
    let json = match report.to_json() {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Could not serialize run report: {}", e);
            return;
        }
    };
    if let Err(e) = fs::write(path, json) {
        tracing::warn!("Could not write run report to {:?}: {}", path, e);
    } else {
        tracing::info!("Wrote run report to {:?}", path);
    }
}
