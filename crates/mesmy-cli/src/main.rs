mod cli;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::Result;
use clap::Parser;
use mesmy::workflows::equilibration;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run_app(cli) {
        error!("Workflow generation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("mesmy v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = AppConfig::from_cli(&cli)?;
    let workflow = equilibration::generate(&config.inpcrd_path, &config.prmtop_path)?;

    match &config.output {
        Some(path) => {
            write_to_file(&workflow.script, path)?;
            info!("Workflow script written to '{}'.", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_script(&workflow.script, &mut handle)?;
        }
    }

    Ok(())
}

fn write_to_file(script: &str, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_script(script, &mut writer)
}

/// Emits the script followed by a single newline, then flushes.
fn write_script<W: Write>(script: &str, writer: &mut W) -> Result<()> {
    writer.write_all(script.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
