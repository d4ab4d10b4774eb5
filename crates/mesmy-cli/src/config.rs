use crate::cli::Cli;
use crate::error::{CliError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Fully resolved inputs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub inpcrd_path: PathBuf,
    pub prmtop_path: PathBuf,
    /// Destination file for the script; standard output when `None`.
    pub output: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let inpcrd_path = cli
            .inpcrd
            .clone()
            .ok_or_else(|| CliError::Argument("--inpcrd is required".to_string()))?;
        let prmtop_path = cli
            .prmtop
            .clone()
            .ok_or_else(|| CliError::Argument("--prmtop is required".to_string()))?;

        let config = Self {
            inpcrd_path,
            prmtop_path,
            output: cli.output.clone(),
        };
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}
