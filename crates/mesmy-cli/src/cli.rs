use clap::{ArgAction, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "mesmy",
    about = "Create a script for a multi-step Amber MD relaxation/equilibration workflow.",
    help_template = HELP_TEMPLATE,
    disable_version_flag = true
)]
pub struct Cli {
    /// Input Amber CRD file.
    #[arg(short = 'i', long, required_unless_present = "version", value_name = "PATH")]
    pub inpcrd: Option<PathBuf>,

    /// Input Amber PRMTOP file.
    #[arg(short = 'p', long, required_unless_present = "version", value_name = "PATH")]
    pub prmtop: Option<PathBuf>,

    /// Write the generated script to a file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the version number and exit, ignoring any other arguments
    #[arg(long)]
    pub version: bool,
}
