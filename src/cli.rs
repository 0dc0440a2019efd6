//! Command-line argument parsing for the scenario replay tool
//!
//! Supports:
//! - Replaying a single scenario file
//! - Replaying every scenario in a directory
//! - Theme override and JSON lines output

use clap::Parser;
use std::path::PathBuf;

/// Replay bubble-field scenarios headlessly
#[derive(Parser, Debug)]
#[command(name = "wallet-ui", version, about = "Replay bubble-field scenarios")]
pub struct CliArgs {
    /// Path to a single scenario YAML file
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Replay all scenarios in the scenarios directory
    #[arg(long)]
    pub all: bool,

    /// Directory containing scenario YAML files
    #[arg(long, value_name = "DIR", default_value = "samples/scenarios")]
    pub dir: PathBuf,

    /// Override theme (file path or theme id)
    #[arg(long)]
    pub theme: Option<String>,

    /// Print one JSON object per step instead of a table
    #[arg(long)]
    pub json: bool,
}

/// What to replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayTarget {
    File(PathBuf),
    Directory(PathBuf),
}

impl CliArgs {
    /// Resolve the replay target; `--scenario` wins over `--all`
    pub fn target(&self) -> Result<ReplayTarget, String> {
        match (&self.scenario, self.all) {
            (Some(path), _) => Ok(ReplayTarget::File(path.clone())),
            (None, true) => Ok(ReplayTarget::Directory(self.dir.clone())),
            (None, false) => Err("pass --scenario <FILE> or --all".to_string()),
        }
    }
}
