//! CLI structure and argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;
use crate::config::load_config;
use crate::Result;

/// Plan public, private and database subnets inside a VPC block
#[derive(Debug, Parser)]
#[command(name = "vpc-plan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Planner configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        self.command.execute(&config)
    }
}
