//! Command implementations

pub mod check;
pub mod plan;
pub mod strategies;

use clap::Subcommand;
use vpc_planner::PlannerConfig;

use crate::Result;

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the canonical strategies that fit a VPC
    Strategies(strategies::StrategiesArgs),

    /// Place tiers interactively and print the confirmed plan
    Plan(plan::PlanArgs),

    /// Validate one candidate start address for a tier
    Check(check::CheckArgs),
}

impl Commands {
    pub fn execute(self, config: &PlannerConfig) -> Result<()> {
        match self {
            Commands::Strategies(args) => strategies::execute(args, config),
            Commands::Plan(args) => plan::execute(args, config),
            Commands::Check(args) => check::execute(args, config),
        }
    }
}
