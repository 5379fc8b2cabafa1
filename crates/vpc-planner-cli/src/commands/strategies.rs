//! `vpc-plan strategies`

use clap::Args;
use vpc_planner::{PlannerConfig, StrategyCatalog, Vpc};

use crate::{Result, output};

#[derive(Debug, Clone, Args)]
pub struct StrategiesArgs {
    /// VPC block, e.g. 10.0.0.0/16
    pub cidr: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: StrategiesArgs, config: &PlannerConfig) -> Result<()> {
    let vpc = Vpc::parse(&args.cidr, config)?;
    let options = StrategyCatalog::new(&vpc, config).viable()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    output::header(&format!("Strategies for {} ({} addresses)", vpc, vpc.total_addresses()));
    for line in output::strategy_lines(&options) {
        println!("{}", line);
    }
    Ok(())
}
