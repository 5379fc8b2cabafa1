//! `vpc-plan check`

use clap::Args;
use tracing::debug;
use vpc_planner::address::parse_ipv4;
use vpc_planner::{PlannerConfig, StrategyCatalog, Tier, Vpc, validate_start};

use crate::{CliError, Result, output};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// VPC block, e.g. 10.0.0.0/16
    pub cidr: String,

    /// Strategy index from `vpc-plan strategies`
    #[arg(short, long)]
    pub strategy: usize,

    /// Tier the candidate is for (public, private, database)
    #[arg(short, long)]
    pub tier: Tier,

    /// Candidate start address
    #[arg(long)]
    pub start: String,
}

pub fn execute(args: CheckArgs, config: &PlannerConfig) -> Result<()> {
    let vpc = Vpc::parse(&args.cidr, config)?;
    let options = StrategyCatalog::new(&vpc, config).viable()?;
    let option = options.get(args.strategy).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "strategy index {} is out of range (0-{})",
            args.strategy,
            options.len() - 1
        ))
    })?;

    let count = option.strategy.count(args.tier);
    if count == 0 {
        return Err(CliError::InvalidArgument(format!(
            "strategy '{}' has no {} tier",
            option.strategy, args.tier
        )));
    }

    let start = parse_ipv4(&args.start)?;
    debug!(tier = %args.tier, start = %start, count, "Checking candidate");
    validate_start(start, &vpc, &option.plan, count)?;

    output::success(&format!(
        "{} can hold the {} tier ({} x {} blocks)",
        start,
        args.tier,
        count,
        option.plan.mask()
    ));
    Ok(())
}
