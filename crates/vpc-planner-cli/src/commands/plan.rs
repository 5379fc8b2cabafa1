//! `vpc-plan plan`

use clap::{Args, ValueEnum};
use vpc_planner::{AllocationResult, Error, PlannerConfig, Vpc, plan_interactively};

use crate::prompt::TerminalOperator;
use crate::{CliError, Result, output};

/// Rendering of the confirmed plan on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `key:value;key:value` line
    #[default]
    Kv,
    /// One `key=value` entry per line
    List,
    /// Pretty JSON summary
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// VPC block, e.g. 10.0.0.0/16
    pub cidr: String,

    /// Strategy index from `vpc-plan strategies` (skips the selection prompt)
    #[arg(short, long)]
    pub strategy: Option<usize>,

    /// Accept every default placement and the preview without prompting
    #[arg(short = 'y', long)]
    pub accept_defaults: bool,

    /// Output format for the result record
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Kv)]
    pub format: OutputFormat,
}

pub fn execute(args: PlanArgs, config: &PlannerConfig) -> Result<()> {
    let vpc = Vpc::parse(&args.cidr, config)?;
    let mut operator = TerminalOperator::new(args.strategy, args.accept_defaults);

    let result = match plan_interactively(vpc, config, &mut operator) {
        Ok(result) => result,
        Err(Error::Aborted) => {
            if let Some(e) = operator.take_prompt_error() {
                return Err(CliError::Prompt(e));
            }
            return Err(Error::Aborted.into());
        }
        Err(e) => return Err(e.into()),
    };

    output::success(&format!(
        "Planned {} subnets in {}",
        result.summary().total_subnets,
        result.vpc
    ));
    println!("{}", render(&result, args.format)?);
    Ok(())
}

/// Render the result record in the requested format
pub fn render(result: &AllocationResult, format: OutputFormat) -> Result<String> {
    let summary = result.summary();
    Ok(match format {
        OutputFormat::Kv => summary.to_kv_line(),
        OutputFormat::List => summary.to_string_list().join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
    })
}
