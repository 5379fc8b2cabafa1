//! Canonical strategies that fit a VPC

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::{plan_blocks, required_bits};
use crate::models::{BlockPlan, Strategy, Vpc};
use crate::{Error, PlannerConfig, Result};

/// A viable strategy paired with the block sizing it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOption {
    pub strategy: Strategy,
    pub plan: BlockPlan,
}

impl fmt::Display for StrategyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} usable IPs per subnet)",
            self.strategy,
            self.plan.mask(),
            self.plan.usable_per_subnet
        )
    }
}

/// Enumerates strategies for one VPC under one set of limits
#[derive(Debug, Clone, Copy)]
pub struct StrategyCatalog<'a> {
    vpc: &'a Vpc,
    config: &'a PlannerConfig,
}

impl<'a> StrategyCatalog<'a> {
    pub fn new(vpc: &'a Vpc, config: &'a PlannerConfig) -> Self {
        Self { vpc, config }
    }

    /// Lazily yield every canonical strategy whose blocks fit, ascending by subnet count.
    ///
    /// Each call starts a fresh pass over the table.
    pub fn available(&self) -> impl Iterator<Item = StrategyOption> + 'a {
        let vpc = self.vpc;
        let config = self.config;
        Strategy::canonical().filter_map(move |strategy| {
            let bits = required_bits(strategy.effective_blocks());
            match plan_blocks(vpc, bits, config) {
                Ok(plan) => Some(StrategyOption { strategy, plan }),
                Err(e) => {
                    debug!(strategy = %strategy, error = %e, "Strategy does not fit");
                    None
                }
            }
        })
    }

    /// Collect the viable strategies, failing when none fit
    pub fn viable(&self) -> Result<Vec<StrategyOption>> {
        let options: Vec<_> = self.available().collect();
        if options.is_empty() {
            warn!(vpc = %self.vpc, "No canonical strategy fits");
            return Err(Error::NoViableStrategy {
                vpc: self.vpc.to_string(),
            });
        }
        Ok(options)
    }
}
