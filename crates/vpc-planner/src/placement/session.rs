//! Per-tier placement state machine
//!
//! A session walks the strategy's tiers in order. Each tier is offered a
//! default start one cushion block past the previous tier; the operator
//! accepts it or supplies an override. Once every tier is placed the session
//! previews the plan and waits for a confirm, or resets for another pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{overlaps, validate_start};
use crate::address::{distance, offset_addr, parse_ipv4};
use crate::models::{AllocationResult, BlockPlan, Strategy, TierAllocation, TierSpec, Vpc};
use crate::planner::StrategyOption;
use crate::{Error, Result};

/// Where a placement session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Offering the default start for tier `n`
    SelectingTier(usize),
    /// Waiting for an operator-supplied start for tier `n`
    AwaitingOverride(usize),
    /// Every tier placed, waiting for confirmation
    Previewing,
    /// Result produced (terminal)
    Confirmed,
    /// Preview rejected, allocations being cleared
    Reconfiguring,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Confirmed)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::SelectingTier(i) => write!(f, "selecting tier {}", i),
            SessionState::AwaitingOverride(i) => write!(f, "awaiting override for tier {}", i),
            SessionState::Previewing => f.write_str("previewing"),
            SessionState::Confirmed => f.write_str("confirmed"),
            SessionState::Reconfiguring => f.write_str("reconfiguring"),
        }
    }
}

/// Snapshot of a fully placed plan awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub vpc: Vpc,
    pub block_plan: BlockPlan,
    pub tiers: Vec<TierAllocation>,
    pub usable_per_subnet: u64,
}

/// Working state for placing one strategy's tiers inside a VPC
#[derive(Debug, Clone)]
pub struct PlacementSession {
    id: Uuid,
    vpc: Vpc,
    strategy: Strategy,
    plan: BlockPlan,
    /// One slot per strategy tier, in strategy order
    allocations: Vec<Option<TierAllocation>>,
    /// Offset from the VPC base where the next default starts
    offset: u64,
    state: SessionState,
    passes: u32,
}

impl PlacementSession {
    /// Start a session for a chosen strategy; begins at the first tier
    pub fn new(vpc: Vpc, option: StrategyOption) -> Self {
        let slots = option.strategy.tiers().len();
        let session = Self {
            id: Uuid::new_v4(),
            vpc,
            strategy: option.strategy,
            plan: option.plan,
            allocations: vec![None; slots],
            offset: 0,
            state: SessionState::SelectingTier(0),
            passes: 1,
        };
        info!(
            session = %session.id,
            vpc = %session.vpc,
            strategy = %session.strategy,
            mask = %session.plan.mask(),
            "Placement session started"
        );
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn vpc(&self) -> &Vpc {
        &self.vpc
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn block_plan(&self) -> &BlockPlan {
        &self.plan
    }

    /// Number of placement passes so far, including the current one
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// The tier awaiting placement, if any
    pub fn current_tier(&self) -> Option<TierSpec> {
        match self.state {
            SessionState::SelectingTier(i) | SessionState::AwaitingOverride(i) => {
                self.strategy.tiers().get(i).copied()
            }
            _ => None,
        }
    }

    /// Recorded allocation for the tier at `index`
    pub fn allocation(&self, index: usize) -> Option<&TierAllocation> {
        self.allocations.get(index).and_then(Option::as_ref)
    }

    /// Suggested start for the current tier.
    ///
    /// Fails with `DefaultPastEnd` when the offset runs past 255.255.255.255.
    pub fn default_start(&self) -> Result<Ipv4Addr> {
        self.current_index("suggest a default")?;
        offset_addr(self.vpc.base(), self.offset).ok_or(Error::DefaultPastEnd {
            offset: self.offset,
            first: self.vpc.base(),
            last: self.vpc.last_address(),
        })
    }

    /// Accept the default for the current tier.
    ///
    /// A default that no longer fits (after earlier overrides) moves the
    /// session to `AwaitingOverride` and returns the placement error.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn accept_default(&mut self) -> Result<SessionState> {
        let index = match self.state {
            SessionState::SelectingTier(i) => i,
            state => return Err(self.invalid("accept a default", state)),
        };
        let placed = self
            .default_start()
            .and_then(|start| self.place(index, start));

        match placed {
            Ok(state) => Ok(state),
            Err(e) if e.is_recoverable() => {
                warn!(tier = index, error = %e, "Default start rejected");
                self.state = SessionState::AwaitingOverride(index);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Decline the default and wait for an override
    pub fn decline_default(&mut self) -> Result<SessionState> {
        match self.state {
            SessionState::SelectingTier(i) => {
                self.state = SessionState::AwaitingOverride(i);
                Ok(self.state)
            }
            state => Err(self.invalid("decline a default", state)),
        }
    }

    /// Place the current tier at an operator-supplied address.
    ///
    /// On any failure the session stays in `AwaitingOverride` for the same tier.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn submit_override(&mut self, candidate: &str) -> Result<SessionState> {
        let index = match self.state {
            SessionState::AwaitingOverride(i) => i,
            state => return Err(self.invalid("submit an override", state)),
        };
        let start = parse_ipv4(candidate)?;

        self.place(index, start).inspect_err(|e| {
            warn!(tier = index, candidate = %start, error = %e, "Override rejected");
        })
    }

    /// Full plan for review
    pub fn preview(&self) -> Result<Preview> {
        if self.state != SessionState::Previewing {
            return Err(self.invalid("preview", self.state));
        }
        Ok(Preview {
            vpc: self.vpc,
            block_plan: self.plan,
            tiers: self.allocations.iter().flatten().cloned().collect(),
            usable_per_subnet: self.plan.usable_per_subnet,
        })
    }

    /// Accept the preview and produce the result; valid once
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn confirm(&mut self) -> Result<AllocationResult> {
        if self.state != SessionState::Previewing {
            return Err(self.invalid("confirm", self.state));
        }

        let tiers: Vec<TierAllocation> = std::mem::take(&mut self.allocations)
            .into_iter()
            .flatten()
            .collect();
        self.state = SessionState::Confirmed;

        info!(passes = self.passes, tiers = tiers.len(), "Plan confirmed");

        Ok(AllocationResult {
            vpc: self.vpc,
            strategy: self.strategy.clone(),
            block_plan: self.plan,
            tiers,
        })
    }

    /// Reject the preview: clear every placement and start again at the first tier
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn reject_preview(&mut self) -> Result<SessionState> {
        if self.state != SessionState::Previewing {
            return Err(self.invalid("reconfigure", self.state));
        }

        self.state = SessionState::Reconfiguring;
        debug!(pass = self.passes, "Clearing placements");
        self.allocations.iter_mut().for_each(|slot| *slot = None);
        self.offset = 0;
        self.passes += 1;
        self.state = SessionState::SelectingTier(0);

        info!(pass = self.passes, "Reconfiguring placement");
        Ok(self.state)
    }

    fn current_index(&self, action: &'static str) -> Result<usize> {
        match self.state {
            SessionState::SelectingTier(i) | SessionState::AwaitingOverride(i) => Ok(i),
            state => Err(self.invalid(action, state)),
        }
    }

    fn invalid(&self, action: &'static str, state: SessionState) -> Error {
        Error::InvalidTransition {
            action,
            state: state.to_string(),
        }
    }

    /// Validate, overlap-check and record tier `index` at `start`, then advance
    fn place(&mut self, index: usize, start: Ipv4Addr) -> Result<SessionState> {
        let wanted = self.strategy.tiers()[index];
        validate_start(start, &self.vpc, &self.plan, wanted.subnet_count)?;

        let candidate = TierAllocation::materialize(wanted.tier, start, wanted.subnet_count, &self.plan)?;
        if let Some(other) = self.allocations[..index]
            .iter()
            .flatten()
            .find(|placed| overlaps(placed, &candidate, self.plan.block_size))
        {
            return Err(Error::Overlap {
                tier: wanted.tier,
                candidate: start,
                other: other.tier,
            });
        }

        // start is validated inside the VPC, so the distance is non-negative
        let relative = distance(self.vpc.base(), start) as u64;
        self.offset = relative + (u64::from(wanted.subnet_count) + 1) * self.plan.block_size;
        debug!(
            tier = %wanted.tier,
            start = %start,
            subnets = wanted.subnet_count,
            next_offset = self.offset,
            "Tier placed"
        );
        self.allocations[index] = Some(candidate);

        self.state = if index + 1 < self.allocations.len() {
            SessionState::SelectingTier(index + 1)
        } else {
            SessionState::Previewing
        };
        Ok(self.state)
    }
}
