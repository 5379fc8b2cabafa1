//! Data models for VPC planning

mod allocation;
mod block_plan;
mod strategy;
mod tier;
mod vpc;

pub use allocation::{AllocationResult, PlanSummary, TierAllocation, TierSummary};
pub use block_plan::BlockPlan;
pub use strategy::{CANONICAL_STRATEGIES, Strategy};
pub use tier::{Tier, TierSpec};
pub use vpc::Vpc;
