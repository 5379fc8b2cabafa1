//! VPC Subnet Planner
//!
//! Carves one IPv4 VPC block into tiers of equally sized subnets:
//! - Public, private and database tiers placed as contiguous groups
//! - One cushion block reserved after every tier
//! - Canonical tier-count strategies filtered by what the VPC can hold
//! - Operator overrides validated for range, alignment, space and overlap
//!
//! The crate only computes and validates. Prompting lives behind the
//! [`placement::Operator`] trait; provisioning consumes [`AllocationResult`].

pub mod address;
pub mod config;
pub mod error;
pub mod models;
pub mod placement;
pub mod planner;

// Re-export core types
pub use config::PlannerConfig;
pub use error::{Error, Result};
pub use models::{
    AllocationResult, BlockPlan, PlanSummary, Strategy, Tier, TierAllocation, TierSpec,
    TierSummary, Vpc,
};
pub use placement::{
    Decision, Operator, PlacementSession, Preview, ScriptedOperator, SessionState, Step,
    drive_session, overlaps, plan_interactively, validate_start,
};
pub use planner::{StrategyCatalog, StrategyOption, plan_blocks, required_bits};
