//! Tier placement
//!
//! - [`validate_start`] checks a candidate start against the VPC and block grid
//! - [`overlaps`] compares two placed tiers including their cushion blocks
//! - [`PlacementSession`] is the per-tier state machine
//! - [`drive_session`] runs a session against an [`Operator`]

mod driver;
mod overlap;
mod session;
mod validator;

pub use driver::{Decision, Operator, ScriptedOperator, Step, drive_session, plan_interactively};
pub use overlap::overlaps;
pub use session::{PlacementSession, Preview, SessionState};
pub use validator::validate_start;
