//! Operator-driven run loop
//!
//! The core never reads a terminal. An [`Operator`] supplies every decision
//! and [`drive_session`] turns those decisions into session transitions,
//! re-prompting on recoverable errors.

use std::collections::VecDeque;
use std::net::Ipv4Addr;
use tracing::{info, warn};

use super::{PlacementSession, Preview, SessionState};
use crate::models::{AllocationResult, TierSpec, Vpc};
use crate::planner::{StrategyCatalog, StrategyOption};
use crate::{Error, PlannerConfig, Result};

/// An operator answer, or a request to abandon the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<T> {
    Proceed(T),
    Abort,
}

impl<T> Decision<T> {
    /// Unwrap a `Proceed`, mapping `Abort` to [`Error::Aborted`]
    pub fn into_result(self) -> Result<T> {
        match self {
            Decision::Proceed(value) => Ok(value),
            Decision::Abort => Err(Error::Aborted),
        }
    }
}

/// Source of operator decisions during planning
pub trait Operator {
    /// Pick one of the viable strategies by index
    fn choose_strategy(&mut self, options: &[StrategyOption]) -> Decision<usize>;

    /// Accept (`true`) or decline the suggested start for a tier
    fn accept_default(&mut self, tier: &TierSpec, default: Ipv4Addr) -> Decision<bool>;

    /// Supply a start address for a tier
    fn override_address(&mut self, tier: &TierSpec) -> Decision<String>;

    /// Confirm (`true`) or reject the finished plan
    fn confirm_preview(&mut self, preview: &Preview) -> Decision<bool>;

    /// Show a recoverable error before re-prompting
    fn report(&mut self, _error: &Error) {}
}

/// Run a session to confirmation, or until the operator aborts
pub fn drive_session<O: Operator + ?Sized>(
    mut session: PlacementSession,
    operator: &mut O,
) -> Result<AllocationResult> {
    loop {
        match session.state() {
            SessionState::SelectingTier(index) => {
                let tier = current_tier(&session)?;
                let default = match session.default_start() {
                    Ok(default) => default,
                    Err(e) if e.is_recoverable() => {
                        warn!(tier = index, error = %e, "No default start available");
                        operator.report(&e);
                        session.decline_default()?;
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                if operator.accept_default(&tier, default).into_result()? {
                    match session.accept_default() {
                        Ok(_) => {}
                        Err(e) if e.is_recoverable() => operator.report(&e),
                        Err(e) => return Err(e),
                    }
                } else {
                    session.decline_default()?;
                }
            }
            SessionState::AwaitingOverride(_) => {
                let tier = current_tier(&session)?;
                let candidate = operator.override_address(&tier).into_result()?;
                match session.submit_override(&candidate) {
                    Ok(_) => {}
                    Err(e) if e.is_recoverable() || matches!(e, Error::Format { .. }) => {
                        operator.report(&e)
                    }
                    Err(e) => return Err(e),
                }
            }
            SessionState::Previewing => {
                let preview = session.preview()?;
                if operator.confirm_preview(&preview).into_result()? {
                    return session.confirm();
                }
                session.reject_preview()?;
            }
            state @ (SessionState::Confirmed | SessionState::Reconfiguring) => {
                return Err(Error::InvalidTransition {
                    action: "drive",
                    state: state.to_string(),
                });
            }
        }
    }
}

/// List strategies for `vpc`, let the operator choose one, and drive placement
pub fn plan_interactively<O: Operator + ?Sized>(
    vpc: Vpc,
    config: &PlannerConfig,
    operator: &mut O,
) -> Result<AllocationResult> {
    config.validate()?;
    let options = StrategyCatalog::new(&vpc, config).viable()?;

    let index = operator.choose_strategy(&options).into_result()?;
    let option = options.get(index).cloned().ok_or_else(|| {
        Error::format(
            index.to_string(),
            format!("strategy index must be below {}", options.len()),
        )
    })?;
    info!(vpc = %vpc, strategy = %option.strategy, "Strategy selected");

    drive_session(PlacementSession::new(vpc, option), operator)
}

fn current_tier(session: &PlacementSession) -> Result<TierSpec> {
    session.current_tier().ok_or_else(|| Error::InvalidTransition {
        action: "prompt for a tier",
        state: session.state().to_string(),
    })
}

/// Scripted answer for [`ScriptedOperator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Strategy(usize),
    Accept,
    Decline,
    Override(String),
    Confirm,
    Reject,
    Abort,
}

/// Operator replaying a fixed list of answers; aborts when the script runs out
#[derive(Debug, Default)]
pub struct ScriptedOperator {
    steps: VecDeque<Step>,
    reported: Vec<Error>,
}

impl ScriptedOperator {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            reported: Vec::new(),
        }
    }

    /// Errors shown to the operator so far
    pub fn reported(&self) -> &[Error] {
        &self.reported
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    fn next(&mut self) -> Step {
        self.steps.pop_front().unwrap_or(Step::Abort)
    }
}

impl Operator for ScriptedOperator {
    fn choose_strategy(&mut self, _options: &[StrategyOption]) -> Decision<usize> {
        match self.next() {
            Step::Strategy(i) => Decision::Proceed(i),
            _ => Decision::Abort,
        }
    }

    fn accept_default(&mut self, _tier: &TierSpec, _default: Ipv4Addr) -> Decision<bool> {
        match self.next() {
            Step::Accept => Decision::Proceed(true),
            Step::Decline => Decision::Proceed(false),
            _ => Decision::Abort,
        }
    }

    fn override_address(&mut self, _tier: &TierSpec) -> Decision<String> {
        match self.next() {
            Step::Override(addr) => Decision::Proceed(addr),
            _ => Decision::Abort,
        }
    }

    fn confirm_preview(&mut self, _preview: &Preview) -> Decision<bool> {
        match self.next() {
            Step::Confirm => Decision::Proceed(true),
            Step::Reject => Decision::Proceed(false),
            _ => Decision::Abort,
        }
    }

    fn report(&mut self, error: &Error) {
        self.reported.push(error.clone());
    }
}
