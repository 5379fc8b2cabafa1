//! dialoguer-backed operator
//!
//! Cancelling any prompt (Esc / Ctrl-C) or entering `abort` at the address
//! prompt aborts the whole run.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::net::Ipv4Addr;
use tracing::error;
use vpc_planner::{Decision, Error, Operator, Preview, StrategyOption, TierSpec};

use crate::output;

/// Answers planner prompts from the terminal
pub struct TerminalOperator {
    theme: ColorfulTheme,
    /// Preselected strategy index
    strategy: Option<usize>,
    /// Accept every default and the preview without prompting
    accept_defaults: bool,
    prompt_error: Option<dialoguer::Error>,
}

impl TerminalOperator {
    pub fn new(strategy: Option<usize>, accept_defaults: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            strategy,
            accept_defaults,
            prompt_error: None,
        }
    }

    /// Terminal failure that caused an abort, if any
    pub fn take_prompt_error(&mut self) -> Option<dialoguer::Error> {
        self.prompt_error.take()
    }

    fn settle<T>(&mut self, answer: dialoguer::Result<Option<T>>) -> Decision<T> {
        match answer {
            Ok(Some(value)) => Decision::Proceed(value),
            Ok(None) => Decision::Abort,
            Err(e) => {
                error!(error = %e, "Prompt failed");
                self.prompt_error = Some(e);
                Decision::Abort
            }
        }
    }
}

impl Operator for TerminalOperator {
    fn choose_strategy(&mut self, options: &[StrategyOption]) -> Decision<usize> {
        if let Some(index) = self.strategy {
            return Decision::Proceed(index);
        }
        let items = output::strategy_lines(options);
        let answer = Select::with_theme(&self.theme)
            .with_prompt("Select a subnet strategy")
            .items(&items)
            .default(0)
            .interact_opt();
        self.settle(answer)
    }

    fn accept_default(&mut self, tier: &TierSpec, default: Ipv4Addr) -> Decision<bool> {
        if self.accept_defaults {
            output::info(&format!("{} tier starts at {}", tier.tier, default));
            return Decision::Proceed(true);
        }
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(format!(
                "Place the {} tier ({} subnets) at {}?",
                tier.tier, tier.subnet_count, default
            ))
            .default(true)
            .interact_opt();
        self.settle(answer)
    }

    fn override_address(&mut self, tier: &TierSpec) -> Decision<String> {
        if self.accept_defaults {
            // a rejected default cannot be fixed without an operator
            return Decision::Abort;
        }
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("Start address for the {} tier (or 'abort')", tier.tier))
            .interact_text()
            .map(|text| {
                let text = text.trim().to_string();
                (!text.eq_ignore_ascii_case("abort")).then_some(text)
            });
        self.settle(answer)
    }

    fn confirm_preview(&mut self, preview: &Preview) -> Decision<bool> {
        output::preview(preview);
        if self.accept_defaults {
            return Decision::Proceed(true);
        }
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt("Use this layout? (no to reconfigure)")
            .default(true)
            .interact_opt();
        self.settle(answer)
    }

    fn report(&mut self, error: &Error) {
        output::warn(&error.to_string());
    }
}
