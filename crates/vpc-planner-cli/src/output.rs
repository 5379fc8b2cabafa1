//! Terminal rendering for operator-facing messages
//!
//! Everything here writes to stderr. Stdout carries only the result record.

use colored::Colorize;
use console::{Emoji, style};
use vpc_planner::{Preview, StrategyOption};

static INFO: Emoji = Emoji("ℹ️ ", "");
static SUCCESS: Emoji = Emoji("✅", "✓");
static WARNING: Emoji = Emoji("⚠️ ", "!");
static ERROR: Emoji = Emoji("❌", "x");

/// Print an info message
pub fn info(message: &str) {
    eprintln!("{} {}", style(INFO).blue(), message);
}

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", style(SUCCESS).green(), message.green());
}

/// Print a warning message
pub fn warn(message: &str) {
    eprintln!("{} {}", style(WARNING).yellow(), message.yellow());
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style(ERROR).red(), message.red());
}

/// Print a header
pub fn header(title: &str) {
    eprintln!("\n{}\n", title.bold().underline());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    eprintln!("{}: {}", key.bold(), value);
}

/// Print a bullet point
pub fn bullet(message: &str) {
    eprintln!("  • {}", message);
}

/// One line per strategy, numbered for selection
pub fn strategy_lines(options: &[StrategyOption]) -> Vec<String> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("[{}] {}", i, option))
        .collect()
}

/// Render the full plan awaiting confirmation
pub fn preview(preview: &Preview) {
    header(&format!("Subnet layout for {}", preview.vpc));
    kv("Subnet mask", &preview.block_plan.mask());
    kv("Usable IPs per subnet", &preview.usable_per_subnet.to_string());
    for tier in &preview.tiers {
        eprintln!();
        kv(&format!("{} tier", tier.tier), &format!("starts at {}", tier.start));
        for subnet in &tier.subnets {
            bullet(&subnet.to_string());
        }
    }
    eprintln!();
}
