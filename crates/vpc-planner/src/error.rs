//! Error types for VPC planning

use std::net::Ipv4Addr;
use thiserror::Error;

use crate::models::Tier;

/// Result type for planning operations
pub type Result<T> = std::result::Result<T, Error>;

/// Planning errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Input errors
    #[error("Invalid address or CIDR '{input}': {reason}")]
    Format { input: String, reason: String },

    #[error("VPC mask /{prefix} is too small to subdivide; use a prefix shorter than /{limit}")]
    MaskTooSmall { prefix: u8, limit: u8 },

    #[error("No canonical strategy fits {vpc}; plan this VPC manually")]
    NoViableStrategy { vpc: String },

    // Block planning errors
    #[error("Splitting /{vpc_prefix} by {required_bits} bits exceeds the /{max_prefix} ceiling")]
    PrefixOverflow {
        vpc_prefix: u8,
        required_bits: u8,
        max_prefix: u8,
    },

    #[error("/{prefix} blocks leave {usable} usable addresses, minimum is {minimum}")]
    InsufficientAddressSpace {
        prefix: u8,
        usable: u32,
        minimum: u32,
    },

    // Placement errors (recoverable by re-prompting the tier)
    #[error("{candidate} is outside the VPC range {first} - {last}")]
    OutOfRange {
        candidate: Ipv4Addr,
        first: Ipv4Addr,
        last: Ipv4Addr,
    },

    #[error("{candidate} is not aligned to /{prefix} blocks{}", suggestion(.below, .above))]
    Misaligned {
        candidate: Ipv4Addr,
        prefix: u8,
        below: Option<Ipv4Addr>,
        above: Option<Ipv4Addr>,
    },

    #[error("The next default start is {offset} addresses past {first}, beyond the end of the address space ({last})")]
    DefaultPastEnd {
        offset: u64,
        first: Ipv4Addr,
        last: Ipv4Addr,
    },

    #[error("{candidate} leaves no room for {required} addresses before {last}")]
    InsufficientSpace {
        candidate: Ipv4Addr,
        required: u64,
        last: Ipv4Addr,
    },

    #[error("{tier} tier at {candidate} overlaps the {other} tier (including its cushion block)")]
    Overlap {
        tier: Tier,
        candidate: Ipv4Addr,
        other: Tier,
    },

    // Session errors
    #[error("Cannot {action} while {state}")]
    InvalidTransition { action: &'static str, state: String },

    #[error("Planning aborted by operator")]
    Aborted,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a format error for the given input
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error can be resolved by supplying another candidate for the same tier
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. }
                | Error::DefaultPastEnd { .. }
                | Error::Misaligned { .. }
                | Error::InsufficientSpace { .. }
                | Error::Overlap { .. }
        )
    }
}

fn suggestion(below: &Option<Ipv4Addr>, above: &Option<Ipv4Addr>) -> String {
    match (below, above) {
        (Some(b), Some(a)) => format!("; try {} or {}", b, a),
        (Some(b), None) => format!("; try {}", b),
        (None, Some(a)) => format!("; try {}", a),
        (None, None) => String::new(),
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(e: std::net::AddrParseError) -> Self {
        Error::format("address", e.to_string())
    }
}

impl From<ipnet::AddrParseError> for Error {
    fn from(e: ipnet::AddrParseError) -> Self {
        Error::format("cidr", e.to_string())
    }
}
