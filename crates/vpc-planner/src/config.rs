//! Planner tunables
//!
//! Defaults reproduce the platform limits: blocks no smaller than /27, at
//! least 20 usable hosts per block, and 5 addresses reserved per block.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Limits applied while sizing and validating a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Deepest prefix a planned block may have
    pub max_prefix_length: u8,
    /// Minimum usable hosts per block after the reservation
    pub min_usable_hosts: u32,
    /// Addresses the platform reserves in every block
    pub reserved_per_block: u32,
    /// VPC prefixes at or beyond this are rejected before planning
    pub min_vpc_prefix_rejected: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_prefix_length: 27,
            min_usable_hosts: 20,
            reserved_per_block: 5,
            min_vpc_prefix_rejected: 27,
        }
    }
}

impl PlannerConfig {
    /// Smallest block size the ceiling allows
    pub fn smallest_block(&self) -> u64 {
        1u64 << (32 - u32::from(self.max_prefix_length.min(32)))
    }

    /// Usable hosts in a block of `block_size` addresses
    pub fn usable_hosts(&self, block_size: u64) -> u64 {
        block_size.saturating_sub(u64::from(self.reserved_per_block))
    }

    /// Reject values no plan could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.max_prefix_length > 32 {
            return Err(Error::Config(format!(
                "max_prefix_length /{} is beyond /32",
                self.max_prefix_length
            )));
        }
        if self.min_vpc_prefix_rejected > 32 {
            return Err(Error::Config(format!(
                "min_vpc_prefix_rejected /{} is beyond /32",
                self.min_vpc_prefix_rejected
            )));
        }
        if u64::from(self.reserved_per_block) >= self.smallest_block() {
            return Err(Error::Config(format!(
                "reserved_per_block {} consumes a whole /{} block",
                self.reserved_per_block, self.max_prefix_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_prefix_length, 27);
        assert_eq!(config.smallest_block(), 32);
        assert_eq!(config.usable_hosts(64), 59);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_reservation_larger_than_block() {
        let config = PlannerConfig {
            reserved_per_block: 32,
            ..PlannerConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_ceiling_beyond_32() {
        let config = PlannerConfig {
            max_prefix_length: 33,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"min_usable_hosts": 50}"#).unwrap();
        assert_eq!(config.min_usable_hosts, 50);
        assert_eq!(config.reserved_per_block, 5);
    }
}
