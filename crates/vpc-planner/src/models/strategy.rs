//! Tier-count strategies

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Tier, TierSpec};

/// Canonical subnet counts per tier as `[public, private, database]`,
/// in ascending order of total subnets.
pub const CANONICAL_STRATEGIES: [[u32; 3]; 8] = [
    [1, 1, 0],
    [1, 2, 0],
    [1, 3, 0],
    [1, 2, 1],
    [2, 2, 0],
    [2, 2, 2],
    [4, 4, 0],
    [3, 3, 3],
];

/// Ordered tiers with non-zero subnet counts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strategy {
    tiers: Vec<TierSpec>,
}

impl Strategy {
    /// Build from `[public, private, database]` counts; zero-count tiers are dropped
    pub fn from_counts(counts: [u32; 3]) -> Self {
        let tiers = Tier::ALL
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(tier, count)| TierSpec::new(*tier, count))
            .collect();
        Self { tiers }
    }

    /// All canonical strategies in catalog order
    pub fn canonical() -> impl Iterator<Item = Strategy> {
        CANONICAL_STRATEGIES.into_iter().map(Self::from_counts)
    }

    pub fn tiers(&self) -> &[TierSpec] {
        &self.tiers
    }

    pub fn total_subnets(&self) -> u32 {
        self.tiers.iter().map(|t| t.subnet_count).sum()
    }

    pub fn group_count(&self) -> u32 {
        self.tiers.len() as u32
    }

    /// Subnet blocks plus one cushion between each pair of adjacent groups
    pub fn effective_blocks(&self) -> u32 {
        (self.total_subnets() + self.group_count()).saturating_sub(1)
    }

    /// Subnet count for a tier, zero when the tier is absent
    pub fn count(&self, tier: Tier) -> u32 {
        self.tiers
            .iter()
            .find(|t| t.tier == tier)
            .map(|t| t.subnet_count)
            .unwrap_or(0)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .tiers
            .iter()
            .map(|t| format!("{} {}", t.subnet_count, t.tier))
            .collect();
        f.write_str(&parts.join(" / "))
    }
}
