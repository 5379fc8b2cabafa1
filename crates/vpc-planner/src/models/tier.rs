//! Subnet tiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Named category of subnets placed as one contiguous group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Internet-facing subnets
    Public,
    /// Internal workload subnets
    Private,
    /// Data-store subnets
    Database,
}

impl Tier {
    /// All tiers in placement order
    pub const ALL: [Tier; 3] = [Tier::Public, Tier::Private, Tier::Database];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Public => "public",
            Tier::Private => "private",
            Tier::Database => "database",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" | "pub" => Ok(Tier::Public),
            "private" | "prv" => Ok(Tier::Private),
            "database" | "db" => Ok(Tier::Database),
            other => Err(Error::format(
                other,
                "expected one of public, private, database",
            )),
        }
    }
}

/// Number of subnets requested for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierSpec {
    pub tier: Tier,
    pub subnet_count: u32,
}

impl TierSpec {
    pub fn new(tier: Tier, subnet_count: u32) -> Self {
        Self { tier, subnet_count }
    }
}
