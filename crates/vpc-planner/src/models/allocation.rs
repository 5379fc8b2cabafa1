//! Placed tiers and the finished plan

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::{BlockPlan, Strategy, Tier, Vpc};
use crate::address::offset_addr;
use crate::{Error, Result};

/// A tier's subnets, contiguous from `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAllocation {
    pub tier: Tier,
    pub start: Ipv4Addr,
    pub subnets: Vec<Ipv4Net>,
}

impl TierAllocation {
    /// Materialize `count` consecutive blocks starting at `start`
    pub fn materialize(tier: Tier, start: Ipv4Addr, count: u32, plan: &BlockPlan) -> Result<Self> {
        let subnets = (0..u64::from(count))
            .map(|i| {
                let addr = offset_addr(start, i * plan.block_size).ok_or_else(|| {
                    Error::format(start.to_string(), "subnet runs past 255.255.255.255")
                })?;
                Ipv4Net::new(addr, plan.new_prefix_length)
                    .map_err(|e| Error::format(addr.to_string(), e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tier,
            start,
            subnets,
        })
    }

    pub fn subnet_count(&self) -> u32 {
        self.subnets.len() as u32
    }
}

/// The confirmed plan handed to provisioning collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub vpc: Vpc,
    pub strategy: Strategy,
    pub block_plan: BlockPlan,
    pub tiers: Vec<TierAllocation>,
}

impl AllocationResult {
    pub fn tier(&self, tier: Tier) -> Option<&TierAllocation> {
        self.tiers.iter().find(|t| t.tier == tier)
    }

    /// Subnets of a tier, empty when the tier is absent
    pub fn tier_cidrs(&self, tier: Tier) -> Vec<Ipv4Net> {
        self.tier(tier).map(|t| t.subnets.clone()).unwrap_or_default()
    }

    pub fn cidr_strings(&self, tier: Tier) -> Vec<String> {
        self.tier_cidrs(tier).iter().map(|c| c.to_string()).collect()
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            vpc: self.vpc.to_string(),
            total_subnets: self.tiers.iter().map(|t| t.subnet_count()).sum(),
            tiers: self
                .tiers
                .iter()
                .map(|t| TierSummary {
                    tier: t.tier,
                    count: t.subnet_count(),
                    start: t.start,
                    cidrs: t.subnets.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
            subnet_mask: self.block_plan.mask(),
            usable_ips_per_subnet: self.block_plan.usable_per_subnet,
        }
    }
}

/// Per-tier part of a [`PlanSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: Tier,
    pub count: u32,
    pub start: Ipv4Addr,
    pub cidrs: Vec<String>,
}

/// Flat record of a plan for scripting and declarative-config consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub vpc: String,
    pub total_subnets: u32,
    pub tiers: Vec<TierSummary>,
    pub subnet_mask: String,
    pub usable_ips_per_subnet: u64,
}

impl PlanSummary {
    /// Ordered key/value pairs shared by every flat rendering
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("vpc".to_string(), self.vpc.clone()),
            ("total_subnets".to_string(), self.total_subnets.to_string()),
        ];
        for tier in &self.tiers {
            fields.push((format!("{}_count", tier.tier), tier.count.to_string()));
            fields.push((format!("{}_start", tier.tier), tier.start.to_string()));
            fields.push((format!("{}_cidrs", tier.tier), tier.cidrs.join(",")));
        }
        fields.push(("subnet_mask".to_string(), self.subnet_mask.clone()));
        fields.push(("usable_ips".to_string(), self.usable_ips_per_subnet.to_string()));
        fields
    }

    /// `key:value;key:value` line for shell scripts
    pub fn to_kv_line(&self) -> String {
        self.fields()
            .into_iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// `key=value` entries for declarative config
    pub fn to_string_list(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect()
    }
}
