//! The address block being planned

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

use crate::address::parse_ipv4;
use crate::{Error, PlannerConfig, Result};

/// A VPC address block, `base/prefix_len`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vpc {
    net: Ipv4Net,
}

impl Vpc {
    /// Wrap a network whose address is the first of its block
    pub fn new(net: Ipv4Net) -> Result<Self> {
        if net.addr() != net.network() {
            return Err(Error::format(
                net.to_string(),
                format!("host bits set; did you mean {}?", net.trunc()),
            ));
        }
        Ok(Self { net })
    }

    /// Parse `a.b.c.d/n` and reject masks too small to subdivide.
    ///
    /// The mask check runs before any planning so callers never see a
    /// strategy list for an unusable VPC.
    pub fn parse(input: &str, config: &PlannerConfig) -> Result<Self> {
        let (addr, prefix) = input
            .trim()
            .split_once('/')
            .ok_or_else(|| Error::format(input, "expected a.b.c.d/n"))?;

        let addr = parse_ipv4(addr)?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| Error::format(input, format!("'{}' is not a prefix length", prefix)))?;
        let net = Ipv4Net::new(addr, prefix)
            .map_err(|_| Error::format(input, format!("prefix /{} exceeds /32", prefix)))?;

        if prefix >= config.min_vpc_prefix_rejected {
            return Err(Error::MaskTooSmall {
                prefix,
                limit: config.min_vpc_prefix_rejected,
            });
        }

        Self::new(net)
    }

    pub fn net(&self) -> Ipv4Net {
        self.net
    }

    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    /// First address of the block
    pub fn base(&self) -> Ipv4Addr {
        self.net.network()
    }

    /// Last address of the block
    pub fn last_address(&self) -> Ipv4Addr {
        self.net.broadcast()
    }

    pub fn total_addresses(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix_len()))
    }

    /// Whether `[start, start + len)` lies inside the block
    pub fn contains_span(&self, start: Ipv4Addr, len: u64) -> bool {
        let first = u64::from(u32::from(self.base()));
        let last = u64::from(u32::from(self.last_address()));
        let start = u64::from(u32::from(start));
        len > 0 && start >= first && start + len - 1 <= last
    }
}

impl fmt::Display for Vpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.net, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    #[test]
    fn test_parse_vpc() {
        let vpc = Vpc::parse("10.0.0.0/16", &config()).unwrap();
        assert_eq!(vpc.base(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(vpc.last_address(), Ipv4Addr::new(10, 0, 255, 255));
        assert_eq!(vpc.total_addresses(), 65536);
        assert_eq!(vpc.to_string(), "10.0.0.0/16");
    }

    #[test]
    fn test_mask_too_small() {
        for input in ["10.0.0.0/27", "10.0.0.0/28", "10.0.0.1/32"] {
            assert!(matches!(
                Vpc::parse(input, &config()),
                Err(Error::MaskTooSmall { limit: 27, .. })
            ));
        }
    }

    #[test]
    fn test_malformed_cidr() {
        for input in ["10.0.0.0", "10.0.0/16", "10.0.0.0/x", "10.0.0.0/33"] {
            assert!(matches!(Vpc::parse(input, &config()), Err(Error::Format { .. })), "{}", input);
        }
    }

    #[test]
    fn test_host_bits_rejected_with_hint() {
        let err = Vpc::parse("10.0.5.0/16", &config()).unwrap_err();
        assert!(err.to_string().contains("10.0.0.0/16"));
    }

    #[test]
    fn test_whole_space() {
        let vpc = Vpc::parse("0.0.0.0/0", &config()).unwrap();
        assert_eq!(vpc.total_addresses(), 1u64 << 32);
        assert!(vpc.contains_span(Ipv4Addr::new(255, 255, 255, 0), 256));
    }

    #[test]
    fn test_contains_span() {
        let vpc = Vpc::parse("10.0.0.0/24", &config()).unwrap();
        assert!(vpc.contains_span(Ipv4Addr::new(10, 0, 0, 192), 64));
        assert!(!vpc.contains_span(Ipv4Addr::new(10, 0, 0, 193), 64));
        assert!(!vpc.contains_span(Ipv4Addr::new(9, 255, 255, 255), 1));
    }
}
