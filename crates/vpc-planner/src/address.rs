//! Dotted-quad conversion and address arithmetic
//!
//! All span arithmetic is done in `u64` so that a `/0` VPC (2^32 addresses)
//! and blocks ending at `255.255.255.255` never overflow.

use std::net::Ipv4Addr;

use crate::{Error, Result};

/// Parse a dotted-quad string into an address.
///
/// Accepts exactly four decimal octets in `0..=255`. Leading zeros are
/// tolerated and dropped, so `010.000.0.1` parses to `10.0.0.1`.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 4 {
        return Err(Error::format(
            input,
            format!("expected four octets, found {}", parts.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(&parts) {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::format(input, format!("'{}' is not a decimal octet", part)));
        }
        let value: u16 = part
            .parse()
            .map_err(|_| Error::format(input, format!("'{}' is not a decimal octet", part)))?;
        *slot = u8::try_from(value)
            .map_err(|_| Error::format(input, format!("octet {} is out of range 0-255", value)))?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Convert a dotted-quad string to its 32-bit value
pub fn ip_to_int(input: &str) -> Result<u32> {
    parse_ipv4(input).map(u32::from)
}

/// Convert a 32-bit value to an address
pub fn int_to_ip(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value)
}

/// Canonical dotted-quad form of a well-formed address string
pub fn normalize(input: &str) -> Result<String> {
    parse_ipv4(input).map(|ip| ip.to_string())
}

/// Address at `offset` past `base`, if it is still a valid IPv4 address
pub fn offset_addr(base: Ipv4Addr, offset: u64) -> Option<Ipv4Addr> {
    let value = u64::from(u32::from(base)).checked_add(offset)?;
    u32::try_from(value).ok().map(Ipv4Addr::from)
}

/// Distance from `base` to `addr`, negative when `addr` precedes `base`
pub fn distance(base: Ipv4Addr, addr: Ipv4Addr) -> i64 {
    i64::from(u32::from(addr)) - i64::from(u32::from(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_to_int() {
        assert_eq!(ip_to_int("0.0.0.0").unwrap(), 0);
        assert_eq!(ip_to_int("10.0.0.1").unwrap(), 0x0A00_0001);
        assert_eq!(ip_to_int("255.255.255.255").unwrap(), u32::MAX);
    }

    #[test]
    fn test_int_to_ip() {
        assert_eq!(int_to_ip(0x0A00_8000).to_string(), "10.0.128.0");
        assert_eq!(int_to_ip(u32::MAX).to_string(), "255.255.255.255");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["10.0.0", "10.0.0.0.0", "10.0.0.256", "10..0.1", "a.b.c.d", "10.0.0.-1", "", "1234.0.0.1"] {
            let result = ip_to_int(bad);
            assert!(matches!(result, Err(Error::Format { .. })), "{} should fail", bad);
        }
    }

    #[test]
    fn test_normalize_strips_leading_zeros() {
        assert_eq!(normalize("010.000.0.01").unwrap(), "10.0.0.1");
        assert_eq!(normalize(" 192.168.1.1 ").unwrap(), "192.168.1.1");
    }

    #[test]
    fn test_offset_addr_bounds() {
        let base = Ipv4Addr::new(255, 255, 255, 0);
        assert_eq!(offset_addr(base, 255), Some(Ipv4Addr::new(255, 255, 255, 255)));
        assert_eq!(offset_addr(base, 256), None);
    }

    #[test]
    fn test_distance() {
        let base = Ipv4Addr::new(10, 0, 0, 0);
        assert_eq!(distance(base, Ipv4Addr::new(10, 0, 1, 0)), 256);
        assert_eq!(distance(base, Ipv4Addr::new(9, 255, 255, 255)), -1);
    }
}
