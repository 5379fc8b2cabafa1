//! Candidate start validation for a tier

use std::net::Ipv4Addr;

use crate::address::{distance, offset_addr};
use crate::models::{BlockPlan, Vpc};
use crate::{Error, Result};

/// Check that a tier of `subnet_count` blocks can start at `candidate`.
///
/// Checks run in order and stop at the first failure:
/// 1. the candidate lies inside the VPC (`OutOfRange`)
/// 2. its offset from the VPC base is a whole number of blocks (`Misaligned`)
/// 3. the tier's blocks end at or before the VPC's last address (`InsufficientSpace`)
pub fn validate_start(
    candidate: Ipv4Addr,
    vpc: &Vpc,
    plan: &BlockPlan,
    subnet_count: u32,
) -> Result<()> {
    let offset = distance(vpc.base(), candidate);
    if offset < 0 || candidate > vpc.last_address() {
        return Err(Error::OutOfRange {
            candidate,
            first: vpc.base(),
            last: vpc.last_address(),
        });
    }

    let offset = offset as u64;
    let span = u64::from(subnet_count) * plan.block_size;

    let remainder = offset % plan.block_size;
    if remainder != 0 {
        let below_offset = offset - remainder;
        let above_offset = below_offset + plan.block_size;
        let below = offset_addr(vpc.base(), below_offset);
        let above = offset_addr(vpc.base(), above_offset)
            .filter(|addr| vpc.contains_span(*addr, span.max(plan.block_size)));
        return Err(Error::Misaligned {
            candidate,
            prefix: plan.new_prefix_length,
            below,
            above,
        });
    }

    if !vpc.contains_span(candidate, span.max(1)) {
        return Err(Error::InsufficientSpace {
            candidate,
            required: span,
            last: vpc.last_address(),
        });
    }

    Ok(())
}
