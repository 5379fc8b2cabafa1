//! Prefix-bit arithmetic

use tracing::debug;

use crate::models::{BlockPlan, Vpc};
use crate::{Error, PlannerConfig, Result};

/// Smallest `b` with `2^b >= effective_blocks`; zero for one block or fewer
pub fn required_bits(effective_blocks: u32) -> u8 {
    if effective_blocks <= 1 {
        return 0;
    }
    (32 - (effective_blocks - 1).leading_zeros()) as u8
}

/// Size the blocks obtained by splitting `vpc` by `required_bits`
pub fn plan_blocks(vpc: &Vpc, required_bits: u8, config: &PlannerConfig) -> Result<BlockPlan> {
    let new_prefix_length = u32::from(vpc.prefix_len()) + u32::from(required_bits);
    if new_prefix_length > u32::from(config.max_prefix_length) {
        return Err(Error::PrefixOverflow {
            vpc_prefix: vpc.prefix_len(),
            required_bits,
            max_prefix: config.max_prefix_length,
        });
    }

    let block_size = 1u64 << (32 - new_prefix_length);
    let usable = config.usable_hosts(block_size);
    if usable < u64::from(config.min_usable_hosts) {
        return Err(Error::InsufficientAddressSpace {
            prefix: new_prefix_length as u8,
            usable: usable as u32,
            minimum: config.min_usable_hosts,
        });
    }

    debug!(
        vpc = %vpc,
        required_bits,
        new_prefix_length,
        block_size,
        "Planned block size"
    );

    Ok(BlockPlan {
        new_prefix_length: new_prefix_length as u8,
        block_size,
        usable_per_subnet: usable,
    })
}
