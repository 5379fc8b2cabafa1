//! Block sizing for a chosen strategy

use serde::{Deserialize, Serialize};

/// Size of every subnet (and cushion) block in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPlan {
    /// Prefix length of each block
    pub new_prefix_length: u8,
    /// Addresses per block, `2^(32 - new_prefix_length)`
    pub block_size: u64,
    /// Addresses per block left after the platform reservation
    pub usable_per_subnet: u64,
}

impl BlockPlan {
    /// Mask in `/m` notation
    pub fn mask(&self) -> String {
        format!("/{}", self.new_prefix_length)
    }
}
