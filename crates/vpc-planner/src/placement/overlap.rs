//! Cushion-aware overlap between placed tiers

use crate::models::TierAllocation;

/// Half-open span `[start, end)` a tier occupies, including its trailing cushion block
fn occupied_span(alloc: &TierAllocation, block_size: u64) -> (i64, i64) {
    let start = i64::from(u32::from(alloc.start));
    let len = (u64::from(alloc.subnet_count()) + 1) * block_size;
    (start, start + len as i64)
}

/// Whether two tiers, each extended by one cushion block, intersect
pub fn overlaps(a: &TierAllocation, b: &TierAllocation, block_size: u64) -> bool {
    let (a_start, a_end) = occupied_span(a, block_size);
    let (b_start, b_end) = occupied_span(b, block_size);
    a_start < b_end && b_start < a_end
}
