//! Block sizing and strategy enumeration
//!
//! - [`required_bits`] / [`plan_blocks`] size the blocks for a block count
//! - [`StrategyCatalog`] filters the canonical strategies that fit a VPC

mod bits;
mod catalog;

pub use bits::{plan_blocks, required_bits};
pub use catalog::{StrategyCatalog, StrategyOption};
