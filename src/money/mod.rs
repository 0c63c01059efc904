// ============================================================================
// Money Module
// Exact fixed-point money arithmetic guarded by currency
// ============================================================================
//
// This module provides:
// - Money: immutable (minor units, currency) value with checked arithmetic
// - Allocation: divide / allocate / sum with exact remainder distribution
// - MoneyBuilder: staged construction reporting missing parts
//
// Design principles:
// - Two decimal digits, stored as i64 minor units
// - Every fallible operation returns MoneyResult (no panics)
// - Operands in different currencies are rejected, never converted

mod allocation;
mod amount;
mod builder;

pub use amount::{Money, MINOR_PER_MAJOR, SCALE};
pub use builder::MoneyBuilder;
