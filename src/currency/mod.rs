// ============================================================================
// Currency Module
// Currency records, the capability contract, and the fixed catalog
// ============================================================================
//
// This module provides:
// - Currency: immutable name/code/symbol record, equal by code
// - CurrencyUnit: capability trait any collaborator can implement
// - The common catalog as process-wide statics (EUR, USD, ...)
// - CurrencyRegistry: code -> record lookup built once

mod catalog;
mod definition;
mod registry;

pub use catalog::{ALL, BRL, CAD, CHF, DKK, EUR, GBP, NOK, SEK, USD};
pub use definition::{Currency, CurrencyUnit};
pub use registry::CurrencyRegistry;
