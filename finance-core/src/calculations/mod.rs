//! Crop finance calculation modules.
//!
//! This module provides the arithmetic behind the scale of finance: coercing
//! the raw text a user types into amounts, deriving each crop's cost, income
//! and profit, and summing those figures across a plan.

pub mod common;
pub mod crop_finance;

pub use common::coerce_amount;
pub use crop_finance::{CropFinanceResult, PlanTotals, aggregate, calculate, recompute};
