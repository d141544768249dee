//! Crop-wise finance calculations.
//!
//! Each crop entry in a plan carries its raw cost, yield and price inputs.
//! This module derives the entry's figures and sums them across a plan:
//!
//! | Figure            | Formula                                            |
//! |-------------------|----------------------------------------------------|
//! | Total cost        | seed + fertilizer + pesticide + labor + irrigation + machinery rent + other |
//! | Expected income   | expected yield × market rate                       |
//! | Net profit        | expected income − total cost                       |
//!
//! Every input is coerced with [`coerce_amount`], so empty or non-numeric
//! text counts as zero and no calculation ever fails.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use finance_core::{CropEntry, CropField, aggregate, recompute};
//!
//! let mut entry = CropEntry::new();
//! entry.set_field(CropField::SeedCost, "1000");
//! entry.set_field(CropField::LaborCost, "3000");
//! entry.set_field(CropField::ExpectedYield, "20");
//! entry.set_field(CropField::MarketRate, "250");
//!
//! let entry = recompute(entry);
//! assert_eq!(entry.total_cost(), dec!(4000));
//! assert_eq!(entry.expected_income(), dec!(5000));
//! assert_eq!(entry.net_profit(), dec!(1000));
//!
//! let totals = aggregate(&[entry]);
//! assert_eq!(totals.total_profit, dec!(1000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::coerce_amount;
use crate::models::{CropEntry, CropField};

/// Derived figures for a single crop entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropFinanceResult {
    /// Sum of the seven cost components.
    pub total_cost: Decimal,

    /// Expected yield multiplied by the market rate.
    pub expected_income: Decimal,

    /// Expected income minus total cost. Negative for a planned loss.
    pub net_profit: Decimal,
}

/// Portfolio-level figures summed across every entry of a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTotals {
    /// Total investment required.
    pub total_cost: Decimal,

    /// Expected total income.
    pub total_income: Decimal,

    /// Net profit or loss.
    pub total_profit: Decimal,
}

impl PlanTotals {
    /// Adds one entry's figures to the running totals.
    fn add(
        self,
        result: CropFinanceResult,
    ) -> Self {
        Self {
            total_cost: self.total_cost.saturating_add(result.total_cost),
            total_income: self.total_income.saturating_add(result.expected_income),
            total_profit: self.total_profit.saturating_add(result.net_profit),
        }
    }
}

/// Calculates an entry's figures from its current raw inputs.
///
/// Arithmetic saturates at the bounds of [`Decimal`] instead of overflowing.
pub fn calculate(entry: &CropEntry) -> CropFinanceResult {
    let total_cost = CropField::COSTS
        .iter()
        .map(|field| coerce_amount(entry.field(*field)))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let expected_yield = coerce_amount(entry.field(CropField::ExpectedYield));
    let market_rate = coerce_amount(entry.field(CropField::MarketRate));
    let expected_income = expected_yield.saturating_mul(market_rate);

    CropFinanceResult {
        total_cost,
        expected_income,
        net_profit: expected_income.saturating_sub(total_cost),
    }
}

/// Returns the entry with its derived figures recomputed from its inputs.
///
/// All other fields, including the raw text inputs and the id, pass through
/// unchanged.
pub fn recompute(mut entry: CropEntry) -> CropEntry {
    entry.refresh();
    entry
}

/// Sums the figures of every entry, starting from all-zero totals.
///
/// An empty sequence yields [`PlanTotals::default`].
pub fn aggregate<'a, I>(entries: I) -> PlanTotals
where
    I: IntoIterator<Item = &'a CropEntry>,
{
    entries
        .into_iter()
        .map(CropEntry::result)
        .fold(PlanTotals::default(), PlanTotals::add)
}
