use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::crop_finance::{CropFinanceResult, calculate};
use crate::models::{CropName, Season};

/// Identifies one of the free-text fields of a [`CropEntry`].
///
/// Each variant maps to a typed setter, so callers binding form controls to
/// an entry never need to address fields by string at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CropField {
    Acreage,
    SeedCost,
    FertilizerCost,
    PesticideCost,
    LaborCost,
    IrrigationCost,
    MachineryRent,
    OtherCosts,
    ExpectedYield,
    MarketRate,
}

impl CropField {
    pub const ALL: [CropField; 10] = [
        Self::Acreage,
        Self::SeedCost,
        Self::FertilizerCost,
        Self::PesticideCost,
        Self::LaborCost,
        Self::IrrigationCost,
        Self::MachineryRent,
        Self::OtherCosts,
        Self::ExpectedYield,
        Self::MarketRate,
    ];

    /// The seven cost components that add up to an entry's total cost.
    pub const COSTS: [CropField; 7] = [
        Self::SeedCost,
        Self::FertilizerCost,
        Self::PesticideCost,
        Self::LaborCost,
        Self::IrrigationCost,
        Self::MachineryRent,
        Self::OtherCosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acreage => "acreage",
            Self::SeedCost => "seedCost",
            Self::FertilizerCost => "fertilizerCost",
            Self::PesticideCost => "pesticideCost",
            Self::LaborCost => "laborCost",
            Self::IrrigationCost => "irrigationCost",
            Self::MachineryRent => "machineryRent",
            Self::OtherCosts => "otherCosts",
            Self::ExpectedYield => "expectedYield",
            Self::MarketRate => "marketRate",
        }
    }
}

/// One planned crop within a finance plan.
///
/// Inputs are kept as the raw text the user typed. The derived figures
/// (`total_cost`, `expected_income`, `net_profit`) are private and refreshed
/// by every setter, so they always match the current inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropEntry {
    id: Uuid,
    crop_name: Option<CropName>,
    season: Option<Season>,
    acreage: String,
    seed_cost: String,
    fertilizer_cost: String,
    pesticide_cost: String,
    labor_cost: String,
    irrigation_cost: String,
    machinery_rent: String,
    other_costs: String,
    expected_yield: String,
    market_rate: String,

    // Derived
    total_cost: Decimal,
    expected_income: Decimal,
    net_profit: Decimal,
}

impl CropEntry {
    /// Creates a blank entry with a fresh id. All derived figures are zero.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            crop_name: None,
            season: None,
            acreage: String::new(),
            seed_cost: String::new(),
            fertilizer_cost: String::new(),
            pesticide_cost: String::new(),
            labor_cost: String::new(),
            irrigation_cost: String::new(),
            machinery_rent: String::new(),
            other_costs: String::new(),
            expected_yield: String::new(),
            market_rate: String::new(),
            total_cost: Decimal::ZERO,
            expected_income: Decimal::ZERO,
            net_profit: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn crop_name(&self) -> Option<CropName> {
        self.crop_name
    }

    pub fn season(&self) -> Option<Season> {
        self.season
    }

    /// Raw text of a field, exactly as entered.
    pub fn field(
        &self,
        field: CropField,
    ) -> &str {
        match field {
            CropField::Acreage => &self.acreage,
            CropField::SeedCost => &self.seed_cost,
            CropField::FertilizerCost => &self.fertilizer_cost,
            CropField::PesticideCost => &self.pesticide_cost,
            CropField::LaborCost => &self.labor_cost,
            CropField::IrrigationCost => &self.irrigation_cost,
            CropField::MachineryRent => &self.machinery_rent,
            CropField::OtherCosts => &self.other_costs,
            CropField::ExpectedYield => &self.expected_yield,
            CropField::MarketRate => &self.market_rate,
        }
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    pub fn expected_income(&self) -> Decimal {
        self.expected_income
    }

    pub fn net_profit(&self) -> Decimal {
        self.net_profit
    }

    /// Derived figures as a single value.
    pub fn result(&self) -> CropFinanceResult {
        CropFinanceResult {
            total_cost: self.total_cost,
            expected_income: self.expected_income,
            net_profit: self.net_profit,
        }
    }

    /// Replaces the raw text of `field` and refreshes the derived figures.
    pub fn set_field(
        &mut self,
        field: CropField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match field {
            CropField::Acreage => self.acreage = value,
            CropField::SeedCost => self.seed_cost = value,
            CropField::FertilizerCost => self.fertilizer_cost = value,
            CropField::PesticideCost => self.pesticide_cost = value,
            CropField::LaborCost => self.labor_cost = value,
            CropField::IrrigationCost => self.irrigation_cost = value,
            CropField::MachineryRent => self.machinery_rent = value,
            CropField::OtherCosts => self.other_costs = value,
            CropField::ExpectedYield => self.expected_yield = value,
            CropField::MarketRate => self.market_rate = value,
        }
        self.refresh();
    }

    pub fn set_crop_name(
        &mut self,
        crop_name: Option<CropName>,
    ) {
        self.crop_name = crop_name;
        self.refresh();
    }

    pub fn set_season(
        &mut self,
        season: Option<Season>,
    ) {
        self.season = season;
        self.refresh();
    }

    /// Recomputes the derived figures from the current inputs.
    pub(crate) fn refresh(&mut self) {
        let result = calculate(self);
        self.total_cost = result.total_cost;
        self.expected_income = result.expected_income;
        self.net_profit = result.net_profit;
    }
}

impl Default for CropEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // CropField tests
    // =========================================================================

    #[test]
    fn crop_field_names_are_camel_case() {
        assert_eq!(CropField::MachineryRent.as_str(), "machineryRent");
        assert_eq!(CropField::Acreage.as_str(), "acreage");
    }

    #[test]
    fn crop_field_costs_exclude_yield_rate_and_acreage() {
        assert!(CropField::COSTS.contains(&CropField::SeedCost));
        assert!(CropField::COSTS.contains(&CropField::OtherCosts));
        assert!(!CropField::COSTS.contains(&CropField::Acreage));
        assert!(!CropField::COSTS.contains(&CropField::ExpectedYield));
        assert!(!CropField::COSTS.contains(&CropField::MarketRate));
    }

    // =========================================================================
    // CropEntry tests
    // =========================================================================

    #[test]
    fn new_entry_is_blank() {
        let entry = CropEntry::new();

        assert_eq!(entry.crop_name(), None);
        assert_eq!(entry.season(), None);
        for field in CropField::ALL {
            assert_eq!(entry.field(field), "");
        }
        assert_eq!(entry.result(), CropFinanceResult::default());
    }

    #[test]
    fn new_entries_get_distinct_ids() {
        assert_ne!(CropEntry::new().id(), CropEntry::new().id());
    }

    #[test]
    fn set_field_stores_raw_text() {
        let mut entry = CropEntry::new();

        entry.set_field(CropField::SeedCost, "1,000");

        assert_eq!(entry.field(CropField::SeedCost), "1,000");
        assert_eq!(entry.total_cost(), dec!(1000));
    }

    #[test]
    fn set_field_keeps_derived_figures_current() {
        let mut entry = CropEntry::new();

        entry.set_field(CropField::LaborCost, "2000");
        entry.set_field(CropField::ExpectedYield, "20");
        entry.set_field(CropField::MarketRate, "250");

        assert_eq!(entry.total_cost(), dec!(2000));
        assert_eq!(entry.expected_income(), dec!(5000));
        assert_eq!(entry.net_profit(), dec!(3000));

        entry.set_field(CropField::MarketRate, "");

        assert_eq!(entry.expected_income(), dec!(0));
        assert_eq!(entry.net_profit(), dec!(-2000));
    }

    #[test]
    fn acreage_does_not_affect_figures() {
        let mut entry = CropEntry::new();

        entry.set_field(CropField::Acreage, "4.5");

        assert_eq!(entry.field(CropField::Acreage), "4.5");
        assert_eq!(entry.result(), CropFinanceResult::default());
    }

    #[test]
    fn crop_and_season_setters_keep_id() {
        let mut entry = CropEntry::new();
        let id = entry.id();

        entry.set_crop_name(Some(CropName::Turmeric));
        entry.set_season(Some(Season::Perennial));

        assert_eq!(entry.id(), id);
        assert_eq!(entry.crop_name(), Some(CropName::Turmeric));
        assert_eq!(entry.season(), Some(Season::Perennial));
    }
}
