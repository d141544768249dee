//! Plain-text scale of finance report.

use std::fmt;

use finance_core::calculations::common::coerce_amount;
use finance_core::{CropEntry, CropField, FinancePlan};
use rust_decimal::Decimal;

use crate::config::ReportConfig;
use crate::format::format_amount;

fn field_label(field: CropField) -> &'static str {
    match field {
        CropField::Acreage => "Acreage",
        CropField::SeedCost => "Seed Cost",
        CropField::FertilizerCost => "Fertilizer Cost",
        CropField::PesticideCost => "Pesticide Cost",
        CropField::LaborCost => "Labor Cost",
        CropField::IrrigationCost => "Irrigation Cost",
        CropField::MachineryRent => "Machinery Rent",
        CropField::OtherCosts => "Other Costs",
        CropField::ExpectedYield => "Expected Yield (Qtl)",
        CropField::MarketRate => "Market Rate (per Qtl)",
    }
}

fn or_dash(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() { "—" } else { value }
}

/// Renders a plan as a text report.
///
/// Member information first, then one block per crop with its cost
/// breakdown and figures, then the financial summary.
pub struct PlanReport<'a> {
    plan: &'a FinancePlan,
    config: &'a ReportConfig,
}

impl<'a> PlanReport<'a> {
    pub fn new(
        plan: &'a FinancePlan,
        config: &'a ReportConfig,
    ) -> Self {
        Self { plan, config }
    }

    fn amount(
        &self,
        value: Decimal,
    ) -> String {
        format_amount(value, self.config)
    }

    fn write_crop(
        &self,
        f: &mut fmt::Formatter<'_>,
        number: usize,
        entry: &CropEntry,
    ) -> fmt::Result {
        let crop = entry.crop_name().map_or("Not selected", |c| c.as_str());
        let season = entry.season().map_or("—", |s| s.as_str());
        writeln!(f, "Crop {number}: {crop}")?;
        writeln!(f, "  {:<24}{season}", "Season")?;
        writeln!(
            f,
            "  {:<24}{}",
            field_label(CropField::Acreage),
            or_dash(entry.field(CropField::Acreage))
        )?;
        for field in CropField::COSTS {
            writeln!(
                f,
                "  {:<24}{}",
                field_label(field),
                self.amount(coerce_amount(entry.field(field)))
            )?;
        }
        writeln!(
            f,
            "  {:<24}{}",
            field_label(CropField::ExpectedYield),
            or_dash(entry.field(CropField::ExpectedYield))
        )?;
        writeln!(
            f,
            "  {:<24}{}",
            field_label(CropField::MarketRate),
            self.amount(coerce_amount(entry.field(CropField::MarketRate)))
        )?;
        writeln!(f, "  {:<24}{}", "Total Cost", self.amount(entry.total_cost()))?;
        writeln!(
            f,
            "  {:<24}{}",
            "Expected Income",
            self.amount(entry.expected_income())
        )?;
        writeln!(f, "  {:<24}{}", "Net Profit", self.amount(entry.net_profit()))
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let plan = self.plan;

        writeln!(f, "Scale of Finance")?;
        writeln!(f, "================")?;
        writeln!(f)?;

        writeln!(f, "Member Information")?;
        writeln!(f, "  {:<24}{}", "Member Number", or_dash(&plan.member_number))?;
        writeln!(f, "  {:<24}{}", "Member Name", or_dash(&plan.member_name))?;
        writeln!(f, "  {:<24}{}", "Village", or_dash(&plan.village))?;
        writeln!(
            f,
            "  {:<24}{}",
            "Total Land Area (Acres)",
            or_dash(&plan.total_land_area)
        )?;
        writeln!(f)?;

        writeln!(f, "Crop-wise Finance Calculation")?;
        for (idx, entry) in plan.entries().iter().enumerate() {
            self.write_crop(f, idx + 1, entry)?;
            writeln!(f)?;
        }

        let totals = plan.totals();
        writeln!(f, "Financial Summary")?;
        writeln!(
            f,
            "  {:<28}{}",
            "Total Investment Required",
            self.amount(totals.total_cost)
        )?;
        writeln!(
            f,
            "  {:<28}{}",
            "Expected Total Income",
            self.amount(totals.total_income)
        )?;
        writeln!(
            f,
            "  {:<28}{}",
            "Net Profit/Loss",
            self.amount(totals.total_profit)
        )
    }
}

/// Renders `plan` with `config` into a string.
pub fn render_report(
    plan: &FinancePlan,
    config: &ReportConfig,
) -> String {
    PlanReport::new(plan, config).to_string()
}
