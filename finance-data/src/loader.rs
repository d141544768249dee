//! CSV loader for crop-wise finance input.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so order does not matter, and every
//! column is optional. Whitespace around values is trimmed.
//!
//! | Column            | Type    | Notes                                       |
//! |-------------------|---------|---------------------------------------------|
//! | `crop_name`       | string  | Catalog crop (case-insensitive) or empty    |
//! | `season`          | string  | `Kharif`, `Rabi`, `Summer`, `Perennial` or empty |
//! | `acreage`         | decimal |                                             |
//! | `seed_cost`       | decimal |                                             |
//! | `fertilizer_cost` | decimal |                                             |
//! | `pesticide_cost`  | decimal |                                             |
//! | `labor_cost`      | decimal |                                             |
//! | `irrigation_cost` | decimal |                                             |
//! | `machinery_rent`  | decimal |                                             |
//! | `other_costs`     | decimal |                                             |
//! | `expected_yield`  | decimal | Quintals                                    |
//! | `market_rate`     | decimal | Per quintal                                 |
//!
//! Numeric cells are kept as text and coerced by the calculator, so an empty
//! or malformed cell counts as zero rather than failing the load.
//!
//! ### Example
//!
//! ```csv
//! crop_name,season,acreage,seed_cost,labor_cost,expected_yield,market_rate
//! Groundnut,Kharif,2.5,1000,2000,20,250
//! Onion,Rabi,1,1500,2500,10,300
//! ```

use std::io::Read;

use finance_core::{CropEntry, CropField, CropName, FinancePlan, Season};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading crop rows.
#[derive(Debug, Error)]
pub enum CropCsvError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, not counting the header.
    #[error("unrecognised crop '{name}' on row {row}")]
    InvalidCropName { name: String, row: usize },

    #[error("unrecognised season '{season}' on row {row}")]
    InvalidSeason { season: String, row: usize },
}

// Mirrors the CSV layout exactly; absent columns read as empty text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    crop_name: String,
    season: String,
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
}

/// One crop row, ready to be applied to a plan entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropRecord {
    pub crop_name: Option<CropName>,
    pub season: Option<Season>,
    /// Raw text for every field, in [`CropField::ALL`] order.
    pub values: Vec<(CropField, String)>,
}

impl CropRecord {
    /// Raw text for `field`, or `""` if the record has none.
    pub fn value(
        &self,
        field: CropField,
    ) -> &str {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, value)| value.as_str())
    }
}

/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CropRecord, CropCsvError> {
    let crop_name = match row.crop_name.as_str() {
        "" => None,
        name => Some(CropName::parse(name).ok_or_else(|| CropCsvError::InvalidCropName {
            name: name.to_string(),
            row: row_number,
        })?),
    };
    let season = match row.season.as_str() {
        "" => None,
        season => Some(Season::parse(season).ok_or_else(|| CropCsvError::InvalidSeason {
            season: season.to_string(),
            row: row_number,
        })?),
    };

    let values = vec![
        (CropField::Acreage, row.acreage),
        (CropField::SeedCost, row.seed_cost),
        (CropField::FertilizerCost, row.fertilizer_cost),
        (CropField::PesticideCost, row.pesticide_cost),
        (CropField::LaborCost, row.labor_cost),
        (CropField::IrrigationCost, row.irrigation_cost),
        (CropField::MachineryRent, row.machinery_rent),
        (CropField::OtherCosts, row.other_costs),
        (CropField::ExpectedYield, row.expected_yield),
        (CropField::MarketRate, row.market_rate),
    ];

    Ok(CropRecord {
        crop_name,
        season,
        values,
    })
}

/// Loader for crop rows from CSV into a [`FinancePlan`].
pub struct CropCsvLoader;

impl CropCsvLoader {
    /// Parse crop records from a CSV reader, in file order.
    ///
    /// # Errors
    ///
    /// * [`CropCsvError::Parse`] if the CSV is structurally invalid.
    /// * [`CropCsvError::InvalidCropName`] / [`CropCsvError::InvalidSeason`]
    ///   if a row names something outside the catalog.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CropRecord>, CropCsvError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        csv_reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = result?;
                convert_row(row, idx + 1)
            })
            .collect()
    }

    /// Writes `records` into `plan`, returning how many were applied.
    ///
    /// The first record fills the plan's first entry; each further record
    /// is written to a newly added entry.
    pub fn apply(
        plan: &mut FinancePlan,
        records: &[CropRecord],
    ) -> usize {
        for (idx, record) in records.iter().enumerate() {
            let id = match plan.entries().first().map(CropEntry::id) {
                Some(first) if idx == 0 => first,
                _ => plan.add_entry(),
            };

            plan.set_entry_crop(id, record.crop_name);
            plan.set_entry_season(id, record.season);
            for field in CropField::ALL {
                plan.set_entry_field(id, field, record.value(field));
            }
            debug!(%id, row = idx + 1, "applied crop row");
        }
        records.len()
    }

    /// Parse `reader` and build a fresh plan from its rows.
    pub fn load_plan<R: Read>(reader: R) -> Result<FinancePlan, CropCsvError> {
        let records = Self::parse(reader)?;
        let mut plan = FinancePlan::new();
        Self::apply(&mut plan, &records);
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    const TWO_CROPS_CSV: &str = "\
crop_name,season,acreage,seed_cost,fertilizer_cost,pesticide_cost,labor_cost,irrigation_cost,machinery_rent,other_costs,expected_yield,market_rate
Groundnut,Kharif,2.5,1000,500,0,2000,300,200,0,20,250
Onion,Rabi,1,1500,1200,,2500,,,800,10,300
";

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn parse_reads_rows_in_order() {
        let records = CropCsvLoader::parse(TWO_CROPS_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].crop_name, Some(CropName::Groundnut));
        assert_eq!(records[0].season, Some(Season::Kharif));
        assert_eq!(records[0].value(CropField::Acreage), "2.5");
        assert_eq!(records[1].crop_name, Some(CropName::Onion));
        assert_eq!(records[1].value(CropField::PesticideCost), "");
    }

    #[test]
    fn parse_tolerates_missing_columns_and_any_order() {
        let csv = "market_rate,expected_yield,crop_name\n300,10,rice\n";

        let records = CropCsvLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records[0].crop_name, Some(CropName::Rice));
        assert_eq!(records[0].season, None);
        assert_eq!(records[0].value(CropField::MarketRate), "300");
        assert_eq!(records[0].value(CropField::SeedCost), "");
    }

    #[test]
    fn parse_rejects_unknown_crop_with_row_number() {
        let csv = "crop_name,season\nRice,Kharif\nBarley,Rabi\n";

        let result = CropCsvLoader::parse(csv.as_bytes());

        assert!(matches!(
            result,
            Err(CropCsvError::InvalidCropName { ref name, row: 2 }) if name == "Barley"
        ));
    }

    #[test]
    fn parse_rejects_unknown_season() {
        let csv = "crop_name,season\nRice,Monsoon\n";

        let result = CropCsvLoader::parse(csv.as_bytes());

        assert!(matches!(
            result,
            Err(CropCsvError::InvalidSeason { row: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let csv = "crop_name,season\nRice,Kharif,extra\n";

        let result = CropCsvLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(CropCsvError::Parse(_))));
    }

    #[test]
    fn parse_header_only_gives_no_records() {
        let records = CropCsvLoader::parse("crop_name,season\n".as_bytes()).unwrap();

        assert!(records.is_empty());
    }

    // =========================================================================
    // apply / load_plan tests
    // =========================================================================

    #[test]
    fn load_plan_fills_first_entry_then_adds() {
        let plan = CropCsvLoader::load_plan(TWO_CROPS_CSV.as_bytes()).unwrap();

        assert_eq!(plan.entry_count(), 2);
        assert_eq!(plan.entries()[0].total_cost(), dec!(4000));
        assert_eq!(plan.entries()[0].net_profit(), dec!(1000));
        assert_eq!(plan.entries()[1].total_cost(), dec!(6000));
        assert_eq!(plan.entries()[1].net_profit(), dec!(-3000));
        assert_eq!(plan.totals().total_profit, dec!(-2000));
    }

    #[test]
    fn load_plan_coerces_malformed_amounts_to_zero() {
        let csv = "seed_cost,labor_cost\nabc,1200\n";

        let plan = CropCsvLoader::load_plan(csv.as_bytes()).unwrap();

        assert_eq!(plan.entries()[0].total_cost(), dec!(1200));
    }

    #[test]
    fn load_plan_without_rows_keeps_one_blank_entry() {
        let plan = CropCsvLoader::load_plan("crop_name\n".as_bytes()).unwrap();

        assert_eq!(plan.entry_count(), 1);
        assert_eq!(plan.totals().total_cost, Decimal::ZERO);
    }

    #[test]
    fn apply_treats_fields_missing_from_record_as_blank() {
        let record = CropRecord {
            crop_name: Some(CropName::Maize),
            season: None,
            values: vec![(CropField::MarketRate, "200".to_string())],
        };
        let mut plan = FinancePlan::new();
        let id = plan.entries()[0].id();
        plan.set_entry_field(id, CropField::SeedCost, "900");

        CropCsvLoader::apply(&mut plan, &[record]);

        let entry = &plan.entries()[0];
        assert_eq!(entry.field(CropField::SeedCost), "");
        assert_eq!(entry.field(CropField::MarketRate), "200");
        assert_eq!(entry.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn apply_returns_number_of_records() {
        let records = CropCsvLoader::parse(TWO_CROPS_CSV.as_bytes()).unwrap();
        let mut plan = FinancePlan::new();

        let applied = CropCsvLoader::apply(&mut plan, &records);

        assert_eq!(applied, 2);
    }
}
