use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::calculations::crop_finance::{PlanTotals, aggregate};
use crate::models::{CropEntry, CropField, CropName, Season};

/// Reasons a plan cannot be saved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanValidationError {
    #[error("member number is required")]
    MissingMemberNumber,

    #[error("member name is required")]
    MissingMemberName,
}

/// A member's land-finance plan: member details plus one or more crop entries.
///
/// The plan owns its entries exclusively and always holds at least one.
/// Totals are not stored; [`FinancePlan::totals`] aggregates the entries on
/// every call so they can never go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancePlan {
    pub member_number: String,
    pub member_name: String,
    pub village: String,
    /// Total land area in acres, as entered.
    pub total_land_area: String,
    entries: Vec<CropEntry>,
}

impl FinancePlan {
    /// Creates an empty plan holding a single blank entry.
    pub fn new() -> Self {
        Self {
            member_number: String::new(),
            member_name: String::new(),
            village: String::new(),
            total_land_area: String::new(),
            entries: vec![CropEntry::new()],
        }
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> &[CropEntry] {
        &self.entries
    }

    pub fn entry(
        &self,
        id: Uuid,
    ) -> Option<&CropEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Mutable access to an entry. Entry setters keep derived figures current.
    pub fn entry_mut(
        &mut self,
        id: Uuid,
    ) -> Option<&mut CropEntry> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Appends a blank entry and returns its id.
    pub fn add_entry(&mut self) -> Uuid {
        let entry = CropEntry::new();
        let id = entry.id();
        self.entries.push(entry);
        debug!(%id, count = self.entries.len(), "added crop entry");
        id
    }

    /// Removes the entry with `id`.
    ///
    /// Returns `false` without changing anything when `id` is unknown or the
    /// entry is the only one left.
    pub fn remove_entry(
        &mut self,
        id: Uuid,
    ) -> bool {
        if self.entries.len() <= 1 {
            warn!(%id, "refusing to remove the last crop entry");
            return false;
        }

        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        let removed = self.entries.len() < before;
        if removed {
            debug!(%id, count = self.entries.len(), "removed crop entry");
        }
        removed
    }

    /// Sets a text field on the entry with `id`. Returns `false` if no such entry.
    pub fn set_entry_field(
        &mut self,
        id: Uuid,
        field: CropField,
        value: impl Into<String>,
    ) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.set_field(field, value);
                true
            }
            None => {
                debug!(%id, field = field.as_str(), "no crop entry to update");
                false
            }
        }
    }

    pub fn set_entry_crop(
        &mut self,
        id: Uuid,
        crop_name: Option<CropName>,
    ) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.set_crop_name(crop_name);
                true
            }
            None => false,
        }
    }

    pub fn set_entry_season(
        &mut self,
        id: Uuid,
        season: Option<Season>,
    ) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.set_season(season);
                true
            }
            None => false,
        }
    }

    /// Financial summary across all entries.
    pub fn totals(&self) -> PlanTotals {
        aggregate(&self.entries)
    }

    /// Checks the member details required before a plan can be saved.
    ///
    /// # Errors
    ///
    /// Returns [`PlanValidationError`] if the member number or member name
    /// is blank.
    pub fn validate_for_save(&self) -> Result<(), PlanValidationError> {
        if self.member_number.trim().is_empty() {
            return Err(PlanValidationError::MissingMemberNumber);
        }
        if self.member_name.trim().is_empty() {
            return Err(PlanValidationError::MissingMemberName);
        }
        Ok(())
    }
}

impl Default for FinancePlan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn named_plan() -> FinancePlan {
        FinancePlan {
            member_number: "M-1042".to_string(),
            member_name: "Lakshmi Devi".to_string(),
            ..FinancePlan::new()
        }
    }

    // =========================================================================
    // entry management tests
    // =========================================================================

    #[test]
    fn new_plan_has_one_blank_entry() {
        let plan = FinancePlan::new();

        assert_eq!(plan.entry_count(), 1);
        assert_eq!(plan.totals(), PlanTotals::default());
    }

    #[test]
    fn add_entry_appends_blank_entry() {
        let mut plan = FinancePlan::new();

        let id = plan.add_entry();

        assert_eq!(plan.entry_count(), 2);
        assert_eq!(plan.entries()[1].id(), id);
        assert_eq!(plan.entries()[1].total_cost(), Decimal::ZERO);
    }

    #[test]
    fn remove_last_entry_is_a_no_op() {
        let mut plan = FinancePlan::new();
        let id = plan.entries()[0].id();

        let removed = plan.remove_entry(id);

        assert!(!removed);
        assert_eq!(plan.entry_count(), 1);
        assert_eq!(plan.entries()[0].id(), id);
    }

    #[test]
    fn remove_entry_shrinks_two_entry_plan() {
        let mut plan = FinancePlan::new();
        let first = plan.entries()[0].id();
        let second = plan.add_entry();

        let removed = plan.remove_entry(first);

        assert!(removed);
        assert_eq!(plan.entry_count(), 1);
        assert_eq!(plan.entries()[0].id(), second);
    }

    #[test]
    fn remove_unknown_entry_changes_nothing() {
        let mut plan = FinancePlan::new();
        plan.add_entry();

        let removed = plan.remove_entry(Uuid::new_v4());

        assert!(!removed);
        assert_eq!(plan.entry_count(), 2);
    }

    #[test]
    fn remove_entry_keeps_order_of_the_rest() {
        let mut plan = FinancePlan::new();
        let first = plan.entries()[0].id();
        let second = plan.add_entry();
        let third = plan.add_entry();

        plan.remove_entry(second);

        let ids: Vec<Uuid> = plan.entries().iter().map(CropEntry::id).collect();
        assert_eq!(ids, vec![first, third]);
    }

    // =========================================================================
    // editing tests
    // =========================================================================

    #[test]
    fn set_entry_field_recomputes_entry_and_totals() {
        let mut plan = FinancePlan::new();
        let first = plan.entries()[0].id();
        let second = plan.add_entry();

        plan.set_entry_field(first, CropField::SeedCost, "4000");
        plan.set_entry_field(first, CropField::ExpectedYield, "20");
        plan.set_entry_field(first, CropField::MarketRate, "250");
        plan.set_entry_field(second, CropField::LaborCost, "6000");
        plan.set_entry_field(second, CropField::ExpectedYield, "10");
        plan.set_entry_field(second, CropField::MarketRate, "300");

        assert_eq!(plan.entry(first).map(CropEntry::net_profit), Some(dec!(1000)));
        assert_eq!(
            plan.totals(),
            PlanTotals {
                total_cost: dec!(10000),
                total_income: dec!(8000),
                total_profit: dec!(-2000),
            }
        );
    }

    #[test]
    fn set_entry_field_unknown_id_returns_false() {
        let mut plan = FinancePlan::new();

        assert!(!plan.set_entry_field(Uuid::new_v4(), CropField::SeedCost, "10"));
        assert_eq!(plan.totals(), PlanTotals::default());
    }

    #[test]
    fn removing_an_entry_drops_it_from_totals() {
        let mut plan = FinancePlan::new();
        let first = plan.entries()[0].id();
        let second = plan.add_entry();
        plan.set_entry_field(first, CropField::SeedCost, "100");
        plan.set_entry_field(second, CropField::SeedCost, "900");

        plan.remove_entry(second);

        assert_eq!(plan.totals().total_cost, dec!(100));
    }

    #[test]
    fn set_entry_crop_and_season() {
        let mut plan = FinancePlan::new();
        let id = plan.entries()[0].id();

        assert!(plan.set_entry_crop(id, Some(CropName::Rice)));
        assert!(plan.set_entry_season(id, Some(Season::Kharif)));

        let entry = plan.entry(id).expect("entry exists");
        assert_eq!(entry.crop_name(), Some(CropName::Rice));
        assert_eq!(entry.season(), Some(Season::Kharif));
    }

    // =========================================================================
    // validate_for_save tests
    // =========================================================================

    #[test]
    fn validate_accepts_member_number_and_name() {
        assert_eq!(named_plan().validate_for_save(), Ok(()));
    }

    #[test]
    fn validate_requires_member_number() {
        let plan = FinancePlan {
            member_number: "   ".to_string(),
            ..named_plan()
        };

        assert_eq!(
            plan.validate_for_save(),
            Err(PlanValidationError::MissingMemberNumber)
        );
    }

    #[test]
    fn validate_requires_member_name() {
        let plan = FinancePlan {
            member_name: String::new(),
            ..named_plan()
        };

        assert_eq!(
            plan.validate_for_save(),
            Err(PlanValidationError::MissingMemberName)
        );
    }
}
