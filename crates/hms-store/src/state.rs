//! Application state: the five record collections.
//!
//! `AppState` is the root of all state. It is an immutable snapshot from
//! the reducer's point of view; every transition produces a new value.
//! Collections preserve insertion order, and the whole snapshot is the
//! unit of persistence.

use serde::{Deserialize, Serialize};

use hms_model::{Cabin, Doctor, EntityId, FinancialRecord, Hospital, Patient, RecordType};

/// Top-level application state.
///
/// Serialized keys are pinned to the durable slot format: `hospitals`,
/// `doctors`, `patients`, `cabins`, `financialRecords`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub hospitals: Vec<Hospital>,
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub cabins: Vec<Cabin>,
    pub financial_records: Vec<FinancialRecord>,
}

impl AppState {
    /// Look up a hospital by id. Returns `None` for dangling references.
    pub fn hospital(&self, id: &EntityId) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| &h.id == id)
    }

    pub fn doctor(&self, id: &EntityId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| &d.id == id)
    }

    pub fn patient(&self, id: &EntityId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    pub fn cabin(&self, id: &EntityId) -> Option<&Cabin> {
        self.cabins.iter().find(|c| &c.id == id)
    }

    /// Number of cabins currently marked occupied.
    pub fn occupied_cabin_count(&self) -> usize {
        self.cabins.iter().filter(|c| c.is_occupied).count()
    }

    pub fn total_income(&self) -> f64 {
        self.sum_records(RecordType::Income)
    }

    pub fn total_expense(&self) -> f64 {
        self.sum_records(RecordType::Expense)
    }

    fn sum_records(&self, kind: RecordType) -> f64 {
        self.financial_records
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::generate_initial_state;

    #[test]
    fn empty_state_has_five_empty_collections() {
        let state = AppState::default();
        assert!(state.hospitals.is_empty());
        assert!(state.doctors.is_empty());
        assert!(state.patients.is_empty());
        assert!(state.cabins.is_empty());
        assert!(state.financial_records.is_empty());
    }

    #[test]
    fn serialized_document_uses_the_five_named_arrays() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["cabins", "doctors", "financialRecords", "hospitals", "patients"]
        );
    }

    #[test]
    fn serde_round_trip_is_lossless() {
        let state = generate_initial_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn finance_totals_split_by_kind() {
        let state = generate_initial_state();
        let income = state.total_income();
        let expense = state.total_expense();
        assert!(income > 0.0);
        assert!(expense > 0.0);
        let all: f64 = state.financial_records.iter().map(|r| r.amount).sum();
        assert!((income + expense - all).abs() < f64::EPSILON * all);
    }
}
