//! Draft types assembled field-by-field before submission.
//!
//! Forms build up a draft incrementally; only `finalize` produces the
//! finished record the store accepts. Finalization checks required fields,
//! assigns a fresh id, and never mutates existing state. Cross-reference
//! ids are taken at face value here; resolving them is the caller's
//! concern.

use chrono::NaiveDate;

use crate::entities::{Cabin, Doctor, FinancialRecord, Hospital, Patient};
use crate::enums::{CabinType, Gender, RecordType};
use crate::error::{ModelError, Result};
use crate::ids::EntityId;

fn required<T>(value: Option<T>, entity: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(ModelError::MissingField { entity, field })
}

fn required_text(value: Option<String>, entity: &'static str, field: &'static str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ModelError::MissingField { entity, field }),
    }
}

#[derive(Debug, Clone, Default)]
pub struct HospitalDraft {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl HospitalDraft {
    pub fn finalize(self) -> Result<Hospital> {
        Ok(Hospital {
            id: EntityId::generate(),
            name: required_text(self.name, "hospital", "name")?,
            address: required_text(self.address, "hospital", "address")?,
            phone: required_text(self.phone, "hospital", "phone")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoctorDraft {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub phone: Option<String>,
    pub schedule: Option<String>,
    pub hospital_id: Option<EntityId>,
}

impl DoctorDraft {
    pub fn finalize(self) -> Result<Doctor> {
        Ok(Doctor {
            id: EntityId::generate(),
            name: required_text(self.name, "doctor", "name")?,
            specialization: required_text(self.specialization, "doctor", "specialization")?,
            phone: required_text(self.phone, "doctor", "phone")?,
            schedule: required_text(self.schedule, "doctor", "schedule")?,
            hospital_id: required(self.hospital_id, "doctor", "hospitalId")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatientDraft {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub treatment: Option<String>,
    pub hospital_id: Option<EntityId>,
    pub doctor_id: Option<EntityId>,
    /// Optional: a patient may be admitted without a cabin assignment.
    pub cabin_id: Option<EntityId>,
}

impl PatientDraft {
    pub fn finalize(self) -> Result<Patient> {
        Ok(Patient {
            id: EntityId::generate(),
            name: required_text(self.name, "patient", "name")?,
            age: required(self.age, "patient", "age")?,
            gender: required(self.gender, "patient", "gender")?,
            phone: required_text(self.phone, "patient", "phone")?,
            address: required_text(self.address, "patient", "address")?,
            admission_date: required(self.admission_date, "patient", "admissionDate")?,
            treatment: required_text(self.treatment, "patient", "treatment")?,
            hospital_id: required(self.hospital_id, "patient", "hospitalId")?,
            doctor_id: required(self.doctor_id, "patient", "doctorId")?,
            cabin_id: self.cabin_id,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CabinDraft {
    pub cabin_number: Option<String>,
    pub kind: Option<CabinType>,
    pub is_occupied: Option<bool>,
    pub hospital_id: Option<EntityId>,
}

impl CabinDraft {
    pub fn finalize(self) -> Result<Cabin> {
        Ok(Cabin {
            id: EntityId::generate(),
            cabin_number: required_text(self.cabin_number, "cabin", "cabinNumber")?,
            kind: required(self.kind, "cabin", "type")?,
            // New cabins default to vacant unless the form says otherwise.
            is_occupied: self.is_occupied.unwrap_or(false),
            hospital_id: required(self.hospital_id, "cabin", "hospitalId")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FinancialRecordDraft {
    pub kind: Option<RecordType>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub hospital_id: Option<EntityId>,
}

impl FinancialRecordDraft {
    pub fn finalize(self) -> Result<FinancialRecord> {
        let amount = required(self.amount, "financial record", "amount")?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ModelError::InvalidAmount(amount));
        }
        Ok(FinancialRecord {
            id: EntityId::generate(),
            kind: required(self.kind, "financial record", "type")?,
            description: required_text(self.description, "financial record", "description")?,
            amount,
            date: required(self.date, "financial record", "date")?,
            hospital_id: required(self.hospital_id, "financial record", "hospitalId")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospital_draft_finalizes_with_fresh_id() {
        let draft = HospitalDraft {
            name: Some("Dhaka Central Hospital".to_string()),
            address: Some("Dhanmondi, Dhaka".to_string()),
            phone: Some("01712345678".to_string()),
        };
        let a = draft.clone().finalize().unwrap();
        let b = draft.finalize().unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let draft = HospitalDraft {
            name: Some("Clinic".to_string()),
            address: None,
            phone: Some("123".to_string()),
        };
        assert_eq!(
            draft.finalize().unwrap_err(),
            ModelError::MissingField {
                entity: "hospital",
                field: "address"
            }
        );
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let draft = HospitalDraft {
            name: Some("  ".to_string()),
            address: Some("Somewhere".to_string()),
            phone: Some("123".to_string()),
        };
        assert!(matches!(
            draft.finalize(),
            Err(ModelError::MissingField { field: "name", .. })
        ));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let draft = FinancialRecordDraft {
            kind: Some(RecordType::Expense),
            description: Some("Refund gone wrong".to_string()),
            amount: Some(-10.0),
            date: NaiveDate::from_ymd_opt(2023, 10, 1),
            hospital_id: EntityId::new("h1").ok(),
        };
        assert_eq!(draft.finalize().unwrap_err(), ModelError::InvalidAmount(-10.0));
    }

    #[test]
    fn cabin_occupancy_defaults_to_vacant() {
        let draft = CabinDraft {
            cabin_number: Some("C-101".to_string()),
            kind: Some(CabinType::Private),
            is_occupied: None,
            hospital_id: EntityId::new("h1").ok(),
        };
        assert!(!draft.finalize().unwrap().is_occupied);
    }
}
