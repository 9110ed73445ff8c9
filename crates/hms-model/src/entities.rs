//! The five record types held by the store.
//!
//! Field names and their serialized spellings match the durable slot
//! format exactly (camelCase keys, "type" for the enum discriminants).
//! Cross-reference fields hold raw ids; nothing here enforces that the
//! referenced record exists. Deleting a hospital leaves dependent records
//! dangling, which the view layer renders as a "not found" placeholder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{CabinType, Gender, RecordType};
use crate::ids::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: EntityId,
    pub name: String,
    pub specialization: String,
    pub phone: String,
    pub schedule: String,
    pub hospital_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: EntityId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    pub admission_date: NaiveDate,
    /// Free-text treatment notes written by the attending doctor.
    pub treatment: String,
    pub hospital_id: EntityId,
    pub doctor_id: EntityId,
    pub cabin_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabin {
    pub id: EntityId,
    pub cabin_number: String,
    #[serde(rename = "type")]
    pub kind: CabinType,
    pub is_occupied: bool,
    pub hospital_id: EntityId,
}

/// A single income or expense entry.
///
/// Financial records are immutable once created: the store supports add
/// and delete for them, never update-in-place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub hospital_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospital_uses_camel_case_keys() {
        let hospital = Hospital {
            id: EntityId::new("h1").unwrap(),
            name: "Dhaka Central Hospital".to_string(),
            address: "Dhanmondi, Dhaka".to_string(),
            phone: "01712345678".to_string(),
        };
        let json = serde_json::to_value(&hospital).unwrap();
        assert_eq!(json["name"], "Dhaka Central Hospital");
        assert_eq!(json["address"], "Dhanmondi, Dhaka");
    }

    #[test]
    fn cabin_discriminant_serializes_as_type() {
        let cabin = Cabin {
            id: EntityId::new("c1").unwrap(),
            cabin_number: "ICU-1".to_string(),
            kind: CabinType::Icu,
            is_occupied: true,
            hospital_id: EntityId::new("h1").unwrap(),
        };
        let json = serde_json::to_value(&cabin).unwrap();
        assert_eq!(json["type"], "ICU");
        assert_eq!(json["isOccupied"], true);
        assert_eq!(json["cabinNumber"], "ICU-1");
        assert_eq!(json["hospitalId"], "h1");
    }

    #[test]
    fn patient_date_and_null_cabin_round_trip() {
        let patient = Patient {
            id: EntityId::new("p1").unwrap(),
            name: "Jamal Uddin".to_string(),
            age: 55,
            gender: Gender::Male,
            phone: "017xxxxxxx1".to_string(),
            address: "Mirpur, Dhaka".to_string(),
            admission_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            treatment: "Observation".to_string(),
            hospital_id: EntityId::new("h1").unwrap(),
            doctor_id: EntityId::new("d1").unwrap(),
            cabin_id: None,
        };
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["admissionDate"], "2023-10-01");
        assert!(json["cabinId"].is_null());
        let back: Patient = serde_json::from_value(json).unwrap();
        assert_eq!(back, patient);
    }
}
