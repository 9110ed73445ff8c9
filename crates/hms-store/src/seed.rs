//! First-run fixture data.
//!
//! Used only when the durable slot is empty: two hospitals, three doctors,
//! five cabins, three patients, and six financial records, with every
//! cross-reference valid within the snapshot. Ids are freshly generated on
//! each call; the field values are illustrative fixture data, not a
//! contract the view layer depends on.

use chrono::NaiveDate;

use hms_model::{
    Cabin, CabinType, Doctor, EntityId, FinancialRecord, Gender, Hospital, Patient, RecordType,
};

use crate::state::AppState;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

/// Build the initial fixture snapshot.
pub fn generate_initial_state() -> AppState {
    let hospital1 = EntityId::generate();
    let hospital2 = EntityId::generate();

    let hospitals = vec![
        Hospital {
            id: hospital1.clone(),
            name: "Dhaka Central Hospital".to_string(),
            address: "Dhanmondi, Dhaka".to_string(),
            phone: "01712345678".to_string(),
        },
        Hospital {
            id: hospital2.clone(),
            name: "Chittagong Medical Center".to_string(),
            address: "Panchlaish, Chittagong".to_string(),
            phone: "01812345678".to_string(),
        },
    ];

    let doctor1 = EntityId::generate();
    let doctor2 = EntityId::generate();
    let doctor3 = EntityId::generate();

    let doctors = vec![
        Doctor {
            id: doctor1.clone(),
            name: "Abul Kalam".to_string(),
            specialization: "Cardiologist".to_string(),
            phone: "01911112222".to_string(),
            schedule: "Sat-Thu, 10am-5pm".to_string(),
            hospital_id: hospital1.clone(),
        },
        Doctor {
            id: doctor2.clone(),
            name: "Fatima Begum".to_string(),
            specialization: "Gynecologist".to_string(),
            phone: "01622223333".to_string(),
            schedule: "Sun-Wed, 9am-2pm".to_string(),
            hospital_id: hospital1.clone(),
        },
        Doctor {
            id: doctor3.clone(),
            name: "Rahim Sheikh".to_string(),
            specialization: "Orthopedic Surgeon".to_string(),
            phone: "01533334444".to_string(),
            schedule: "Mon-Fri, 3pm-8pm".to_string(),
            hospital_id: hospital2.clone(),
        },
    ];

    let cabin1 = EntityId::generate();
    let cabin2 = EntityId::generate();
    let cabin3 = EntityId::generate();

    let cabins = vec![
        Cabin {
            id: cabin1.clone(),
            cabin_number: "C-101".to_string(),
            kind: CabinType::Private,
            is_occupied: true,
            hospital_id: hospital1.clone(),
        },
        Cabin {
            id: EntityId::generate(),
            cabin_number: "C-102".to_string(),
            kind: CabinType::Private,
            is_occupied: false,
            hospital_id: hospital1.clone(),
        },
        Cabin {
            id: cabin2.clone(),
            cabin_number: "G-201".to_string(),
            kind: CabinType::General,
            is_occupied: true,
            hospital_id: hospital1.clone(),
        },
        Cabin {
            id: cabin3.clone(),
            cabin_number: "ICU-1".to_string(),
            kind: CabinType::Icu,
            is_occupied: true,
            hospital_id: hospital2.clone(),
        },
        Cabin {
            id: EntityId::generate(),
            cabin_number: "P-305".to_string(),
            kind: CabinType::Private,
            is_occupied: false,
            hospital_id: hospital2.clone(),
        },
    ];

    let patients = vec![
        Patient {
            id: EntityId::generate(),
            name: "Jamal Uddin".to_string(),
            age: 55,
            gender: Gender::Male,
            phone: "017xxxxxxx1".to_string(),
            address: "Mirpur, Dhaka".to_string(),
            admission_date: date(2023, 10, 1),
            treatment: "Patient admitted with chest pain. ECG shows minor abnormalities. \
                        Prescribed medication and advised for 2-day observation."
                .to_string(),
            hospital_id: hospital1.clone(),
            doctor_id: doctor1,
            cabin_id: Some(cabin1),
        },
        Patient {
            id: EntityId::generate(),
            name: "Ayesha Akhter".to_string(),
            age: 28,
            gender: Gender::Female,
            phone: "018xxxxxxx2".to_string(),
            address: "Mohammadpur, Dhaka".to_string(),
            admission_date: date(2023, 10, 2),
            treatment: "Routine pregnancy check-up. Everything is normal. \
                        Fetal heartbeat is strong."
                .to_string(),
            hospital_id: hospital1.clone(),
            doctor_id: doctor2,
            cabin_id: Some(cabin2),
        },
        Patient {
            id: EntityId::generate(),
            name: "Harun Mia".to_string(),
            age: 42,
            gender: Gender::Male,
            phone: "016xxxxxxx3".to_string(),
            address: "Agrabad, Chittagong".to_string(),
            admission_date: date(2023, 9, 28),
            treatment: "Admitted for surgery on a fractured tibia. Post-op recovery is \
                        satisfactory. Physiotherapy recommended."
                .to_string(),
            hospital_id: hospital2.clone(),
            doctor_id: doctor3,
            cabin_id: Some(cabin3),
        },
    ];

    let financial_records = vec![
        FinancialRecord {
            id: EntityId::generate(),
            kind: RecordType::Income,
            description: "Patient Admission Fee - Jamal Uddin".to_string(),
            amount: 5000.0,
            date: date(2023, 10, 1),
            hospital_id: hospital1.clone(),
        },
        FinancialRecord {
            id: EntityId::generate(),
            kind: RecordType::Expense,
            description: "October Staff Salaries".to_string(),
            amount: 500_000.0,
            date: date(2023, 10, 1),
            hospital_id: hospital1.clone(),
        },
        FinancialRecord {
            id: EntityId::generate(),
            kind: RecordType::Income,
            description: "Cabin Rent - C-101".to_string(),
            amount: 15_000.0,
            date: date(2023, 10, 2),
            hospital_id: hospital1.clone(),
        },
        FinancialRecord {
            id: EntityId::generate(),
            kind: RecordType::Expense,
            description: "Medical Equipment Purchase".to_string(),
            amount: 120_000.0,
            date: date(2023, 9, 25),
            hospital_id: hospital1,
        },
        FinancialRecord {
            id: EntityId::generate(),
            kind: RecordType::Income,
            description: "Surgery Bill - Harun Mia".to_string(),
            amount: 80_000.0,
            date: date(2023, 9, 28),
            hospital_id: hospital2.clone(),
        },
        FinancialRecord {
            id: EntityId::generate(),
            kind: RecordType::Expense,
            description: "Medicine Supply Order".to_string(),
            amount: 75_000.0,
            date: date(2023, 9, 30),
            hospital_id: hospital2,
        },
    ];

    AppState {
        hospitals,
        doctors,
        patients,
        cabins,
        financial_records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_the_documented_shape() {
        let state = generate_initial_state();
        assert_eq!(state.hospitals.len(), 2);
        assert_eq!(state.doctors.len(), 3);
        assert_eq!(state.cabins.len(), 5);
        assert_eq!(state.patients.len(), 3);
        assert_eq!(state.financial_records.len(), 6);
        assert!(state.cabins.iter().any(|c| c.is_occupied));
        assert!(state.cabins.iter().any(|c| !c.is_occupied));
    }

    #[test]
    fn seed_ids_are_unique_within_the_snapshot() {
        let state = generate_initial_state();
        let mut ids = HashSet::new();
        for id in state
            .hospitals
            .iter()
            .map(|h| &h.id)
            .chain(state.doctors.iter().map(|d| &d.id))
            .chain(state.patients.iter().map(|p| &p.id))
            .chain(state.cabins.iter().map(|c| &c.id))
            .chain(state.financial_records.iter().map(|r| &r.id))
        {
            assert!(ids.insert(id.clone()), "duplicate id in seed: {id}");
        }
    }

    #[test]
    fn seed_cross_references_all_resolve() {
        let state = generate_initial_state();
        for doctor in &state.doctors {
            assert!(state.hospital(&doctor.hospital_id).is_some());
        }
        for cabin in &state.cabins {
            assert!(state.hospital(&cabin.hospital_id).is_some());
        }
        for record in &state.financial_records {
            assert!(state.hospital(&record.hospital_id).is_some());
        }
        for patient in &state.patients {
            assert!(state.hospital(&patient.hospital_id).is_some());
            let doctor = state.doctor(&patient.doctor_id).expect("doctor resolves");
            assert_eq!(doctor.hospital_id, patient.hospital_id);
            if let Some(cabin_id) = &patient.cabin_id {
                let cabin = state.cabin(cabin_id).expect("cabin resolves");
                assert_eq!(cabin.hospital_id, patient.hospital_id);
            }
        }
    }
}
