//! Command handlers: translate parsed arguments into store actions.
//!
//! Required-field checks happen here (clap plus draft finalization)
//! before any action reaches the store; the store itself accepts every
//! action it is given.

use anyhow::Result;

use hms_model::{
    Cabin, CabinDraft, Doctor, DoctorDraft, EntityId, FinancialRecordDraft, Hospital,
    HospitalDraft, Patient, PatientDraft,
};
use hms_persistence::FileSlot;
use hms_store::{Action, Store};

use crate::cli::{
    CabinCommand, Command, DoctorCommand, FinanceCommand, HospitalCommand, PatientCommand,
};
use crate::tables;

pub fn run(command: Command, store: &mut Store<FileSlot>) -> Result<()> {
    match command {
        Command::Hospital { command } => run_hospital(command, store),
        Command::Doctor { command } => run_doctor(command, store),
        Command::Patient { command } => run_patient(command, store),
        Command::Cabin { command } => run_cabin(command, store),
        Command::Finance { command } => run_finance(command, store),
        Command::Dashboard => {
            println!("{}", tables::dashboard_table(store.state()));
            Ok(())
        }
        Command::Summarize { patient_id } => {
            let patient_id = EntityId::new(patient_id)?;
            // Always prose: a summary, or the reason there isn't one.
            println!(
                "{}",
                hms_summary::generate_patient_summary(store.state(), &patient_id)
            );
            Ok(())
        }
    }
}

fn run_hospital(command: HospitalCommand, store: &mut Store<FileSlot>) -> Result<()> {
    match command {
        HospitalCommand::Add {
            name,
            address,
            phone,
        } => {
            let hospital = HospitalDraft {
                name: Some(name),
                address: Some(address),
                phone: Some(phone),
            }
            .finalize()?;
            let id = hospital.id.clone();
            store.dispatch(Action::AddHospital(hospital));
            println!("added hospital {id}");
        }
        HospitalCommand::List => println!("{}", tables::hospitals_table(store.state())),
        HospitalCommand::Update {
            id,
            name,
            address,
            phone,
        } => {
            let id = EntityId::new(id)?;
            let Some(existing) = store.state().hospital(&id).cloned() else {
                println!("hospital {id} not found; nothing updated");
                return Ok(());
            };
            let record = Hospital {
                id: existing.id,
                name: name.unwrap_or(existing.name),
                address: address.unwrap_or(existing.address),
                phone: phone.unwrap_or(existing.phone),
            };
            store.dispatch(Action::UpdateHospital(record));
            println!("updated hospital {id}");
        }
        HospitalCommand::Delete { id } => {
            let id = EntityId::new(id)?;
            store.dispatch(Action::DeleteHospital(id.clone()));
            println!("deleted hospital {id}");
        }
    }
    Ok(())
}

fn run_doctor(command: DoctorCommand, store: &mut Store<FileSlot>) -> Result<()> {
    match command {
        DoctorCommand::Add {
            name,
            specialization,
            phone,
            schedule,
            hospital_id,
        } => {
            let doctor = DoctorDraft {
                name: Some(name),
                specialization: Some(specialization),
                phone: Some(phone),
                schedule: Some(schedule),
                hospital_id: Some(EntityId::new(hospital_id)?),
            }
            .finalize()?;
            let id = doctor.id.clone();
            store.dispatch(Action::AddDoctor(doctor));
            println!("added doctor {id}");
        }
        DoctorCommand::List => println!("{}", tables::doctors_table(store.state())),
        DoctorCommand::Update {
            id,
            name,
            specialization,
            phone,
            schedule,
            hospital_id,
        } => {
            let id = EntityId::new(id)?;
            let Some(existing) = store.state().doctor(&id).cloned() else {
                println!("doctor {id} not found; nothing updated");
                return Ok(());
            };
            let record = Doctor {
                id: existing.id,
                name: name.unwrap_or(existing.name),
                specialization: specialization.unwrap_or(existing.specialization),
                phone: phone.unwrap_or(existing.phone),
                schedule: schedule.unwrap_or(existing.schedule),
                hospital_id: match hospital_id {
                    Some(h) => EntityId::new(h)?,
                    None => existing.hospital_id,
                },
            };
            store.dispatch(Action::UpdateDoctor(record));
            println!("updated doctor {id}");
        }
        DoctorCommand::Delete { id } => {
            let id = EntityId::new(id)?;
            store.dispatch(Action::DeleteDoctor(id.clone()));
            println!("deleted doctor {id}");
        }
    }
    Ok(())
}

fn run_patient(command: PatientCommand, store: &mut Store<FileSlot>) -> Result<()> {
    match command {
        PatientCommand::Add {
            name,
            age,
            gender,
            phone,
            address,
            admission_date,
            treatment,
            hospital_id,
            doctor_id,
            cabin_id,
        } => {
            let patient = PatientDraft {
                name: Some(name),
                age: Some(age),
                gender: Some(gender),
                phone: Some(phone),
                address: Some(address),
                admission_date: Some(admission_date),
                treatment: Some(treatment),
                hospital_id: Some(EntityId::new(hospital_id)?),
                doctor_id: Some(EntityId::new(doctor_id)?),
                cabin_id: cabin_id.map(EntityId::new).transpose()?,
            }
            .finalize()?;
            let id = patient.id.clone();
            store.dispatch(Action::AddPatient(patient));
            println!("added patient {id}");
        }
        PatientCommand::List => println!("{}", tables::patients_table(store.state())),
        PatientCommand::Update {
            id,
            name,
            age,
            gender,
            phone,
            address,
            admission_date,
            treatment,
            hospital_id,
            doctor_id,
            cabin_id,
            no_cabin,
        } => {
            let id = EntityId::new(id)?;
            let Some(existing) = store.state().patient(&id).cloned() else {
                println!("patient {id} not found; nothing updated");
                return Ok(());
            };
            let record = Patient {
                id: existing.id,
                name: name.unwrap_or(existing.name),
                age: age.unwrap_or(existing.age),
                gender: gender.unwrap_or(existing.gender),
                phone: phone.unwrap_or(existing.phone),
                address: address.unwrap_or(existing.address),
                admission_date: admission_date.unwrap_or(existing.admission_date),
                treatment: treatment.unwrap_or(existing.treatment),
                hospital_id: match hospital_id {
                    Some(h) => EntityId::new(h)?,
                    None => existing.hospital_id,
                },
                doctor_id: match doctor_id {
                    Some(d) => EntityId::new(d)?,
                    None => existing.doctor_id,
                },
                cabin_id: if no_cabin {
                    None
                } else {
                    match cabin_id {
                        Some(c) => Some(EntityId::new(c)?),
                        None => existing.cabin_id,
                    }
                },
            };
            store.dispatch(Action::UpdatePatient(record));
            println!("updated patient {id}");
        }
        PatientCommand::Delete { id } => {
            let id = EntityId::new(id)?;
            store.dispatch(Action::DeletePatient(id.clone()));
            println!("deleted patient {id}");
        }
    }
    Ok(())
}

fn run_cabin(command: CabinCommand, store: &mut Store<FileSlot>) -> Result<()> {
    match command {
        CabinCommand::Add {
            cabin_number,
            kind,
            occupied,
            hospital_id,
        } => {
            let cabin = CabinDraft {
                cabin_number: Some(cabin_number),
                kind: Some(kind),
                is_occupied: Some(occupied),
                hospital_id: Some(EntityId::new(hospital_id)?),
            }
            .finalize()?;
            let id = cabin.id.clone();
            store.dispatch(Action::AddCabin(cabin));
            println!("added cabin {id}");
        }
        CabinCommand::List => println!("{}", tables::cabins_table(store.state())),
        CabinCommand::Update {
            id,
            cabin_number,
            kind,
            occupied,
            vacant,
            hospital_id,
        } => {
            let id = EntityId::new(id)?;
            let Some(existing) = store.state().cabin(&id).cloned() else {
                println!("cabin {id} not found; nothing updated");
                return Ok(());
            };
            let record = Cabin {
                id: existing.id,
                cabin_number: cabin_number.unwrap_or(existing.cabin_number),
                kind: kind.unwrap_or(existing.kind),
                is_occupied: if occupied {
                    true
                } else if vacant {
                    false
                } else {
                    existing.is_occupied
                },
                hospital_id: match hospital_id {
                    Some(h) => EntityId::new(h)?,
                    None => existing.hospital_id,
                },
            };
            store.dispatch(Action::UpdateCabin(record));
            println!("updated cabin {id}");
        }
        CabinCommand::Delete { id } => {
            let id = EntityId::new(id)?;
            store.dispatch(Action::DeleteCabin(id.clone()));
            println!("deleted cabin {id}");
        }
    }
    Ok(())
}

fn run_finance(command: FinanceCommand, store: &mut Store<FileSlot>) -> Result<()> {
    match command {
        FinanceCommand::Add {
            kind,
            description,
            amount,
            date,
            hospital_id,
        } => {
            let record = FinancialRecordDraft {
                kind: Some(kind),
                description: Some(description),
                amount: Some(amount),
                date: Some(date),
                hospital_id: Some(EntityId::new(hospital_id)?),
            }
            .finalize()?;
            let id = record.id.clone();
            store.dispatch(Action::AddFinancialRecord(record));
            println!("added financial record {id}");
        }
        FinanceCommand::List => println!("{}", tables::finance_table(store.state())),
        FinanceCommand::Delete { id } => {
            let id = EntityId::new(id)?;
            store.dispatch(Action::DeleteFinancialRecord(id.clone()));
            println!("deleted financial record {id}");
        }
    }
    Ok(())
}
