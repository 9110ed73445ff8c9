//! Summary request assembly.
//!
//! The collaborator only ever sees resolved, flat fields. Building a
//! request from state is where dangling references are caught: if the
//! patient's doctor or hospital no longer exists, resolution fails
//! locally and nothing is sent over the network.

use chrono::NaiveDate;

use hms_model::{EntityId, Gender};
use hms_store::AppState;

use crate::error::{Result, SummaryError};

/// The structured fields sent to the text-generation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_gender: Gender,
    pub admission_date: NaiveDate,
    pub treatment_notes: String,
    pub hospital_name: String,
    pub hospital_address: String,
    pub doctor_name: String,
    pub doctor_specialization: String,
}

impl SummaryRequest {
    /// Resolve a patient's references against the current state.
    pub fn resolve(state: &AppState, patient_id: &EntityId) -> Result<Self> {
        let patient = state
            .patient(patient_id)
            .ok_or_else(|| SummaryError::UnknownPatient(patient_id.to_string()))?;
        let doctor = state
            .doctor(&patient.doctor_id)
            .ok_or(SummaryError::UnresolvedReference { field: "doctor" })?;
        let hospital = state
            .hospital(&patient.hospital_id)
            .ok_or(SummaryError::UnresolvedReference { field: "hospital" })?;

        Ok(Self {
            patient_name: patient.name.clone(),
            patient_age: patient.age,
            patient_gender: patient.gender,
            admission_date: patient.admission_date,
            treatment_notes: patient.treatment.clone(),
            hospital_name: hospital.name.clone(),
            hospital_address: hospital.address.clone(),
            doctor_name: doctor.name.clone(),
            doctor_specialization: doctor.specialization.clone(),
        })
    }

    /// Render the prompt sent to the model.
    ///
    /// Written for a patient's family member: professional, empathetic,
    /// no technical jargon, in the context of a hospital in Bangladesh.
    pub fn prompt(&self) -> String {
        format!(
            "Generate a concise, easy-to-understand summary for a patient's family member.\n\
             The summary should be professional, empathetic, and avoid overly technical jargon.\n\
             It should be written in the context of a hospital in Bangladesh.\n\
             \n\
             Patient Information:\n\
             - Name: {name}\n\
             - Age: {age}\n\
             - Gender: {gender}\n\
             - Admission Date: {admission}\n\
             \n\
             Hospital & Doctor Information:\n\
             - Hospital: {hospital}, {address}\n\
             - Attending Doctor: Dr. {doctor} ({specialization})\n\
             \n\
             Treatment Notes from Doctor:\n\
             \"{treatment}\"\n\
             \n\
             Based on the information above, please generate the summary. \
             Start with a polite greeting.",
            name = self.patient_name,
            age = self.patient_age,
            gender = self.patient_gender,
            admission = self.admission_date,
            hospital = self.hospital_name,
            address = self.hospital_address,
            doctor = self.doctor_name,
            specialization = self.doctor_specialization,
            treatment = self.treatment_notes,
        )
    }
}
