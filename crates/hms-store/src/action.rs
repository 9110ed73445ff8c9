//! The closed set of state transitions.

use hms_model::{Cabin, Doctor, EntityId, FinancialRecord, Hospital, Patient};

use crate::state::AppState;

/// One state transition request.
///
/// Add variants carry a finalized record with a pre-generated id; the
/// store performs no uniqueness check (a duplicate id is a caller error).
/// Update variants replace the whole record by id. Delete variants carry
/// only the id. Financial records have no update variant: entries are
/// immutable once created and can only be removed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Discard the current state and substitute the given snapshot
    /// verbatim. Used only by the startup load path.
    ReplaceState(AppState),

    AddHospital(Hospital),
    UpdateHospital(Hospital),
    DeleteHospital(EntityId),

    AddDoctor(Doctor),
    UpdateDoctor(Doctor),
    DeleteDoctor(EntityId),

    AddPatient(Patient),
    UpdatePatient(Patient),
    DeletePatient(EntityId),

    AddCabin(Cabin),
    UpdateCabin(Cabin),
    DeleteCabin(EntityId),

    AddFinancialRecord(FinancialRecord),
    DeleteFinancialRecord(EntityId),
}

impl Action {
    /// Short label for log output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ReplaceState(_) => "replace-state",
            Action::AddHospital(_) => "add-hospital",
            Action::UpdateHospital(_) => "update-hospital",
            Action::DeleteHospital(_) => "delete-hospital",
            Action::AddDoctor(_) => "add-doctor",
            Action::UpdateDoctor(_) => "update-doctor",
            Action::DeleteDoctor(_) => "delete-doctor",
            Action::AddPatient(_) => "add-patient",
            Action::UpdatePatient(_) => "update-patient",
            Action::DeletePatient(_) => "delete-patient",
            Action::AddCabin(_) => "add-cabin",
            Action::UpdateCabin(_) => "update-cabin",
            Action::DeleteCabin(_) => "delete-cabin",
            Action::AddFinancialRecord(_) => "add-financial-record",
            Action::DeleteFinancialRecord(_) => "delete-financial-record",
        }
    }
}
