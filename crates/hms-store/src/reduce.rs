//! The pure state transition function.

use hms_model::EntityId;

use crate::action::Action;
use crate::state::AppState;

/// Apply one action to a state snapshot, producing the next snapshot.
///
/// Pure, synchronous, and total: no action can fail. Validation happens
/// before an action is ever built; an update whose id matches nothing is
/// a silent no-op, and a delete of an absent id leaves the collection
/// untouched. Insertion order is preserved across add and update; delete
/// removes without reordering the survivors.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::ReplaceState(snapshot) => return snapshot,

        Action::AddHospital(hospital) => next.hospitals.push(hospital),
        Action::UpdateHospital(hospital) => replace_first(&mut next.hospitals, hospital, |h| &h.id),
        Action::DeleteHospital(id) => next.hospitals.retain(|h| h.id != id),

        Action::AddDoctor(doctor) => next.doctors.push(doctor),
        Action::UpdateDoctor(doctor) => replace_first(&mut next.doctors, doctor, |d| &d.id),
        Action::DeleteDoctor(id) => next.doctors.retain(|d| d.id != id),

        Action::AddPatient(patient) => next.patients.push(patient),
        Action::UpdatePatient(patient) => replace_first(&mut next.patients, patient, |p| &p.id),
        Action::DeletePatient(id) => next.patients.retain(|p| p.id != id),

        Action::AddCabin(cabin) => next.cabins.push(cabin),
        Action::UpdateCabin(cabin) => replace_first(&mut next.cabins, cabin, |c| &c.id),
        Action::DeleteCabin(id) => next.cabins.retain(|c| c.id != id),

        Action::AddFinancialRecord(record) => next.financial_records.push(record),
        Action::DeleteFinancialRecord(id) => next.financial_records.retain(|r| r.id != id),
    }
    next
}

/// Replace the first record whose id matches; no-op when absent.
fn replace_first<T>(items: &mut [T], record: T, id_of: impl Fn(&T) -> &EntityId) {
    let target = id_of(&record).clone();
    if let Some(slot) = items.iter_mut().find(|item| id_of(item) == &target) {
        *slot = record;
    }
}
