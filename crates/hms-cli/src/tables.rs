//! Table rendering for list and dashboard output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use hms_model::EntityId;
use hms_store::AppState;

/// Placeholder shown when a cross-reference points at a deleted record.
///
/// Deletes do not cascade, so dangling references are expected and are
/// surfaced only here, at display time.
pub const NOT_FOUND: &str = "(not found)";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Hospital name for display, or the not-found placeholder.
pub fn hospital_label(state: &AppState, id: &EntityId) -> String {
    state
        .hospital(id)
        .map_or_else(|| NOT_FOUND.to_string(), |h| h.name.clone())
}

pub fn doctor_label(state: &AppState, id: &EntityId) -> String {
    state
        .doctor(id)
        .map_or_else(|| NOT_FOUND.to_string(), |d| d.name.clone())
}

pub fn cabin_label(state: &AppState, id: Option<&EntityId>) -> String {
    match id {
        Some(id) => state
            .cabin(id)
            .map_or_else(|| NOT_FOUND.to_string(), |c| c.cabin_number.clone()),
        None => "-".to_string(),
    }
}

pub fn hospitals_table(state: &AppState) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Id", "Name", "Address", "Phone"]);
    for hospital in &state.hospitals {
        table.add_row(vec![
            hospital.id.as_str(),
            hospital.name.as_str(),
            hospital.address.as_str(),
            hospital.phone.as_str(),
        ]);
    }
    table
}

pub fn doctors_table(state: &AppState) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Id", "Name", "Specialization", "Phone", "Schedule", "Hospital"]);
    for doctor in &state.doctors {
        table.add_row(vec![
            doctor.id.to_string(),
            doctor.name.clone(),
            doctor.specialization.clone(),
            doctor.phone.clone(),
            doctor.schedule.clone(),
            hospital_label(state, &doctor.hospital_id),
        ]);
    }
    table
}

pub fn patients_table(state: &AppState) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        "Id", "Name", "Age", "Gender", "Admitted", "Hospital", "Doctor", "Cabin",
    ]);
    for patient in &state.patients {
        table.add_row(vec![
            patient.id.to_string(),
            patient.name.clone(),
            patient.age.to_string(),
            patient.gender.to_string(),
            patient.admission_date.to_string(),
            hospital_label(state, &patient.hospital_id),
            doctor_label(state, &patient.doctor_id),
            cabin_label(state, patient.cabin_id.as_ref()),
        ]);
    }
    table
}

pub fn cabins_table(state: &AppState) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Id", "Number", "Type", "Occupied", "Hospital"]);
    for cabin in &state.cabins {
        table.add_row(vec![
            cabin.id.to_string(),
            cabin.cabin_number.clone(),
            cabin.kind.to_string(),
            if cabin.is_occupied { "Yes" } else { "No" }.to_string(),
            hospital_label(state, &cabin.hospital_id),
        ]);
    }
    table
}

pub fn finance_table(state: &AppState) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Id", "Type", "Description", "Amount", "Date", "Hospital"]);
    for record in &state.financial_records {
        table.add_row(vec![
            Cell::new(record.id.as_str()),
            Cell::new(record.kind.as_str()),
            Cell::new(&record.description),
            Cell::new(format!("{:.2}", record.amount)).set_alignment(CellAlignment::Right),
            Cell::new(record.date.to_string()),
            Cell::new(hospital_label(state, &record.hospital_id)),
        ]);
    }
    table
}

pub fn dashboard_table(state: &AppState) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Metric", "Value"]);
    let income = state.total_income();
    let expense = state.total_expense();
    for (metric, value) in [
        ("Hospitals", state.hospitals.len().to_string()),
        ("Doctors", state.doctors.len().to_string()),
        ("Patients", state.patients.len().to_string()),
        (
            "Cabins occupied",
            format!("{} / {}", state.occupied_cabin_count(), state.cabins.len()),
        ),
        ("Total income", format!("{income:.2}")),
        ("Total expense", format!("{expense:.2}")),
        ("Net balance", format!("{:.2}", income - expense)),
    ] {
        table.add_row(vec![
            Cell::new(metric),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_store::{Action, generate_initial_state, reduce};

    #[test]
    fn dangling_hospital_renders_placeholder() {
        let state = generate_initial_state();
        let victim = state.hospitals[0].id.clone();
        let state = reduce(&state, Action::DeleteHospital(victim.clone()));
        assert_eq!(hospital_label(&state, &victim), NOT_FOUND);
        let rendered = doctors_table(&state).to_string();
        assert!(rendered.contains(NOT_FOUND));
    }

    #[test]
    fn unassigned_cabin_renders_dash() {
        let state = generate_initial_state();
        assert_eq!(cabin_label(&state, None), "-");
    }

    #[test]
    fn dashboard_reports_seed_totals() {
        let state = generate_initial_state();
        let rendered = dashboard_table(&state).to_string();
        assert!(rendered.contains("Hospitals"));
        assert!(rendered.contains("3 / 5"));
    }
}
