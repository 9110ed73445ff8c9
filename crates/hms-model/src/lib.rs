pub mod draft;
pub mod entities;
pub mod enums;
pub mod error;
pub mod ids;

pub use draft::{CabinDraft, DoctorDraft, FinancialRecordDraft, HospitalDraft, PatientDraft};
pub use entities::{Cabin, Doctor, FinancialRecord, Hospital, Patient};
pub use enums::{CabinType, Gender, RecordType};
pub use error::{ModelError, Result};
pub use ids::EntityId;
