//! Closed string-valued enumerations used by the record types.
//!
//! The durable slot stores these as exact-match strings ("Male", "ICU",
//! "Income", ...), so each enum carries its canonical spelling table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// All variants, in form-display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(ModelError::InvalidGender(other.to_string())),
        }
    }
}

/// Cabin category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinType {
    General,
    Private,
    #[serde(rename = "ICU")]
    Icu,
}

impl CabinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinType::General => "General",
            CabinType::Private => "Private",
            CabinType::Icu => "ICU",
        }
    }

    pub const ALL: [CabinType; 3] = [CabinType::General, CabinType::Private, CabinType::Icu];
}

impl fmt::Display for CabinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CabinType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(CabinType::General),
            "Private" => Ok(CabinType::Private),
            "ICU" => Ok(CabinType::Icu),
            other => Err(ModelError::InvalidCabinType(other.to_string())),
        }
    }
}

/// Direction of a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    Income,
    Expense,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Income => "Income",
            RecordType::Expense => "Expense",
        }
    }

    pub const ALL: [RecordType; 2] = [RecordType::Income, RecordType::Expense];
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(RecordType::Income),
            "Expense" => Ok(RecordType::Expense),
            other => Err(ModelError::InvalidRecordType(other.to_string())),
        }
    }
}
