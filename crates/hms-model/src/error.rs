use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid entity id: {0:?}")]
    InvalidId(String),
    #[error("unknown gender: {0:?}")]
    InvalidGender(String),
    #[error("unknown cabin type: {0:?}")]
    InvalidCabinType(String),
    #[error("unknown financial record type: {0:?}")]
    InvalidRecordType(String),
    #[error("{entity} is missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
