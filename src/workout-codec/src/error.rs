use thiserror::Error;
use workout_types::{ActivityCode, UnknownActivityCode};

#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("unknown activity code: {0}")]
    UnknownActivityCode(String),
    #[error("invalid sample arity for {code}: expected {expected} values, got {actual}")]
    InvalidArity {
        code: ActivityCode,
        expected: usize,
        actual: usize,
    },
    #[error("invalid physical parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl From<UnknownActivityCode> for WorkoutError {
    fn from(value: UnknownActivityCode) -> Self {
        Self::UnknownActivityCode(value.0)
    }
}
