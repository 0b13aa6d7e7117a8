//! Error types for the log screen session

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FoodLogError {
    #[error("Unknown food: {0}")]
    UnknownFood(String),

    #[error("No food selected")]
    NothingSelected,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Photo capture is disabled for this screen")]
    PhotoCaptureDisabled,
}

pub type FoodLogResult<T> = Result<T, FoodLogError>;
