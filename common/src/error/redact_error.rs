use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret-bearing value is asked to leave the process by accident.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
