use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when secret-bearing values are asked to leave the process in a
/// form that would expose them.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Refused to serialize secret value of type {type_name} {location}")]
    Serialization {
        type_name: &'static str,
        location: ErrorLocation,
    },
}
