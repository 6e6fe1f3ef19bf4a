//! Transcript error types and conversions.

use honk_common::custom_serde::SerdeError;

/// Errors stemming from transcript operations
#[derive(Debug)]
pub enum TranscriptError {
    /// An error that occurred while deserializing an element
    /// received from the prover
    Serialization,
    /// The proof stream ended before all expected elements were received
    ProofBytesExhausted,
}

impl From<SerdeError> for TranscriptError {
    fn from(_value: SerdeError) -> Self {
        TranscriptError::Serialization
    }
}
