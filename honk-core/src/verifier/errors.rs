//! Errors stemming from verifier operations

use crate::transcript::errors::TranscriptError;

/// Errors produced while verifying a proof.
///
/// Note that an invalid proof is not an error: verification failures are
/// reported as an `Ok(false)` verdict. Errors are reserved for malformed
/// proof streams and backend failures.
#[derive(Debug)]
pub enum VerifierError {
    /// An error that occurred when replaying the proof transcript
    TranscriptBackend,
    /// An error that occurred when computing a modular inverse
    Inversion,
    /// An error that occurred in the operations of the G1 arithmetic backend
    ArithmeticBackend,
}

impl From<TranscriptError> for VerifierError {
    fn from(_value: TranscriptError) -> Self {
        VerifierError::TranscriptBackend
    }
}
