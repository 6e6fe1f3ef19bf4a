//! The prover's view of the Fiat-Shamir transcript

use honk_common::{
    backends::HashBackend,
    custom_serde::BytesSerializable,
    types::{Proof, ScalarField},
};
use honk_core::transcript::Transcript;

/// A transcript that accumulates the proof byte stream while absorbing every
/// sent element, mirroring the verifier's replay
pub struct ProverTranscript<H: HashBackend> {
    /// The underlying Fiat-Shamir transcript
    inner: Transcript<H>,
    /// The proof bytes produced so far
    proof_bytes: Vec<u8>,
}

impl<H: HashBackend> ProverTranscript<H> {
    /// Creates an empty prover transcript
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        ProverTranscript {
            inner: Transcript::new(),
            proof_bytes: Vec::new(),
        }
    }

    /// Sends an element to the verifier: appends its byte serialization to
    /// the proof stream and absorbs it into the transcript
    pub fn send<S: BytesSerializable>(&mut self, value: &S) {
        let bytes = value.serialize_to_bytes();
        self.inner.append_message(&bytes);
        self.proof_bytes.extend(bytes);
    }

    /// Computes a challenge over the data absorbed so far
    pub fn get_challenge(&mut self) -> ScalarField {
        self.inner.get_and_append_challenge()
    }

    /// Finalizes the transcript into the proof byte stream
    pub fn into_proof(self) -> Proof {
        Proof(self.proof_bytes)
    }
}
