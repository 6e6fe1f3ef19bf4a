//! The Fiat-Shamir transcript used to bind the verifier's challenges to the
//! prover's messages.

pub mod errors;

use alloc::vec::Vec;
use ark_ff::{BigInt, BigInteger, PrimeField};
use core::marker::PhantomData;
use honk_common::{
    backends::HashBackend,
    constants::{HASH_SAMPLE_BYTES, SPLIT_INDEX, TRANSCRIPT_STATE_SIZE},
    custom_serde::{bigint_from_le_bytes, BytesDeserializable},
    types::ScalarField,
};

use self::errors::TranscriptError;

/// A Keccak-based Fiat-Shamir transcript.
///
/// Defined generically over the hashing implementation.
pub struct Transcript<H: HashBackend> {
    /// The running protocol transcript, containing all data absorbed so far
    transcript: Vec<u8>,
    /// The current hash state of the transcript
    state: [u8; TRANSCRIPT_STATE_SIZE],
    #[doc(hidden)]
    _phantom: PhantomData<H>,
}

impl<H: HashBackend> Transcript<H> {
    /// Creates a new transcript with a zeroed-out hash state
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Transcript {
            transcript: Vec::new(),
            state: [0u8; TRANSCRIPT_STATE_SIZE],
            _phantom: PhantomData,
        }
    }

    /// Appends a message to the transcript
    pub fn append_message(&mut self, message: &[u8]) {
        self.transcript.extend_from_slice(message);
    }

    /// Computes a challenge and updates the transcript state
    pub fn get_and_append_challenge(&mut self) -> ScalarField {
        let input0 = [self.state.as_ref(), self.transcript.as_ref(), &[0u8]].concat();
        let input1 = [self.state.as_ref(), self.transcript.as_ref(), &[1u8]].concat();

        let buf0 = H::hash(&input0);
        let buf1 = H::hash(&input1);

        self.state.copy_from_slice(&[buf0, buf1].concat());

        // Sample the first `HASH_SAMPLE_BYTES` bytes of hash output into a scalar.

        // We begin by taking the lowest `SPLIT_INDEX` bytes of the hash output in
        // little-endian order and converting them into a scalar directly, as no
        // reduction is needed.
        let (bytes_to_directly_convert, remaining_bytes) =
            self.state[..HASH_SAMPLE_BYTES].split_at(SPLIT_INDEX);
        let res =
            ScalarField::from_bigint(bigint_from_le_bytes(bytes_to_directly_convert).unwrap())
                .unwrap();

        // Next, we interpret the remaining bytes in little-endian order as a scalar.
        // Again, no reduction is needed.
        let mut rem_scalar =
            ScalarField::from_bigint(bigint_from_le_bytes(remaining_bytes).unwrap()).unwrap();

        // Now, we shift the latter scalar left by `SPLIT_INDEX` bytes, which is
        // equivalent to multiplying by 2^248. Reduction is done for us by using
        // modular multiplication for the shift.

        // 2^248 in big endian = 1 followed by 248 zeroes
        let mut shift_bits = [false; SPLIT_INDEX * 8 + 1];
        shift_bits[0] = true;
        let shift_by_31_bytes =
            ScalarField::from_bigint(BigInt::from_bits_be(&shift_bits)).unwrap();
        rem_scalar *= shift_by_31_bytes;

        // Finally, we add the two scalars together. Again, reduction is done for us
        // by using modular addition.
        res + rem_scalar
    }
}

/// The verifier's view of the transcript: a cursor over the proof byte stream
/// paired with a running [`Transcript`].
///
/// Every element received from the stream is absorbed into the transcript as
/// the exact bytes it occupies on the wire, so that the verifier's challenge
/// sequence replays the prover's.
pub struct VerifierTranscript<'a, H: HashBackend> {
    /// The underlying Fiat-Shamir transcript
    inner: Transcript<H>,
    /// The raw proof bytes being replayed
    data: &'a [u8],
    /// The position of the next unread byte in the proof stream
    cursor: usize,
}

impl<'a, H: HashBackend> VerifierTranscript<'a, H> {
    /// Creates a verifier transcript over the given proof byte stream
    pub fn new(data: &'a [u8]) -> Self {
        VerifierTranscript {
            inner: Transcript::new(),
            data,
            cursor: 0,
        }
    }

    /// Reads the next `n` bytes of the proof stream, advancing the cursor
    fn take_bytes(&mut self, n: usize) -> Result<&'a [u8], TranscriptError> {
        let end = self
            .cursor
            .checked_add(n)
            .ok_or(TranscriptError::ProofBytesExhausted)?;
        if end > self.data.len() {
            return Err(TranscriptError::ProofBytesExhausted);
        }

        let bytes = &self.data[self.cursor..end];
        self.cursor = end;
        Ok(bytes)
    }

    /// Receives the next element from the proof stream,
    /// absorbing its bytes into the transcript
    pub fn receive<D: BytesDeserializable>(&mut self) -> Result<D, TranscriptError> {
        let bytes = self.take_bytes(D::SER_LEN)?;
        self.inner.append_message(bytes);
        Ok(D::deserialize_from_bytes(bytes)?)
    }

    /// Receives `n` scalars from the proof stream
    pub fn receive_scalars(&mut self, n: usize) -> Result<Vec<ScalarField>, TranscriptError> {
        let mut scalars = Vec::with_capacity(n);
        for _ in 0..n {
            scalars.push(self.receive()?);
        }
        Ok(scalars)
    }

    /// Computes a challenge over the data absorbed so far
    pub fn get_challenge(&mut self) -> ScalarField {
        self.inner.get_and_append_challenge()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use ark_std::UniformRand;
    use honk_common::types::{G1Affine, ScalarField};
    use honk_utils::{crypto::NativeHasher, proof_system::transcript::ProverTranscript};
    use rand::thread_rng;

    use super::VerifierTranscript;

    /// The prover and verifier transcripts must produce identical challenge
    /// streams when the verifier replays the prover's messages.
    #[test]
    fn test_transcript_equivalency() {
        let mut rng = thread_rng();
        let scalars: Vec<ScalarField> = (0..4).map(|_| ScalarField::rand(&mut rng)).collect();
        let points: Vec<G1Affine> = (0..2).map(|_| G1Affine::rand(&mut rng)).collect();
        let size = 16u64;

        let mut prover_transcript = ProverTranscript::<NativeHasher>::new();
        prover_transcript.send(&size);
        prover_transcript.send(&points[0]);
        let prover_challenge_1 = prover_transcript.get_challenge();
        for scalar in &scalars {
            prover_transcript.send(scalar);
        }
        prover_transcript.send(&points[1]);
        let prover_challenge_2 = prover_transcript.get_challenge();
        let prover_challenge_3 = prover_transcript.get_challenge();
        let proof = prover_transcript.into_proof();

        let mut verifier_transcript = VerifierTranscript::<NativeHasher>::new(&proof.0);
        assert_eq!(size, verifier_transcript.receive::<u64>().unwrap());
        assert_eq!(points[0], verifier_transcript.receive::<G1Affine>().unwrap());
        assert_eq!(prover_challenge_1, verifier_transcript.get_challenge());
        assert_eq!(
            scalars,
            verifier_transcript.receive_scalars(scalars.len()).unwrap()
        );
        assert_eq!(points[1], verifier_transcript.receive::<G1Affine>().unwrap());
        assert_eq!(prover_challenge_2, verifier_transcript.get_challenge());
        assert_eq!(prover_challenge_3, verifier_transcript.get_challenge());
    }

    /// Reading past the end of the proof stream must error rather than panic
    #[test]
    fn test_proof_bytes_exhausted() {
        let data = [0u8; 4];
        let mut transcript = VerifierTranscript::<NativeHasher>::new(&data);
        assert!(transcript.receive::<u64>().is_err());
    }
}
