//! The Standard Honk verifier: replays the proof transcript, runs the
//! sumcheck verifier against the combined relation, and reduces the
//! surviving multilinear claim to a single pairing check through the
//! Gemini, Shplonk, and KZG reductions.

pub mod errors;

use alloc::{sync::Arc, vec::Vec};
use ark_ff::Zero;
use core::marker::PhantomData;
use honk_common::{
    backends::{G1ArithmeticBackend, HashBackend},
    constants::{NUM_POLYNOMIALS, NUM_UNSHIFTED_POLYNOMIALS, PROGRAM_WIDTH, Z_PERM_SHIFT},
    types::{G1Affine, Proof, RelationParameters, ScalarField, VerificationKey},
};

use crate::{
    pcs::{gemini, kzg, shplonk},
    public_inputs::compute_public_input_delta,
    sumcheck::verify_sumcheck,
    transcript::VerifierTranscript,
};

use self::errors::VerifierError;

/// The verifier struct, defined generically over elliptic curve arithmetic
/// and hashing backends.
///
/// The verification key is held behind an [`Arc`] so that a single key can
/// be shared by concurrent verifications.
pub struct Verifier<G: G1ArithmeticBackend, H: HashBackend> {
    /// The verification key for the circuit being verified
    vkey: Arc<VerificationKey>,
    #[doc(hidden)]
    _phantom_g: PhantomData<G>,
    #[doc(hidden)]
    _phantom_h: PhantomData<H>,
}

impl<G: G1ArithmeticBackend, H: HashBackend> Verifier<G, H> {
    /// Creates a verifier for the circuit described by the given
    /// verification key
    pub fn new(vkey: Arc<VerificationKey>) -> Self {
        Verifier {
            vkey,
            _phantom_g: PhantomData,
            _phantom_h: PhantomData,
        }
    }

    /// Verify a proof.
    ///
    /// Returns `Ok(false)` on any failed protocol check; errors indicate a
    /// proof stream that could not be interpreted at all, or a backend
    /// failure.
    pub fn verify(&self, proof: &Proof) -> Result<bool, VerifierError> {
        let mut transcript = VerifierTranscript::<H>::new(&proof.0);

        // The circuit metadata leads the proof stream; a mismatch with the
        // verification key rejects the proof before anything else is read
        let circuit_size: u64 = transcript.receive()?;
        let num_public_inputs: u64 = transcript.receive()?;
        if circuit_size != self.vkey.circuit_size
            || num_public_inputs != self.vkey.num_public_inputs
        {
            return Ok(false);
        }

        // The protocol is defined over power-of-two domains with at least
        // one sumcheck round; smaller domains have no fold polynomials for
        // the opening reductions to work with
        if circuit_size < 2 || !circuit_size.is_power_of_two() {
            return Ok(false);
        }

        let public_inputs = transcript.receive_scalars(num_public_inputs as usize)?;

        let mut wire_commitments = [G1Affine::identity(); PROGRAM_WIDTH];
        for commitment in wire_commitments.iter_mut() {
            *commitment = transcript.receive()?;
        }

        let beta = transcript.get_challenge();
        let gamma = transcript.get_challenge();
        let public_input_delta =
            compute_public_input_delta(&public_inputs, beta, gamma, circuit_size)
                .ok_or(VerifierError::Inversion)?;

        let z_perm_commitment: G1Affine = transcript.receive()?;

        let alpha = transcript.get_challenge();
        let zeta = transcript.get_challenge();

        let params = RelationParameters {
            beta,
            gamma,
            public_input_delta,
            alpha,
            zeta,
        };

        let claim = match verify_sumcheck(&mut transcript, &params, circuit_size)? {
            Some(claim) => claim,
            None => return Ok(false),
        };

        // Batch the tracked polynomials by powers of rho, separating the
        // polynomials opened under a shift
        let rho = transcript.get_challenge();
        let rhos = gemini::powers_of_rho(rho, NUM_POLYNOMIALS);

        let mut batched_evaluation = ScalarField::zero();
        for (rho_power, evaluation) in rhos.iter().zip(claim.evaluations.iter()) {
            batched_evaluation += *rho_power * evaluation;
        }

        let mut unshifted_points = Vec::with_capacity(NUM_UNSHIFTED_POLYNOMIALS);
        unshifted_points.extend_from_slice(&self.vkey.commitments);
        unshifted_points.extend_from_slice(&wire_commitments);
        unshifted_points.push(z_perm_commitment);
        let batched_unshifted = G::msm(&rhos[..NUM_UNSHIFTED_POLYNOMIALS], &unshifted_points)
            .map_err(|_| VerifierError::ArithmeticBackend)?;
        let batched_shifted = G::ec_scalar_mul(rhos[Z_PERM_SHIFT], z_perm_commitment)
            .map_err(|_| VerifierError::ArithmeticBackend)?;

        let opening_claims = gemini::reduce_verification::<G, H>(
            &mut transcript,
            &claim.evaluation_point,
            batched_unshifted,
            batched_shifted,
            batched_evaluation,
        )?;

        let batched_claim =
            shplonk::reduce_verification::<G, H>(&mut transcript, &opening_claims, self.vkey.g)?;

        let accumulator =
            kzg::reduce_verification::<G, H>(&mut transcript, &batched_claim, self.vkey.g)?;

        accumulator.verify::<G>(self.vkey.h, self.vkey.x_h)
    }
}
