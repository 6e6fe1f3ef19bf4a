//! The KZG opening check: reduces a single univariate opening claim to a
//! pairing identity.

use ark_ff::One;
use honk_common::{
    backends::{G1ArithmeticBackend, HashBackend},
    types::{G1Affine, G2Affine, OpeningClaim, ScalarField},
};

use crate::{transcript::VerifierTranscript, verifier::errors::VerifierError};

/// The two G1 elements of the final pairing check,
/// e(lhs, [1]_2) == e(rhs, [x]_2)
#[derive(Clone, Copy, Debug)]
pub struct PairingAccumulator {
    /// The left-hand G1 element, paired with the G2 generator
    pub lhs: G1Affine,
    /// The right-hand G1 element, paired with the G2 commitment to the
    /// secret evaluation point
    pub rhs: G1Affine,
}

impl PairingAccumulator {
    /// Performs the deferred pairing check
    pub fn verify<G: G1ArithmeticBackend>(
        &self,
        h: G2Affine,
        x_h: G2Affine,
    ) -> Result<bool, VerifierError> {
        G::ec_pairing_check(self.lhs, h, self.rhs, x_h)
            .map_err(|_| VerifierError::ArithmeticBackend)
    }
}

/// Runs the verifier's side of the KZG opening protocol.
///
/// Receives the quotient commitment `W` and assembles the pairing inputs for
/// the identity
///
/// e(C - v * [1]_1 + z * W, [1]_2) == e(W, [x]_2)
///
/// which holds exactly when the committed polynomial takes the value `v`
/// at `z`.
pub fn reduce_verification<G: G1ArithmeticBackend, H: HashBackend>(
    transcript: &mut VerifierTranscript<H>,
    claim: &OpeningClaim,
    g: G1Affine,
) -> Result<PairingAccumulator, VerifierError> {
    let quotient: G1Affine = transcript.receive()?;

    let lhs = G::msm(
        &[ScalarField::one(), -claim.evaluation, claim.opening_point],
        &[claim.commitment, g, quotient],
    )
    .map_err(|_| VerifierError::ArithmeticBackend)?;

    Ok(PairingAccumulator { lhs, rhs: quotient })
}
