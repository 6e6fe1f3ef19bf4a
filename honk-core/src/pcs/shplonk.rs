//! The Shplonk reduction: batches a collection of univariate opening claims
//! at distinct points into a single opening claim with claimed value zero.

use alloc::vec::Vec;
use ark_ff::{batch_inversion, One, Zero};
use honk_common::{
    backends::{G1ArithmeticBackend, HashBackend},
    types::{G1Affine, OpeningClaim, ScalarField},
};

use crate::{transcript::VerifierTranscript, verifier::errors::VerifierError};

/// Runs the verifier's side of the Shplonk reduction.
///
/// Draws the batching challenge `nu`, receives the batched quotient
/// commitment `Q`, draws the evaluation challenge `z`, and assembles the
/// commitment to the partially evaluated batched quotient
///
/// G(X) = Q(X) - sum_j nu^j / (z - x_j) * (P_j(X) - v_j)
///
/// which opens to zero at `z` exactly when every input claim holds.
pub fn reduce_verification<G: G1ArithmeticBackend, H: HashBackend>(
    transcript: &mut VerifierTranscript<H>,
    claims: &[OpeningClaim],
    g: G1Affine,
) -> Result<OpeningClaim, VerifierError> {
    let nu = transcript.get_challenge();
    let q_commitment: G1Affine = transcript.receive()?;
    let z = transcript.get_challenge();

    let mut inverse_vanishing: Vec<ScalarField> =
        claims.iter().map(|claim| z - claim.opening_point).collect();
    if inverse_vanishing.iter().any(|denom| denom.is_zero()) {
        return Err(VerifierError::Inversion);
    }
    batch_inversion(&mut inverse_vanishing);

    let mut scalars = Vec::with_capacity(claims.len() + 2);
    let mut points = Vec::with_capacity(claims.len() + 2);
    scalars.push(ScalarField::one());
    points.push(q_commitment);

    let mut batched_evaluation = ScalarField::zero();
    let mut nu_power = ScalarField::one();
    for (claim, inverse) in claims.iter().zip(inverse_vanishing.iter()) {
        let scaling = nu_power * inverse;
        scalars.push(-scaling);
        points.push(claim.commitment);
        batched_evaluation += scaling * claim.evaluation;
        nu_power *= nu;
    }

    // The subtracted evaluations are re-added as a multiple of the generator
    scalars.push(batched_evaluation);
    points.push(g);

    let commitment = G::msm(&scalars, &points).map_err(|_| VerifierError::ArithmeticBackend)?;

    Ok(OpeningClaim {
        commitment,
        opening_point: z,
        evaluation: ScalarField::zero(),
    })
}
