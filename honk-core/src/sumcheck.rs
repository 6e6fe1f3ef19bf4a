//! The sumcheck verifier: reduces the claim that the full Honk relation sums
//! to zero over the boolean hypercube to a claim about the tracked
//! polynomials' evaluations at a random multilinear point.

use alloc::vec::Vec;
use ark_ff::{batch_inversion, Zero};
use honk_common::{
    backends::HashBackend,
    constants::{MAX_RELATION_LENGTH, NUM_POLYNOMIALS},
    types::{MultilinearClaim, RelationParameters, ScalarField},
};

use crate::{
    relations::evaluate_combined_relations,
    transcript::{errors::TranscriptError, VerifierTranscript},
};

/// Verifies the sumcheck argument for a circuit of the given size.
///
/// Each round receives the round univariate as its evaluations over
/// `{0, ..., MAX_RELATION_LENGTH - 1}`, checks it is consistent with the
/// running target sum, and folds the target with a fresh challenge. After the
/// final round, the claimed multilinear evaluations must reproduce the target
/// through the combined relation.
///
/// Returns `None` if any of the consistency checks fail; the claim returned
/// on success remains to be checked against the polynomial commitments.
pub fn verify_sumcheck<H: HashBackend>(
    transcript: &mut VerifierTranscript<H>,
    params: &RelationParameters,
    circuit_size: u64,
) -> Result<Option<MultilinearClaim>, TranscriptError> {
    let num_rounds = circuit_size.trailing_zeros() as usize;

    // A satisfied circuit's relation vanishes on every row, so the claimed
    // sum over the hypercube is zero
    let mut target = ScalarField::zero();
    let mut evaluation_point = Vec::with_capacity(num_rounds);

    for _ in 0..num_rounds {
        let mut round_univariate = [ScalarField::zero(); MAX_RELATION_LENGTH];
        for eval in round_univariate.iter_mut() {
            *eval = transcript.receive()?;
        }

        if round_univariate[0] + round_univariate[1] != target {
            return Ok(None);
        }

        let round_challenge = transcript.get_challenge();
        target = evaluate_round_univariate(&round_univariate, round_challenge);
        evaluation_point.push(round_challenge);
    }

    let mut evaluations = [ScalarField::zero(); NUM_POLYNOMIALS];
    for eval in evaluations.iter_mut() {
        *eval = transcript.receive()?;
    }

    if evaluate_combined_relations(&evaluations, params) != target {
        return Ok(None);
    }

    Ok(Some(MultilinearClaim {
        evaluation_point,
        evaluations,
    }))
}

/// Evaluates a round univariate, given by its evaluations over
/// `{0, ..., MAX_RELATION_LENGTH - 1}`, at an arbitrary point via Lagrange
/// interpolation
fn evaluate_round_univariate(
    evaluations: &[ScalarField; MAX_RELATION_LENGTH],
    point: ScalarField,
) -> ScalarField {
    // Barycentric weights for the interpolation domain {0, ..., 4}:
    // w_i = prod_{j != i} (i - j)
    let barycentric_weights: [ScalarField; MAX_RELATION_LENGTH] = [
        ScalarField::from(24u64),
        -ScalarField::from(6u64),
        ScalarField::from(4u64),
        -ScalarField::from(6u64),
        ScalarField::from(24u64),
    ];

    let mut denominators = [ScalarField::zero(); MAX_RELATION_LENGTH];
    for i in 0..MAX_RELATION_LENGTH {
        let diff = point - ScalarField::from(i as u64);
        // The barycentric formula divides by (point - i); fall back to the
        // tabulated value when the point lies on the domain
        if diff.is_zero() {
            return evaluations[i];
        }
        denominators[i] = diff * barycentric_weights[i];
    }

    let numerator: ScalarField = (0..MAX_RELATION_LENGTH)
        .map(|i| point - ScalarField::from(i as u64))
        .product();
    batch_inversion(&mut denominators);

    let mut result = ScalarField::zero();
    for i in 0..MAX_RELATION_LENGTH {
        result += evaluations[i] * denominators[i];
    }
    result * numerator
}
