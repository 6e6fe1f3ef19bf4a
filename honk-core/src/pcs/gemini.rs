//! The Gemini reduction: turns a batched multilinear evaluation claim into a
//! collection of univariate opening claims on the fold polynomials.

use alloc::{vec, vec::Vec};
use ark_ff::{batch_inversion, Field, One, Zero};
use honk_common::{
    backends::{G1ArithmeticBackend, HashBackend},
    types::{G1Affine, OpeningClaim, ScalarField},
};

use crate::{transcript::VerifierTranscript, verifier::errors::VerifierError};

/// Computes the increasing powers of `rho`, starting with 1
pub fn powers_of_rho(rho: ScalarField, num_powers: usize) -> Vec<ScalarField> {
    let mut powers = vec![ScalarField::one(); num_powers];
    for i in 1..num_powers {
        powers[i] = powers[i - 1] * rho;
    }
    powers
}

/// Computes the successive squares `r, r^2, r^4, ..., r^{2^{num_squares - 1}}`
pub fn squares_of(r: ScalarField, num_squares: usize) -> Vec<ScalarField> {
    let mut squares = Vec::with_capacity(num_squares);
    squares.push(r);
    for i in 1..num_squares {
        let previous = squares[i - 1];
        squares.push(previous * previous);
    }
    squares
}

/// Runs the verifier's side of the Gemini reduction.
///
/// Receives the fold polynomial commitments and their evaluations at the
/// negated evaluation points, reconstructs the batched polynomial's
/// evaluation at the positive point from the multilinear claim, and emits
/// one univariate opening claim per transmitted evaluation, plus the claim
/// at the positive point.
///
/// The batched commitments partition the tracked polynomials: `C_F` batches
/// the unshifted polynomials and `C_G` the polynomials opened under a shift,
/// so that the full batched polynomial is `F(X) + G(X) / X`.
pub fn reduce_verification<G: G1ArithmeticBackend, H: HashBackend>(
    transcript: &mut VerifierTranscript<H>,
    evaluation_point: &[ScalarField],
    batched_unshifted: G1Affine,
    batched_shifted: G1Affine,
    batched_evaluation: ScalarField,
) -> Result<Vec<OpeningClaim>, VerifierError> {
    let num_rounds = evaluation_point.len();

    let mut fold_commitments = Vec::with_capacity(num_rounds - 1);
    for _ in 0..num_rounds - 1 {
        fold_commitments.push(transcript.receive::<G1Affine>()?);
    }

    let r = transcript.get_challenge();
    let r_squares = squares_of(r, num_rounds);

    let fold_evaluations = transcript.receive_scalars(num_rounds)?;

    let a_0_pos = compute_positive_fold_evaluation(
        &fold_evaluations,
        evaluation_point,
        &r_squares,
        batched_evaluation,
    )?;

    // C_0^+ = C_F + r^{-1} C_G and C_0^- = C_F - r^{-1} C_G, matching the
    // shift term G(X) / X evaluated at r and -r respectively
    let r_inv = r.inverse().ok_or(VerifierError::Inversion)?;
    let shifted_scaled = G::ec_scalar_mul(r_inv, batched_shifted)
        .map_err(|_| VerifierError::ArithmeticBackend)?;
    let c_0_pos =
        G::ec_add(batched_unshifted, shifted_scaled).map_err(|_| VerifierError::ArithmeticBackend)?;
    let c_0_neg = G::ec_add(batched_unshifted, -shifted_scaled)
        .map_err(|_| VerifierError::ArithmeticBackend)?;

    let mut claims = Vec::with_capacity(num_rounds + 1);
    claims.push(OpeningClaim {
        commitment: c_0_pos,
        opening_point: r,
        evaluation: a_0_pos,
    });
    claims.push(OpeningClaim {
        commitment: c_0_neg,
        opening_point: -r,
        evaluation: fold_evaluations[0],
    });
    for l in 1..num_rounds {
        claims.push(OpeningClaim {
            commitment: fold_commitments[l - 1],
            opening_point: -r_squares[l],
            evaluation: fold_evaluations[l],
        });
    }

    Ok(claims)
}

/// Reconstructs the evaluation of the full batched polynomial at the positive
/// point `r` from the multilinear evaluation claim and the fold evaluations
/// at the negative points.
///
/// Inverts the fold recurrence one round at a time: each fold polynomial's
/// evaluations at `r^{2^l}` and `-r^{2^l}` determine its even and odd parts,
/// and the next fold's evaluation pins the linear combination taken by the
/// round challenge.
fn compute_positive_fold_evaluation(
    fold_evaluations: &[ScalarField],
    evaluation_point: &[ScalarField],
    r_squares: &[ScalarField],
    batched_evaluation: ScalarField,
) -> Result<ScalarField, VerifierError> {
    let num_rounds = evaluation_point.len();

    let mut denominators: Vec<ScalarField> = (0..num_rounds)
        .map(|l| {
            r_squares[l] * (ScalarField::one() - evaluation_point[l]) + evaluation_point[l]
        })
        .collect();
    if denominators.iter().any(|denom| denom.is_zero()) {
        return Err(VerifierError::Inversion);
    }
    batch_inversion(&mut denominators);

    let mut eval_pos = batched_evaluation;
    for l in (0..num_rounds).rev() {
        let r_square = r_squares[l];
        let challenge = evaluation_point[l];
        let eval_neg = fold_evaluations[l];

        // A_{l+1}(r^{2^{l+1}}) =
        //     [(1 - u_l) / 2 + u_l / (2 r^{2^l})] * A_l(r^{2^l})
        //   + [(1 - u_l) / 2 - u_l / (2 r^{2^l})] * A_l(-r^{2^l})
        // solved for A_l(r^{2^l})
        eval_pos = (r_square * eval_pos.double()
            - eval_neg * (r_square * (ScalarField::one() - challenge) - challenge))
            * denominators[l];
    }

    Ok(eval_pos)
}
