//! The Standard Honk relations: polynomial identities that vanish on every
//! row of a satisfied circuit's execution trace.
//!
//! Each relation takes the values of the tracked polynomials at a single
//! point (a row of the trace, or the sumcheck evaluation point) and returns
//! the relation's value there, scaled by the given factor. The full Honk
//! relation is the combination of the individual relations by powers of the
//! challenge `alpha`.

use ark_ff::One;
use honk_common::{
    constants::{
        ID_1, ID_2, ID_3, LAGRANGE_FIRST, LAGRANGE_LAST, NUM_POLYNOMIALS, Q_C, Q_L, Q_M, Q_O, Q_R,
        SIGMA_1, SIGMA_2, SIGMA_3, W_L, W_O, W_R, Z_PERM, Z_PERM_SHIFT,
    },
    types::{RelationParameters, ScalarField},
};

/// Evaluates the arithmetic gate relation:
///
/// q_m * w_l * w_r + q_l * w_l + q_r * w_r + q_o * w_o + q_c
pub fn evaluate_arithmetic_relation(
    evals: &[ScalarField; NUM_POLYNOMIALS],
    scaling_factor: ScalarField,
) -> ScalarField {
    let gate = evals[Q_M] * evals[W_L] * evals[W_R]
        + evals[Q_L] * evals[W_L]
        + evals[Q_R] * evals[W_R]
        + evals[Q_O] * evals[W_O]
        + evals[Q_C];

    gate * scaling_factor
}

/// Evaluates the grand product computation relation.
///
/// The grand product polynomial is stored with its first coefficient zeroed
/// so that its shift divides exactly; the first-row Lagrange indicator
/// restores the leading 1, and the last-row indicator injects the public
/// input correction factor on the wraparound step:
///
/// (z_perm + L_first) * prod_j (w_j + beta * id_j + gamma)
///     - (z_perm_shift + L_last * delta) * prod_j (w_j + beta * sigma_j + gamma)
pub fn evaluate_grand_product_relation(
    evals: &[ScalarField; NUM_POLYNOMIALS],
    params: &RelationParameters,
    scaling_factor: ScalarField,
) -> ScalarField {
    let RelationParameters {
        beta,
        gamma,
        public_input_delta,
        ..
    } = params;

    let mut numerator = evals[Z_PERM] + evals[LAGRANGE_FIRST];
    numerator *= evals[W_L] + *beta * evals[ID_1] + gamma;
    numerator *= evals[W_R] + *beta * evals[ID_2] + gamma;
    numerator *= evals[W_O] + *beta * evals[ID_3] + gamma;

    let mut denominator = evals[Z_PERM_SHIFT] + evals[LAGRANGE_LAST] * public_input_delta;
    denominator *= evals[W_L] + *beta * evals[SIGMA_1] + gamma;
    denominator *= evals[W_R] + *beta * evals[SIGMA_2] + gamma;
    denominator *= evals[W_O] + *beta * evals[SIGMA_3] + gamma;

    (numerator - denominator) * scaling_factor
}

/// Evaluates the grand product initialization relation, which pins the
/// wraparound coefficient of the shifted grand product to zero:
///
/// L_last * z_perm_shift
pub fn evaluate_grand_product_init_relation(
    evals: &[ScalarField; NUM_POLYNOMIALS],
    scaling_factor: ScalarField,
) -> ScalarField {
    evals[LAGRANGE_LAST] * evals[Z_PERM_SHIFT] * scaling_factor
}

/// Evaluates the full Honk relation: the individual relations combined by
/// increasing powers of the challenge `alpha`
pub fn evaluate_combined_relations(
    evals: &[ScalarField; NUM_POLYNOMIALS],
    params: &RelationParameters,
) -> ScalarField {
    let one = ScalarField::one();
    let mut result = evaluate_arithmetic_relation(evals, one);
    result += params.alpha * evaluate_grand_product_relation(evals, params, one);
    result += params.alpha * params.alpha * evaluate_grand_product_init_relation(evals, one);
    result
}
