//! Polynomial helpers shared by the prover.
//!
//! Multilinear polynomials are stored as their evaluations over the boolean
//! hypercube, with the first variable in the lowest bit of the index. The
//! same arrays double as univariate polynomials in coefficient form when
//! committed or opened under the Gemini reduction.

use ark_ff::Zero;
use honk_common::types::ScalarField;
use itertools::Itertools;

/// Partially evaluates a multilinear polynomial at `u` in its first
/// variable, halving the evaluation array
pub fn fold_evaluations(evaluations: &[ScalarField], u: ScalarField) -> Vec<ScalarField> {
    evaluations
        .iter()
        .tuples()
        .map(|(even, odd)| *even + u * (*odd - even))
        .collect()
}

/// Fully evaluates a multilinear polynomial at the given point
pub fn evaluate_multilinear(evaluations: &[ScalarField], point: &[ScalarField]) -> ScalarField {
    let mut current = evaluations.to_vec();
    for u in point {
        current = fold_evaluations(&current, *u);
    }
    current[0]
}

/// Shifts a polynomial down by one coefficient, i.e. computes the
/// coefficients of `p(X) / X` for a polynomial with `p(0) = 0`
pub fn shifted(coeffs: &[ScalarField]) -> Vec<ScalarField> {
    let mut shifted = coeffs[1..].to_vec();
    shifted.push(ScalarField::zero());
    shifted
}

/// Evaluates a univariate polynomial in coefficient form via Horner's method
pub fn evaluate_univariate(coeffs: &[ScalarField], point: ScalarField) -> ScalarField {
    coeffs
        .iter()
        .rev()
        .fold(ScalarField::zero(), |acc, coeff| acc * point + coeff)
}

/// Computes the quotient `(p(X) - p(z)) / (X - z)` by synthetic division
pub fn divide_by_linear(coeffs: &[ScalarField], z: ScalarField) -> Vec<ScalarField> {
    let mut quotient = vec![ScalarField::zero(); coeffs.len().saturating_sub(1)];
    let mut acc = ScalarField::zero();
    for i in (1..coeffs.len()).rev() {
        acc = acc * z + coeffs[i];
        quotient[i - 1] = acc;
    }
    quotient
}

/// Adds `scaling * source` into `target`, coefficient-wise
pub fn add_scaled(target: &mut [ScalarField], source: &[ScalarField], scaling: ScalarField) {
    for (target_coeff, source_coeff) in target.iter_mut().zip(source.iter()) {
        *target_coeff += scaling * source_coeff;
    }
}

#[cfg(test)]
mod tests {
    use ark_ff::{One, Zero};
    use ark_std::UniformRand;
    use honk_common::types::ScalarField;
    use rand::thread_rng;

    use super::{divide_by_linear, evaluate_multilinear, evaluate_univariate, shifted};

    /// Multilinear evaluation must match the eq-weighted sum over the
    /// hypercube
    #[test]
    fn test_multilinear_evaluation() {
        let mut rng = thread_rng();
        let num_vars = 3;
        let evaluations: Vec<ScalarField> = (0..1 << num_vars)
            .map(|_| ScalarField::rand(&mut rng))
            .collect();
        let point: Vec<ScalarField> = (0..num_vars).map(|_| ScalarField::rand(&mut rng)).collect();

        let mut expected = ScalarField::zero();
        for (index, evaluation) in evaluations.iter().enumerate() {
            let mut weight = ScalarField::one();
            for (bit, u) in point.iter().enumerate() {
                if index >> bit & 1 == 1 {
                    weight *= u;
                } else {
                    weight *= ScalarField::one() - u;
                }
            }
            expected += weight * evaluation;
        }

        assert_eq!(evaluate_multilinear(&evaluations, &point), expected);
    }

    /// The multilinear extensions of the first- and last-row indicators
    /// evaluate to the expected products of the point's coordinates
    #[test]
    fn test_lagrange_indicator_evaluations() {
        let mut rng = thread_rng();
        for num_vars in [2usize, 3, 4] {
            let n = 1 << num_vars;
            let mut lagrange_first = vec![ScalarField::zero(); n];
            lagrange_first[0] = ScalarField::one();
            let mut lagrange_last = vec![ScalarField::zero(); n];
            lagrange_last[n - 1] = ScalarField::one();

            let point: Vec<ScalarField> =
                (0..num_vars).map(|_| ScalarField::rand(&mut rng)).collect();

            let expected_first: ScalarField =
                point.iter().map(|u| ScalarField::one() - u).product();
            let expected_last: ScalarField = point.iter().copied().product();

            assert_eq!(evaluate_multilinear(&lagrange_first, &point), expected_first);
            assert_eq!(evaluate_multilinear(&lagrange_last, &point), expected_last);
        }
    }

    /// Synthetic division must reconstruct the dividend
    #[test]
    fn test_divide_by_linear() {
        let mut rng = thread_rng();
        let coeffs: Vec<ScalarField> = (0..8).map(|_| ScalarField::rand(&mut rng)).collect();
        let z = ScalarField::rand(&mut rng);
        let quotient = divide_by_linear(&coeffs, z);

        // Check p(x) == q(x) * (x - z) + p(z) at a random point
        let x = ScalarField::rand(&mut rng);
        let lhs = evaluate_univariate(&coeffs, x);
        let rhs = evaluate_univariate(&quotient, x) * (x - z) + evaluate_univariate(&coeffs, z);
        assert_eq!(lhs, rhs);
    }

    /// The shift is exact division by X
    #[test]
    fn test_shifted() {
        let mut rng = thread_rng();
        let mut coeffs: Vec<ScalarField> = (0..8).map(|_| ScalarField::rand(&mut rng)).collect();
        coeffs[0] = ScalarField::zero();

        let x = ScalarField::rand(&mut rng);
        assert_eq!(
            evaluate_univariate(&shifted(&coeffs), x) * x,
            evaluate_univariate(&coeffs, x)
        );
    }
}
