//! Computation of the public input correction factor for the permutation
//! argument.

use ark_ff::{Field, One};
use honk_common::types::ScalarField;

/// Computes the correction factor `delta` accounting for the public input
/// rows of the execution trace.
///
/// Public input wires are cut out of their copy cycles by mapping the first
/// wire's permutation image on row `i` to the external value `-(i + 1)`
/// instead of the in-trace position `n + i`. The permutation grand product
/// then telescopes to
///
/// prod_i (p_i + beta * (n + i) + gamma) / (p_i - beta * (i + 1) + gamma)
///
/// rather than to one, and the verifier supplies this quotient to the grand
/// product relation.
///
/// Returns `None` if the denominator vanishes, which cannot happen for
/// honestly sampled challenges.
pub fn compute_public_input_delta(
    public_inputs: &[ScalarField],
    beta: ScalarField,
    gamma: ScalarField,
    circuit_size: u64,
) -> Option<ScalarField> {
    let mut numerator = ScalarField::one();
    let mut denominator = ScalarField::one();

    for (i, public_input) in public_inputs.iter().enumerate() {
        let idx = ScalarField::from(i as u64);
        numerator *= *public_input + beta * (ScalarField::from(circuit_size) + idx) + gamma;
        denominator *= *public_input - beta * (idx + ScalarField::one()) + gamma;
    }

    Some(numerator * denominator.inverse()?)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use ark_ff::One;
    use ark_std::UniformRand;
    use honk_common::types::ScalarField;
    use rand::thread_rng;

    use super::compute_public_input_delta;

    /// With no public inputs the correction factor is one
    #[test]
    fn test_empty_public_inputs() {
        let mut rng = thread_rng();
        let beta = ScalarField::rand(&mut rng);
        let gamma = ScalarField::rand(&mut rng);
        let delta = compute_public_input_delta(&[], beta, gamma, 8).unwrap();
        assert_eq!(delta, ScalarField::one());
    }

    /// The quotient orientation: the in-trace identity terms form the
    /// numerator, the external cycle-break terms the denominator
    #[test]
    fn test_delta_orientation() {
        let mut rng = thread_rng();
        let n = 8u64;
        let beta = ScalarField::rand(&mut rng);
        let gamma = ScalarField::rand(&mut rng);
        let public_inputs: Vec<ScalarField> =
            (0..3).map(|_| ScalarField::rand(&mut rng)).collect();

        let mut expected_numerator = ScalarField::one();
        let mut expected_denominator = ScalarField::one();
        for (i, public_input) in public_inputs.iter().enumerate() {
            expected_numerator *=
                *public_input + beta * ScalarField::from(n + i as u64) + gamma;
            expected_denominator *=
                *public_input - beta * ScalarField::from(i as u64 + 1) + gamma;
        }

        let delta = compute_public_input_delta(&public_inputs, beta, gamma, n).unwrap();
        assert_eq!(delta * expected_denominator, expected_numerator);
    }

    /// The computation is a pure function of its arguments: repeated calls
    /// with identical inputs agree
    #[test]
    fn test_delta_idempotent() {
        let mut rng = thread_rng();
        let beta = ScalarField::rand(&mut rng);
        let gamma = ScalarField::rand(&mut rng);
        let public_inputs: Vec<ScalarField> =
            (0..3).map(|_| ScalarField::rand(&mut rng)).collect();

        let first = compute_public_input_delta(&public_inputs, beta, gamma, 8).unwrap();
        let second = compute_public_input_delta(&public_inputs, beta, gamma, 8).unwrap();
        assert_eq!(first, second);
    }

    /// A vanishing denominator yields no correction factor
    #[test]
    fn test_zero_denominator() {
        let one = ScalarField::one();
        // p_0 - beta * 1 + gamma = 1 - 1 + 0 = 0
        let delta = compute_public_input_delta(&[one], one, ScalarField::from(0u64), 8);
        assert!(delta.is_none());
    }
}
