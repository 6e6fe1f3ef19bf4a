//! Shared fixtures for prover and verifier tests

use ark_ff::{One, Zero};
use ark_std::UniformRand;
use honk_common::types::ScalarField;
use rand::{CryptoRng, RngCore};

use super::circuit::{AddTriple, CircuitBuilder, MulTriple};

/// Samples a vector of random scalars
pub fn random_scalars<R: CryptoRng + RngCore>(n: usize, rng: &mut R) -> Vec<ScalarField> {
    (0..n).map(|_| ScalarField::rand(rng)).collect()
}

/// Builds a satisfied circuit exercising public inputs, both gate types, and
/// an explicit copy constraint: public inputs 3 and 4, with 3 + 4 = 7 and
/// 3 * 4 = 12, the product pinned to a constant.
///
/// The trace has two public input rows and three gate rows, for a domain of
/// size eight.
pub fn sample_circuit() -> CircuitBuilder {
    let one = ScalarField::one();
    let mut builder = CircuitBuilder::new();

    let three = builder.add_public_variable(ScalarField::from(3u64));
    let four = builder.add_public_variable(ScalarField::from(4u64));

    let seven = builder.add_variable(ScalarField::from(7u64));
    builder.create_add_gate(&AddTriple {
        a: three,
        b: four,
        c: seven,
        a_scaling: one,
        b_scaling: one,
        c_scaling: -one,
        const_scaling: ScalarField::zero(),
    });

    let twelve = builder.add_variable(ScalarField::from(12u64));
    builder.create_mul_gate(&MulTriple {
        a: three,
        b: four,
        c: twelve,
        mul_scaling: one,
        c_scaling: -one,
        const_scaling: ScalarField::zero(),
    });

    let pinned_twelve = builder.put_constant_variable(ScalarField::from(12u64));
    builder.assert_equal(twelve, pinned_twelve);

    builder
}

#[cfg(test)]
mod tests {
    use super::sample_circuit;

    /// The fixture's trace dimensions are relied on by proof layout tests
    #[test]
    fn test_sample_circuit_dimensions() {
        let builder = sample_circuit();
        assert_eq!(builder.circuit_size(), 8);
    }
}
