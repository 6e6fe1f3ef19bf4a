//! Native implementations of the hashing and curve arithmetic backends

use alloy_primitives::keccak256;
use ark_bn254::Bn254;
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::One;
use honk_common::{
    backends::{G1ArithmeticBackend, G1ArithmeticError, HashBackend},
    constants::HASH_OUTPUT_SIZE,
    types::{G1Affine, G2Affine, ScalarField},
};

/// A hashing backend that runs natively, i.e.
/// without an accelerated Keccak implementation
pub struct NativeHasher;

impl HashBackend for NativeHasher {
    fn hash(input: &[u8]) -> [u8; HASH_OUTPUT_SIZE] {
        keccak256(input).0
    }
}

/// A G1 arithmetic backend implemented with Arkworks operations
pub struct ArkG1ArithmeticBackend;

impl G1ArithmeticBackend for ArkG1ArithmeticBackend {
    fn ec_add(a: G1Affine, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        Ok((a + b).into_affine())
    }

    fn ec_scalar_mul(a: ScalarField, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        let mut b_group = b.into_group();
        b_group *= a;
        Ok(b_group.into_affine())
    }

    fn ec_pairing_check(
        a_1: G1Affine,
        b_1: G2Affine,
        a_2: G1Affine,
        b_2: G2Affine,
    ) -> Result<bool, G1ArithmeticError> {
        Ok(Bn254::multi_pairing([a_1, -a_2], [b_1, b_2]).0
            == <Bn254 as Pairing>::TargetField::one())
    }
}
