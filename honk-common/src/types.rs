//! Common types used throughout the verifier.

use alloc::vec::Vec;
use ark_bn254::{g1::Config as G1Config, g2::Config as G2Config, Fq, Fq2, Fr};
use ark_ec::short_weierstrass::Affine;
use ark_ff::{Fp256, MontBackend};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{
    constants::{NUM_POLYNOMIALS, NUM_PRECOMPUTED_POLYNOMIALS, NUM_U64S_FELT},
    serde_def_types::*,
};

/// Type alias for an element of the scalar field of the Bn254 curve
pub type ScalarField = Fr;

/// Type alias for an element of the Bn254 curve's G1 pairing group
pub type G1Affine = Affine<G1Config>;

/// Type alias for an element of the Bn254 curve's G2 pairing group
pub type G2Affine = Affine<G2Config>;

/// Type alias for an element of the Bn254 curve's G1 pairing group's base field
pub type G1BaseField = Fq;

/// Type alias for an element of the Bn254 curve's G2 pairing group's base field
pub type G2BaseField = Fq2;

/// Type alias for a 256-bit prime field element in Montgomery form
pub type MontFp256<P> = Fp256<MontBackend<P, NUM_U64S_FELT>>;

/// Preprocessed information derived from the circuit definition and universal
/// SRS used by the verifier.
#[serde_as]
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct VerificationKey {
    /// The size of the multiplicative subgroup over which the circuit's
    /// polynomials are defined. Always a power of two.
    pub circuit_size: u64,
    /// The number of public inputs to the circuit
    pub num_public_inputs: u64,
    /// The commitments to the precomputed polynomials, in batching order
    #[serde_as(as = "[G1AffineDef; NUM_PRECOMPUTED_POLYNOMIALS]")]
    pub commitments: [G1Affine; NUM_PRECOMPUTED_POLYNOMIALS],
    /// The generator of the G1 group
    #[serde_as(as = "G1AffineDef")]
    pub g: G1Affine,
    /// The generator of the G2 group
    #[serde_as(as = "G2AffineDef")]
    pub h: G2Affine,
    /// The G2 commitment to the secret evaluation point
    #[serde_as(as = "G2AffineDef")]
    pub x_h: G2Affine,
}

/// A Honk proof: the raw bytes sent by the prover, in transcript order.
///
/// Elements are deserialized on the fly as the verifier replays the
/// transcript, so that every received element is absorbed exactly as it
/// appears on the wire.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Proof(pub Vec<u8>);

/// The challenges consumed by the Honk relations, obtained via a Fiat-Shamir
/// transformation.
#[derive(Clone, Copy, Debug)]
pub struct RelationParameters {
    /// The first permutation challenge
    pub beta: ScalarField,
    /// The second permutation challenge
    pub gamma: ScalarField,
    /// The correction factor accounting for public input rows in the
    /// permutation grand product
    pub public_input_delta: ScalarField,
    /// The relation-separation challenge
    pub alpha: ScalarField,
    /// The auxiliary challenge; carried for relations that scale their
    /// contributions per row, unused by the standard arithmetization
    pub zeta: ScalarField,
}

/// The output of a successful sumcheck verification: a claim that each
/// tracked polynomial evaluates as stated at the multilinear challenge point.
#[derive(Clone, Debug)]
pub struct MultilinearClaim {
    /// The multilinear challenge point, one coordinate per sumcheck round
    pub evaluation_point: Vec<ScalarField>,
    /// The claimed evaluations of the tracked polynomials, in batching order
    pub evaluations: [ScalarField; NUM_POLYNOMIALS],
}

/// A claim that a committed univariate polynomial takes the given value at
/// the given point
#[derive(Clone, Copy, Debug)]
pub struct OpeningClaim {
    /// The commitment to the claimed polynomial
    pub commitment: G1Affine,
    /// The point at which the polynomial is opened
    pub opening_point: ScalarField,
    /// The claimed evaluation
    pub evaluation: ScalarField,
}
