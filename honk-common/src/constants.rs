//! Constants that parameterize the Standard Honk proof system

/// The number of wires per gate
pub const PROGRAM_WIDTH: usize = 3;

/// The number of selector polynomials in the arithmetization
pub const NUM_SELECTORS: usize = 5;

/// The maximum number of evaluations needed to represent a sumcheck round
/// univariate, i.e. one more than the maximum degree of a relation
pub const MAX_RELATION_LENGTH: usize = 5;

/// The number of relations combined into the full Honk relation
pub const NUM_RELATIONS: usize = 3;

/// The number of polynomials committed to in the verification key
pub const NUM_PRECOMPUTED_POLYNOMIALS: usize = 13;

/// The number of polynomials opened at the sumcheck evaluation point
/// without a shift
pub const NUM_UNSHIFTED_POLYNOMIALS: usize = 17;

/// The total number of polynomials tracked by the protocol, including
/// the shifted grand product polynomial
pub const NUM_POLYNOMIALS: usize = 18;

// The indices of the tracked polynomials in batching order. This order fixes
// the layout of the verification key commitments, the sumcheck evaluation
// vector, and the powers of the batching challenge rho.

/// The index of the multiplication selector
pub const Q_M: usize = 0;
/// The index of the left wire selector
pub const Q_L: usize = 1;
/// The index of the right wire selector
pub const Q_R: usize = 2;
/// The index of the output wire selector
pub const Q_O: usize = 3;
/// The index of the constant selector
pub const Q_C: usize = 4;
/// The index of the first permutation polynomial
pub const SIGMA_1: usize = 5;
/// The index of the second permutation polynomial
pub const SIGMA_2: usize = 6;
/// The index of the third permutation polynomial
pub const SIGMA_3: usize = 7;
/// The index of the first wire identity polynomial
pub const ID_1: usize = 8;
/// The index of the second wire identity polynomial
pub const ID_2: usize = 9;
/// The index of the third wire identity polynomial
pub const ID_3: usize = 10;
/// The index of the first-row Lagrange indicator polynomial
pub const LAGRANGE_FIRST: usize = 11;
/// The index of the last-row Lagrange indicator polynomial
pub const LAGRANGE_LAST: usize = 12;
/// The index of the left wire polynomial
pub const W_L: usize = 13;
/// The index of the right wire polynomial
pub const W_R: usize = 14;
/// The index of the output wire polynomial
pub const W_O: usize = 15;
/// The index of the permutation grand product polynomial
pub const Z_PERM: usize = 16;
/// The index of the shifted permutation grand product polynomial
pub const Z_PERM_SHIFT: usize = 17;

/// The transcript has a 64 byte state size to accommodate two hash digests.
pub const TRANSCRIPT_STATE_SIZE: usize = 64;

/// The number of bytes in a hash digest used by the transcript
pub const HASH_OUTPUT_SIZE: usize = 32;

/// The number of bytes of hash output to sample for a challenge
pub const HASH_SAMPLE_BYTES: usize = 48;

/// The number of bytes to represent field elements of the base or scalar fields
/// for the G1 curve group, as well as the base field which is extended for the
/// G2 curve group
pub const NUM_BYTES_FELT: usize = 32;

/// The index at which to split a hash output so that it can be directly
/// converted to a field element.
pub const SPLIT_INDEX: usize = NUM_BYTES_FELT - 1;

/// The number of u64s it takes to represent a field element
pub const NUM_U64S_FELT: usize = 4;

/// The number of bytes it takes to represent a u64
pub const NUM_BYTES_U64: usize = 8;
