//! A reference implementation of the Standard Honk proving side, used to
//! exercise the verifier in tests

pub mod circuit;
pub mod polynomials;
pub mod prover;
pub mod srs;
pub mod test_data;
pub mod transcript;
