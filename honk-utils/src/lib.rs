//! Testing utilities for the Honk verifier: native backend implementations,
//! a minimal circuit builder, and an honest prover

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod crypto;
pub mod proof_system;
