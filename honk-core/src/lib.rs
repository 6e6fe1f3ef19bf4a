//! Core Honk proof verification, defined agnostically of the embedding
//! environment

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod pcs;
pub mod public_inputs;
pub mod relations;
pub mod sumcheck;
pub mod transcript;
pub mod verifier;
