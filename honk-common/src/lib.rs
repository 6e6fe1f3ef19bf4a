//! Common types, constants, and serialization logic shared between the
//! Honk verifier and its test tooling

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod backends;
pub mod constants;
pub mod custom_serde;
pub mod serde_def_types;
pub mod types;
