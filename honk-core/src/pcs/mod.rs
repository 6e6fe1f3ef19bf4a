//! The polynomial commitment opening reduction chain: Gemini reduces the
//! multilinear evaluation claim to univariate opening claims, Shplonk batches
//! those into a single claim, and KZG reduces that claim to a pairing check.

pub mod gemini;
pub mod kzg;
pub mod shplonk;
