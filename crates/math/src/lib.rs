// Copyright 2024-2025 Irreducible Inc.

//! Mathematical primitives for the GKR prover and verifier, built atop `ark_ff` prime fields.
//!
//! This crate provides:
//!
//! * Multilinear extensions over the boolean hypercube
//! * The equality indicator polynomial and its tensor expansion
//! * Univariate interpolation and evaluation
//! * Dense matrices with inversion

mod eq_ind;
mod error;
mod matrix;
mod multilinear_extension;
mod univariate;

pub use eq_ind::*;
pub use error::*;
pub use matrix::*;
pub use multilinear_extension::*;
pub use univariate::*;
