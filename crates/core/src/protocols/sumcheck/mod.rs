// Copyright 2024-2025 Irreducible Inc.

//! The sumcheck protocol over multilinear composites.
//!
//! A sumcheck claim asserts that a batch of polynomials $g_j$ over the $n$-dimensional boolean
//! hypercube sums to given values. The claims are combined into $g = \sum_j \lambda_j g_j$ with
//! batching coefficients drawn from the transcript, and $n$ interactive rounds reduce the combined
//! claim to the evaluation of $g$ at a single random point.
//!
//! The protocol is independent of the polynomials themselves: provers implement
//! [`SumcheckProver`] and the verifier checks the reduced claim with its own knowledge of $g$.

mod common;
mod error;
mod prove;
mod verify;

pub use common::*;
pub use error::*;
pub use prove::*;
pub use verify::*;
