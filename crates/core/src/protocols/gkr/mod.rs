// Copyright 2024-2025 Irreducible Inc.

//! The GKR protocol for layered arithmetic circuits.
//!
//! The prover shows that a [`WireAssignment`] correctly evaluates a [`Circuit`] on many parallel
//! instances. The verifier sees only the input and output values.
//!
//! Every wire's values across the $N = 2^n$ instances define a multilinear extension over $n$
//! variables. The protocol starts from a random point $\rho$ and the claim that each output wire's
//! extension evaluates at $\rho$ to what the outputs say. It then walks the wires from the output
//! layer to the input layer. The claims on a wire are batched with random coefficients and reduced
//! by one sumcheck to claims on the wire's inputs at a fresh random point, until only claims on
//! input wires remain, which the verifier checks against the inputs it knows.
//!
//! See [Thaler13] Section 3 for background on the GKR protocol.
//!
//! [Thaler13]: <https://eprint.iacr.org/2013/351>

mod assignment;
mod circuit;
mod claims;
mod error;
mod gate;
mod gate_sumcheck;
mod proof;
mod prove;
mod verify;

pub use assignment::*;
pub use circuit::*;
pub use claims::LayerClaim;
pub use error::*;
pub use gate::*;
pub use gate_sumcheck::GateSumcheckProver;
pub use proof::*;
pub use prove::*;
pub use verify::*;
