// Copyright 2023-2025 Irreducible Inc.

//! Interactive protocols made non-interactive with the Fiat-Shamir transformation.
//!
//! Prover and verifier drive identical transcripts. Each round the prover's message is absorbed
//! before the round's challenge is drawn, so the prover-side implementations simulate the verifier
//! to build the same transcript.

pub mod gkr;
pub mod sumcheck;
