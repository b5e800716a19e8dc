// Copyright 2024-2025 Irreducible Inc.

//! Non-interactive GKR proofs for layered arithmetic circuits over prime fields.
//!
//! * [`protocols::gkr`] holds circuits, gates, wire assignments and the GKR prover and verifier.
//! * [`protocols::sumcheck`] is the sumcheck engine the GKR protocol runs once per wire.
//! * [`transcript`] provides the Fiat-Shamir transcripts, cryptographic and table-driven.
//! * [`field`] converts field elements to and from decimal text and bytes.

pub mod field;
pub mod protocols;
pub mod transcript;
