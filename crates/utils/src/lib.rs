// Copyright 2024-2025 Irreducible Inc.

//! Small utilities shared by the GKR crates: error macros, checked arithmetic, byte
//! serialization, thread pool and tracing setup.

pub mod checked_arithmetics;
pub mod env;
pub mod error_utils;
pub mod rayon;
pub mod serialization;
pub mod tracing;

pub use serialization::{DeserializeBytes, Error as SerializationError, SerializeBytes};
