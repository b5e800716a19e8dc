// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("hash table key {key:?} must hold one or two comma-separated field elements")]
	InvalidKeyArity { key: String },
	#[error("invalid field element in hash table key {key:?}: {source}")]
	InvalidKey {
		key: String,
		#[source]
		source: crate::field::Error,
	},
}
