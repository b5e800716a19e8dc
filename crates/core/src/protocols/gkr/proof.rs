// Copyright 2024-2025 Irreducible Inc.

use crate::protocols::sumcheck::SumcheckProof;
use ark_ff::PrimeField;
use bytes::{Buf, BufMut};
use gkr_utils::{bail, DeserializeBytes, SerializationError, SerializeBytes};
use serde::{Deserialize, Serialize};

/// A GKR proof: one sumcheck proof per wire, grouped by layer.
///
/// As JSON the proof is a list of layers, each a list of
/// `{"partialSumPolys": [[...], ...], "finalEvalProof": [...]}` objects with field elements as
/// decimal strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Proof<F: PrimeField>(pub Vec<Vec<SumcheckProof<F>>>);

impl<F: PrimeField> Proof<F> {
	pub fn n_layers(&self) -> usize {
		self.0.len()
	}

	pub fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
		let mut buf = Vec::new();
		SerializeBytes::serialize(self, &mut buf)?;
		Ok(buf)
	}

	/// Decodes a proof, rejecting trailing bytes.
	pub fn from_bytes(mut bytes: &[u8]) -> Result<Self, SerializationError> {
		let proof = DeserializeBytes::deserialize(&mut bytes)?;
		if !bytes.is_empty() {
			bail!(SerializationError::InvalidEncoding(format!(
				"{} trailing bytes after proof",
				bytes.len()
			)));
		}
		Ok(proof)
	}
}

impl<F: PrimeField> SerializeBytes for Proof<F> {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		SerializeBytes::serialize(&self.0, write_buf)
	}
}

impl<F: PrimeField> DeserializeBytes for Proof<F> {
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError> {
		Ok(Self(DeserializeBytes::deserialize(read_buf)?))
	}
}
