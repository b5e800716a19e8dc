// Copyright 2024-2025 Irreducible Inc.

use super::{FiatShamirTranscript, HashOracle};
use ark_ff::{BigInteger, PrimeField};
use digest::Digest;
use groestl_crypto::Groestl256;
use std::{fmt, marker::PhantomData};

/// [`HashOracle`] over a byte-oriented cryptographic hash.
///
/// The digest input is a domain tag (`1` for a lone message, `2` for a chained pair) followed by
/// the little-endian canonical encodings of the operands. The digest is reduced modulo the field
/// characteristic.
pub struct DigestOracle<H> {
	_marker: PhantomData<H>,
}

impl<H> DigestOracle<H> {
	pub fn new() -> Self {
		Self {
			_marker: PhantomData,
		}
	}
}

impl<H> Default for DigestOracle<H> {
	fn default() -> Self {
		Self::new()
	}
}

impl<H> Clone for DigestOracle<H> {
	fn clone(&self) -> Self {
		Self::new()
	}
}

impl<H> fmt::Debug for DigestOracle<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DigestOracle").finish()
	}
}

impl<F: PrimeField, H: Digest> HashOracle<F> for DigestOracle<H> {
	fn hash(&self, message: &F, prev: Option<&F>) -> F {
		let mut hasher = H::new();
		match prev {
			None => {
				Digest::update(&mut hasher, [1u8]);
				Digest::update(&mut hasher, message.into_bigint().to_bytes_le());
			}
			Some(prev) => {
				Digest::update(&mut hasher, [2u8]);
				Digest::update(&mut hasher, message.into_bigint().to_bytes_le());
				Digest::update(&mut hasher, prev.into_bigint().to_bytes_le());
			}
		}
		F::from_le_bytes_mod_order(&hasher.finalize())
	}
}

pub type Groestl256Transcript<F> = FiatShamirTranscript<F, DigestOracle<Groestl256>>;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transcript::ArithmeticTranscript;
	use ark_bn254::Fr;
	use ark_ff::Field;

	#[test]
	fn test_transcripts_agree_on_same_messages() {
		let messages = [Fr::from(3u64), Fr::from(9u64), -Fr::from(4u64)];

		let mut prover = Groestl256Transcript::<Fr>::default();
		let mut verifier = Groestl256Transcript::<Fr>::default();
		prover.update(&[Fr::ZERO]);
		verifier.update(&[Fr::ZERO]);

		assert_eq!(prover.next_n(2, &messages), verifier.next_n(2, &messages));
		assert_eq!(prover.next(&[]), verifier.next(&[]));
	}

	#[test]
	fn test_order_and_seed_sensitive() {
		let mut a = Groestl256Transcript::<Fr>::default();
		let mut b = Groestl256Transcript::<Fr>::default();
		a.update(&[Fr::ZERO]);
		b.update(&[Fr::ONE]);
		assert_ne!(a.draw(1), b.draw(1));

		let mut c = Groestl256Transcript::<Fr>::default();
		let mut d = Groestl256Transcript::<Fr>::default();
		c.update(&[Fr::from(1u64), Fr::from(2u64)]);
		d.update(&[Fr::from(2u64), Fr::from(1u64)]);
		assert_ne!(c.draw(1), d.draw(1));
	}

	#[test]
	fn test_pair_differs_from_single() {
		let oracle = DigestOracle::<Groestl256>::new();
		let x = Fr::from(5u64);
		assert_ne!(
			HashOracle::<Fr>::hash(&oracle, &x, None),
			HashOracle::<Fr>::hash(&oracle, &x, Some(&Fr::ZERO))
		);
	}
}
