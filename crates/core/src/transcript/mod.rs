// Copyright 2024-2025 Irreducible Inc.

//! Fiat-Shamir transcripts over prime field elements.
//!
//! A transcript absorbs field elements sent by the prover and hands out challenges derived from
//! everything absorbed so far. Prover and verifier drive identical transcripts, so their challenge
//! sequences agree exactly when the messages agree.
//!
//! [`FiatShamirTranscript`] implements the state machine once, over any [`HashOracle`]:
//! [`DigestOracle`] is the cryptographic instantiation and [`MapHashOracle`] a lookup-table test
//! double that replays recorded hash values.

mod digest_oracle;
mod error;
mod map_hash;

pub use digest_oracle::*;
pub use error::Error;
pub use map_hash::*;

use ark_ff::Field;
use auto_impl::auto_impl;

/// The prover/verifier view of a Fiat-Shamir transcript.
#[auto_impl(&mut)]
pub trait ArithmeticTranscript<F: Field> {
	/// Absorbs `messages` in order. With no messages the current state is re-hashed.
	fn update(&mut self, messages: &[F]);

	/// Draws `count` challenges from the absorbed data.
	fn draw(&mut self, count: usize) -> Vec<F>;

	/// Absorbs `messages`, if any, and draws one challenge.
	fn next(&mut self, messages: &[F]) -> F {
		if !messages.is_empty() {
			self.update(messages);
		}
		self.draw(1)[0]
	}

	/// Absorbs `messages`, if any, and draws `count` challenges.
	fn next_n(&mut self, count: usize, messages: &[F]) -> Vec<F> {
		if !messages.is_empty() {
			self.update(messages);
		}
		self.draw(count)
	}
}

/// A two-to-one hash over field elements.
///
/// `prev` is the transcript state the message is chained onto, absent for the first message.
#[auto_impl(&)]
pub trait HashOracle<F> {
	fn hash(&self, message: &F, prev: Option<&F>) -> F;
}

/// Sponge-like transcript chaining every absorbed element through a [`HashOracle`].
#[derive(Debug, Clone)]
pub struct FiatShamirTranscript<F, H> {
	oracle: H,
	state: Option<F>,
	result_available: bool,
}

impl<F, H> FiatShamirTranscript<F, H> {
	pub fn new(oracle: H) -> Self {
		Self {
			oracle,
			state: None,
			result_available: false,
		}
	}

	pub fn oracle(&self) -> &H {
		&self.oracle
	}
}

impl<F, H: Default> Default for FiatShamirTranscript<F, H> {
	fn default() -> Self {
		Self::new(H::default())
	}
}

impl<F: Field, H: HashOracle<F>> ArithmeticTranscript<F> for FiatShamirTranscript<F, H> {
	fn update(&mut self, messages: &[F]) {
		if messages.is_empty() {
			// A fresh transcript has nothing to re-hash; zero stands in for the empty state.
			let state = self.state.unwrap_or(F::ZERO);
			self.state = Some(self.oracle.hash(&state, None));
		} else {
			for message in messages {
				self.state = Some(self.oracle.hash(message, self.state.as_ref()));
			}
		}
		self.result_available = true;
	}

	fn draw(&mut self, count: usize) -> Vec<F> {
		(0..count)
			.map(|_| {
				if !self.result_available {
					self.update(&[]);
				}
				self.result_available = false;
				self.state.unwrap_or(F::ZERO)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ark_bn254::Fr;
	use std::cell::RefCell;

	/// Records every query and answers with a counter.
	#[derive(Default)]
	struct CountingOracle {
		queries: RefCell<Vec<(Fr, Option<Fr>)>>,
	}

	impl HashOracle<Fr> for CountingOracle {
		fn hash(&self, message: &Fr, prev: Option<&Fr>) -> Fr {
			let mut queries = self.queries.borrow_mut();
			queries.push((*message, prev.copied()));
			Fr::from(100 + queries.len() as u64)
		}
	}

	#[test]
	fn test_update_chains_messages() {
		let mut transcript = FiatShamirTranscript::new(CountingOracle::default());
		transcript.update(&[Fr::from(7u64), Fr::from(8u64)]);
		assert_eq!(
			*transcript.oracle().queries.borrow(),
			vec![(Fr::from(7u64), None), (Fr::from(8u64), Some(Fr::from(101u64)))]
		);
	}

	#[test]
	fn test_draw_uses_fresh_result_once() {
		let mut transcript = FiatShamirTranscript::new(CountingOracle::default());
		transcript.update(&[Fr::ZERO]);
		// the first challenge is the state after the update, later ones re-hash it
		let challenges = transcript.draw(3);
		assert_eq!(challenges, vec![Fr::from(101u64), Fr::from(102u64), Fr::from(103u64)]);
		assert_eq!(
			transcript.oracle().queries.borrow()[1..],
			[(Fr::from(101u64), None), (Fr::from(102u64), None)]
		);
	}

	#[test]
	fn test_next_absorbs_messages_first() {
		let mut transcript = FiatShamirTranscript::new(CountingOracle::default());
		transcript.update(&[Fr::ZERO]);
		let challenge = transcript.next(&[Fr::from(5u64)]);
		assert_eq!(challenge, Fr::from(102u64));
		// no messages and no fresh result: re-hash
		assert_eq!(transcript.next(&[]), Fr::from(103u64));
		assert_eq!(transcript.next_n(2, &[]), vec![Fr::from(104u64), Fr::from(105u64)]);
	}

	#[test]
	fn test_fresh_transcript_hashes_zero() {
		let mut transcript = FiatShamirTranscript::new(CountingOracle::default());
		assert_eq!(transcript.draw(1), vec![Fr::from(101u64)]);
		assert_eq!(*transcript.oracle().queries.borrow(), vec![(Fr::ZERO, None)]);
	}
}
