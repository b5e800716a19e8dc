// Copyright 2024-2025 Irreducible Inc.

use crate::{
	field::{decimal_seq, deserialize_elements, serialize_elements},
	transcript::ArithmeticTranscript,
};
use ark_ff::PrimeField;
use bytes::{Buf, BufMut};
use getset::{CopyGetters, Getters};
use gkr_math::evaluate_univariate;
use gkr_utils::{DeserializeBytes, SerializationError, SerializeBytes};
use serde::{Deserialize, Serialize};

/// A univariate polynomial in monomial basis.
///
/// The coefficient at position `i` in the inner vector corresponds to the term $X^i$.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct RoundCoeffs<F: PrimeField>(#[serde(with = "decimal_seq")] pub Vec<F>);

impl<F: PrimeField> RoundCoeffs<F> {
	pub fn evaluate(&self, x: F) -> F {
		evaluate_univariate(&self.0, x)
	}

	/// $p(0) + p(1)$, the value the round polynomial must match against the running sum.
	pub fn sum_over_boolean(&self) -> F {
		self.0.first().copied().unwrap_or(F::ZERO) + self.0.iter().sum::<F>()
	}
}

/// The transcript of one sumcheck: the round polynomials in order, then the final evaluation proof.
///
/// The final evaluation proof is opaque to the sumcheck itself. The GKR protocol fills it with the
/// evaluations of a gate's input wires at the final challenge point.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct SumcheckProof<F: PrimeField> {
	#[serde(default)]
	pub partial_sum_polys: Vec<RoundCoeffs<F>>,
	#[serde(default, with = "decimal_seq")]
	pub final_eval_proof: Vec<F>,
}

impl<F: PrimeField> SumcheckProof<F> {
	pub fn is_empty(&self) -> bool {
		self.partial_sum_polys.is_empty() && self.final_eval_proof.is_empty()
	}
}

/// A batch of claims that the same-degree polynomials sum to `evals` over the hypercube.
#[derive(Debug, Clone, CopyGetters, Getters)]
pub struct SumcheckClaim<F: PrimeField> {
	#[getset(get_copy = "pub")]
	n_vars: usize,
	#[getset(get_copy = "pub")]
	degree: usize,
	#[getset(get = "pub")]
	evals: Vec<F>,
}

impl<F: PrimeField> SumcheckClaim<F> {
	pub fn new(n_vars: usize, degree: usize, evals: Vec<F>) -> Self {
		Self {
			n_vars,
			degree,
			evals,
		}
	}
}

/// The outcome of a successful sumcheck verification.
///
/// The verifier still has to check that the batched polynomial evaluates to `eval` at
/// `challenges`, with the batch combined using `batch_coeffs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedClaim<F: PrimeField> {
	pub batch_coeffs: Vec<F>,
	pub challenges: Vec<F>,
	pub eval: F,
}

/// Draws one batching coefficient per claim, or uses the single coefficient one for a lone claim.
pub fn draw_batch_coeffs<F, Transcript>(transcript: &mut Transcript, n_claims: usize) -> Vec<F>
where
	F: PrimeField,
	Transcript: ArithmeticTranscript<F>,
{
	if n_claims >= 2 {
		transcript.draw(n_claims)
	} else {
		vec![F::ONE; n_claims]
	}
}

impl<F: PrimeField> SerializeBytes for RoundCoeffs<F> {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		serialize_elements(&self.0, write_buf)
	}
}

impl<F: PrimeField> DeserializeBytes for RoundCoeffs<F> {
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError> {
		Ok(Self(deserialize_elements(read_buf)?))
	}
}

impl<F: PrimeField> SerializeBytes for SumcheckProof<F> {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		SerializeBytes::serialize(&self.partial_sum_polys, &mut write_buf)?;
		serialize_elements(&self.final_eval_proof, &mut write_buf)
	}
}

impl<F: PrimeField> DeserializeBytes for SumcheckProof<F> {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError> {
		Ok(Self {
			partial_sum_polys: DeserializeBytes::deserialize(&mut read_buf)?,
			final_eval_proof: deserialize_elements(&mut read_buf)?,
		})
	}
}
