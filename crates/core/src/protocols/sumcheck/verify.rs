// Copyright 2024-2025 Irreducible Inc.

use super::{
	common::{draw_batch_coeffs, ReducedClaim, SumcheckClaim, SumcheckProof},
	error::{Error, VerificationError},
};
use crate::transcript::ArithmeticTranscript;
use ark_ff::PrimeField;
use gkr_utils::{bail, ensure};
use tracing::instrument;

/// Verifies the rounds of a batched sumcheck, reducing the claim to one evaluation.
///
/// Drives the transcript exactly as [`prove`](super::prove) does. The returned claim must still be
/// checked against the polynomial being summed, which the caller knows and this function does not.
#[instrument(skip_all, name = "sumcheck::verify", level = "debug")]
pub fn verify<F, Transcript>(
	claim: &SumcheckClaim<F>,
	proof: &SumcheckProof<F>,
	mut transcript: Transcript,
) -> Result<ReducedClaim<F>, Error>
where
	F: PrimeField,
	Transcript: ArithmeticTranscript<F>,
{
	let n_claims = claim.evals().len();
	if n_claims == 0 {
		bail!(Error::EmptyClaims);
	}

	let n_rounds = proof.partial_sum_polys.len();
	ensure!(
		n_rounds == claim.n_vars(),
		VerificationError::NumberOfRounds {
			expected: claim.n_vars(),
			actual: n_rounds,
		}
	);

	let batch_coeffs = draw_batch_coeffs(&mut transcript, n_claims);
	let mut sum = batch_coeffs
		.iter()
		.zip(claim.evals())
		.map(|(&coeff, &eval)| coeff * eval)
		.sum::<F>();

	let mut challenges = Vec::with_capacity(n_rounds);
	for (round, round_coeffs) in proof.partial_sum_polys.iter().enumerate() {
		let n_coeffs = round_coeffs.0.len();
		ensure!(n_coeffs > 0, VerificationError::NumberOfCoefficients { round });
		ensure!(
			n_coeffs <= claim.degree() + 1,
			VerificationError::DegreeTooHigh {
				round,
				degree: n_coeffs - 1,
				max_degree: claim.degree(),
			}
		);
		ensure!(
			round_coeffs.sum_over_boolean() == sum,
			VerificationError::RoundSumMismatch { round }
		);

		let challenge = transcript.next(&round_coeffs.0);
		sum = round_coeffs.evaluate(challenge);
		challenges.push(challenge);
	}

	if !proof.final_eval_proof.is_empty() {
		transcript.update(&proof.final_eval_proof);
	}

	Ok(ReducedClaim {
		batch_coeffs,
		challenges,
		eval: sum,
	})
}
