// Copyright 2024-2025 Irreducible Inc.

use super::{
	common::{draw_batch_coeffs, RoundCoeffs, SumcheckProof},
	error::Error,
};
use crate::transcript::ArithmeticTranscript;
use ark_ff::PrimeField;
use gkr_utils::bail;
use tracing::instrument;

/// The prover side of a batched sumcheck.
///
/// The driver [`prove`] calls [`batch`](Self::batch) once, then alternates
/// [`round_coeffs`](Self::round_coeffs) and [`fold`](Self::fold) for each of the `n_vars` rounds,
/// lowest variable first, and finally [`finish`](Self::finish).
pub trait SumcheckProver<F: PrimeField> {
	fn n_vars(&self) -> usize;

	fn n_claims(&self) -> usize;

	/// Upper bound on the degree of every round polynomial.
	fn degree(&self) -> usize;

	/// Fixes the coefficients combining the claims, one per claim.
	fn batch(&mut self, batch_coeffs: &[F]) -> Result<(), Error>;

	/// The batched round polynomial in the current lowest variable.
	fn round_coeffs(&self) -> Result<RoundCoeffs<F>, Error>;

	/// Binds the current lowest variable to `challenge`.
	fn fold(&mut self, challenge: F) -> Result<(), Error>;

	/// The final evaluation proof, called after all rounds.
	fn finish(self) -> Result<Vec<F>, Error>;
}

#[derive(Debug, Clone)]
pub struct SumcheckProveOutput<F: PrimeField> {
	pub proof: SumcheckProof<F>,
	/// The sumcheck challenges, one per variable. They form the point of the reduced claim.
	pub challenges: Vec<F>,
}

/// Runs the sumcheck prover against the transcript.
///
/// Each round polynomial is absorbed in full before its challenge is drawn. A non-empty final
/// evaluation proof is absorbed at the end.
#[instrument(skip_all, name = "sumcheck::prove", level = "debug")]
pub fn prove<F, Prover, Transcript>(
	mut prover: Prover,
	mut transcript: Transcript,
) -> Result<SumcheckProveOutput<F>, Error>
where
	F: PrimeField,
	Prover: SumcheckProver<F>,
	Transcript: ArithmeticTranscript<F>,
{
	let n_claims = prover.n_claims();
	if n_claims == 0 {
		bail!(Error::EmptyClaims);
	}

	let batch_coeffs = draw_batch_coeffs(&mut transcript, n_claims);
	prover.batch(&batch_coeffs)?;

	let n_vars = prover.n_vars();
	let mut partial_sum_polys = Vec::with_capacity(n_vars);
	let mut challenges = Vec::with_capacity(n_vars);
	for _ in 0..n_vars {
		let round_coeffs = prover.round_coeffs()?;
		let challenge = transcript.next(&round_coeffs.0);
		prover.fold(challenge)?;

		partial_sum_polys.push(round_coeffs);
		challenges.push(challenge);
	}

	let final_eval_proof = prover.finish()?;
	if !final_eval_proof.is_empty() {
		transcript.update(&final_eval_proof);
	}

	Ok(SumcheckProveOutput {
		proof: SumcheckProof {
			partial_sum_polys,
			final_eval_proof,
		},
		challenges,
	})
}
