// Copyright 2024-2025 Irreducible Inc.

use super::{
	assignment::WireAssignment,
	circuit::Circuit,
	claims::{ClaimsManager, LayerClaim},
	error::{Error, VerificationError},
	gate_sumcheck::batched_eq_eval,
	proof::Proof,
};
use crate::{
	protocols::sumcheck::{self, SumcheckClaim},
	transcript::ArithmeticTranscript,
};
use ark_ff::PrimeField;
use gkr_utils::ensure;
use itertools::Itertools;
use tracing::{debug, instrument};

/// Verifies a GKR proof against the inputs and outputs in `assignment`.
///
/// Only input and output wires of `assignment` are read, see [`WireAssignment::in_out`]. Any
/// mismatch rejects the proof; the reason is logged at debug level.
#[instrument(skip_all, name = "gkr::verify", level = "debug")]
pub fn verify<F, Transcript>(
	circuit: &Circuit<F>,
	assignment: &WireAssignment<F>,
	proof: &Proof<F>,
	transcript: Transcript,
) -> bool
where
	F: PrimeField,
	Transcript: ArithmeticTranscript<F>,
{
	match verify_proof(circuit, assignment, proof, transcript) {
		Ok(()) => true,
		Err(err) => {
			debug!(error = %err, "GKR proof rejected");
			false
		}
	}
}

fn verify_proof<F, Transcript>(
	circuit: &Circuit<F>,
	assignment: &WireAssignment<F>,
	proof: &Proof<F>,
	mut transcript: Transcript,
) -> Result<(), Error>
where
	F: PrimeField,
	Transcript: ArithmeticTranscript<F>,
{
	check_proof_shape(circuit, proof)?;

	let mut claims = ClaimsManager::with_output_claims(circuit, assignment, &mut transcript)?;

	for (id, wire) in circuit.wires() {
		let wire_claims = claims.take(id);
		let wire_proof = &proof.0[id.layer][id.index];
		let is_input = circuit.is_input(id);

		if is_input && wire_claims.len() == 1 {
			ensure!(wire_proof.is_empty(), VerificationError::NonEmptyInputProof { wire: id });
			let claim = &wire_claims[0];
			let eval = assignment.get(id)?.evaluate(&claim.eval_point)?;
			ensure!(eval == claim.eval, VerificationError::InputClaimMismatch { wire: id });
			continue;
		}

		let final_evals = &wire_proof.final_eval_proof;
		let expected_len = if is_input { 0 } else { wire.inputs().len() };
		ensure!(
			final_evals.len() == expected_len,
			VerificationError::FinalEvalProofLength {
				wire: id,
				expected: expected_len,
				actual: final_evals.len(),
			}
		);

		let sumcheck_claim = SumcheckClaim::new(
			assignment.n_vars(),
			1 + wire.gate().degree(),
			wire_claims.iter().map(|claim| claim.eval).collect(),
		);
		let reduced = sumcheck::verify(&sumcheck_claim, wire_proof, &mut transcript)?;

		let gate_eval = if is_input {
			assignment.get(id)?.evaluate(&reduced.challenges)?
		} else {
			wire.gate().evaluate(final_evals)
		};
		let eq_eval = batched_eq_eval(&wire_claims, &reduced.batch_coeffs, &reduced.challenges)?;
		ensure!(
			reduced.eval == eq_eval * gate_eval,
			VerificationError::FinalEvalMismatch { wire: id }
		);

		for (&input, &eval) in wire.inputs().iter().zip_eq(final_evals) {
			claims.add(
				input,
				LayerClaim {
					eval_point: reduced.challenges.clone(),
					eval,
				},
			);
		}
	}
	Ok(())
}

fn check_proof_shape<F: PrimeField>(circuit: &Circuit<F>, proof: &Proof<F>) -> Result<(), Error> {
	ensure!(
		proof.0.len() == circuit.n_layers(),
		VerificationError::NumberOfLayers {
			expected: circuit.n_layers(),
			actual: proof.0.len(),
		}
	);
	for (layer, wire_proofs) in proof.0.iter().enumerate() {
		let expected = circuit.layer(layer).len();
		ensure!(
			wire_proofs.len() == expected,
			VerificationError::NumberOfWireProofs {
				layer,
				expected,
				actual: wire_proofs.len(),
			}
		);
	}
	Ok(())
}
