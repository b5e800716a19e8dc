// Copyright 2024-2025 Irreducible Inc.

use super::{
	assignment::WireAssignment,
	circuit::{Circuit, WireId},
	claims::{ClaimsManager, LayerClaim},
	error::Error,
	gate_sumcheck::GateSumcheckProver,
	proof::Proof,
};
use crate::{
	protocols::sumcheck::{self, SumcheckProof},
	transcript::ArithmeticTranscript,
};
use ark_ff::PrimeField;
use itertools::Itertools;
use tracing::{debug_span, instrument};

/// Proves that `assignment` is a correct evaluation of `circuit`.
///
/// Claims flow from the output wires towards the inputs. Each wire runs one sumcheck over its
/// batched claims, except an input wire with a single claim, which the verifier checks directly
/// and which gets an empty proof.
#[instrument(skip_all, name = "gkr::prove", level = "debug")]
pub fn prove<F, Transcript>(
	circuit: &Circuit<F>,
	assignment: &WireAssignment<F>,
	mut transcript: Transcript,
) -> Result<Proof<F>, Error>
where
	F: PrimeField,
	Transcript: ArithmeticTranscript<F>,
{
	let mut claims = ClaimsManager::with_output_claims(circuit, assignment, &mut transcript)?;

	let mut layer_proofs = Vec::with_capacity(circuit.n_layers());
	for layer in 0..circuit.n_layers() {
		let _span = debug_span!("gkr::prove_layer", layer).entered();

		let wires = circuit.layer(layer);
		let mut wire_proofs = Vec::with_capacity(wires.len());
		for (index, wire) in wires.iter().enumerate() {
			let id = WireId::new(layer, index);
			let wire_claims = claims.take(id);
			let is_input = circuit.is_input(id);

			if is_input && wire_claims.len() == 1 {
				wire_proofs.push(SumcheckProof::default());
				continue;
			}

			let prover = GateSumcheckProver::new(id, wire, is_input, assignment, &wire_claims)?;
			let output = sumcheck::prove(prover, &mut transcript)?;

			for (&input, &eval) in wire.inputs().iter().zip_eq(&output.proof.final_eval_proof) {
				claims.add(
					input,
					LayerClaim {
						eval_point: output.challenges.clone(),
						eval,
					},
				);
			}
			wire_proofs.push(output.proof);
		}
		layer_proofs.push(wire_proofs);
	}

	Ok(Proof(layer_proofs))
}
