// Copyright 2024-2025 Irreducible Inc.

use super::{
	assignment::WireAssignment,
	circuit::{Circuit, WireId},
	error::Error,
};
use crate::transcript::ArithmeticTranscript;
use ark_ff::PrimeField;

/// A claim that a wire's multilinear extension evaluates to `eval` at `eval_point`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerClaim<F: PrimeField> {
	pub eval_point: Vec<F>,
	pub eval: F,
}

/// Pending claims, per wire, in the order they were made.
#[derive(Debug)]
pub(super) struct ClaimsManager<F: PrimeField> {
	claims: Vec<Vec<Vec<LayerClaim<F>>>>,
}

impl<F: PrimeField> ClaimsManager<F> {
	/// Draws the output point and claims the value of every output wire there.
	///
	/// Prover and verifier both start here; only the output values of `assignment` are read.
	pub fn with_output_claims<Transcript>(
		circuit: &Circuit<F>,
		assignment: &WireAssignment<F>,
		transcript: &mut Transcript,
	) -> Result<Self, Error>
	where
		Transcript: ArithmeticTranscript<F>,
	{
		let mut manager = Self {
			claims: (0..circuit.n_layers())
				.map(|layer| vec![Vec::new(); circuit.layer(layer).len()])
				.collect(),
		};

		let eval_point = transcript.draw(assignment.n_vars());
		for wire in circuit.output_wires() {
			let eval = assignment.get(wire)?.evaluate(&eval_point)?;
			manager.add(
				wire,
				LayerClaim {
					eval_point: eval_point.clone(),
					eval,
				},
			);
		}
		Ok(manager)
	}

	pub fn add(&mut self, wire: WireId, claim: LayerClaim<F>) {
		self.claims[wire.layer][wire.index].push(claim);
	}

	pub fn take(&mut self, wire: WireId) -> Vec<LayerClaim<F>> {
		std::mem::take(&mut self.claims[wire.layer][wire.index])
	}
}
