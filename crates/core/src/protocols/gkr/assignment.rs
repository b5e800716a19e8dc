// Copyright 2024-2025 Irreducible Inc.

use super::{
	circuit::{Circuit, WireId},
	error::Error,
};
use ark_ff::PrimeField;
use gkr_math::MultilinearExtension;
use gkr_utils::{checked_arithmetics::checked_log_2, ensure};
use rayon::prelude::*;
use tracing::instrument;

/// The values of circuit wires across all instances.
///
/// Each wire's values form the hypercube evaluations of a multilinear extension over
/// $\log_2 N$ variables, $N$ being the number of instances. A full assignment (from
/// [`WireAssignment::evaluate`]) covers every wire and is the prover's witness. An in/out
/// assignment covers only input and output wires and is all the verifier needs.
#[derive(Debug, Clone)]
pub struct WireAssignment<F: PrimeField> {
	values: Vec<Vec<Option<MultilinearExtension<F>>>>,
	n_vars: usize,
}

impl<F: PrimeField> WireAssignment<F> {
	fn empty(circuit: &Circuit<F>, n_vars: usize) -> Self {
		let values = (0..circuit.n_layers())
			.map(|layer| vec![None; circuit.layer(layer).len()])
			.collect();
		Self { values, n_vars }
	}

	/// Evaluates the circuit on `inputs`, one value vector per input wire.
	#[instrument(skip_all, name = "WireAssignment::evaluate", level = "debug")]
	pub fn evaluate(circuit: &Circuit<F>, inputs: Vec<Vec<F>>) -> Result<Self, Error> {
		ensure!(
			inputs.len() == circuit.n_inputs(),
			Error::NumberOfAssignedWires {
				expected: circuit.n_inputs(),
				actual: inputs.len(),
			}
		);
		let n_vars = common_n_vars(circuit.input_wires(), &inputs)?;

		let mut assignment = Self::empty(circuit, n_vars);
		assignment.set_all(circuit.input_wires(), inputs)?;

		let n_instances = 1 << n_vars;
		for layer in (0..circuit.input_layer_index()).rev() {
			let layer_values = circuit
				.layer(layer)
				.par_iter()
				.map(|wire| -> Result<_, Error> {
					let inputs = wire
						.inputs()
						.iter()
						.map(|&input| assignment.get(input).map(MultilinearExtension::evals))
						.collect::<Result<Vec<_>, _>>()?;

					let evals = (0..n_instances)
						.into_par_iter()
						.map_init(
							|| Vec::with_capacity(inputs.len()),
							|gate_inputs, instance| {
								gate_inputs.clear();
								gate_inputs.extend(inputs.iter().map(|values| values[instance]));
								wire.gate().evaluate(gate_inputs)
							},
						)
						.collect::<Vec<_>>();
					Ok(Some(MultilinearExtension::from_values(evals)?))
				})
				.collect::<Result<Vec<_>, _>>()?;
			assignment.values[layer] = layer_values;
		}
		Ok(assignment)
	}

	/// The verifier's view: input values per input wire, output values per output wire in
	/// [`Circuit::output_wires`] order.
	pub fn from_in_out(
		circuit: &Circuit<F>,
		inputs: Vec<Vec<F>>,
		outputs: Vec<Vec<F>>,
	) -> Result<Self, Error> {
		let output_wires = circuit.output_wires().collect::<Vec<_>>();
		ensure!(
			inputs.len() == circuit.n_inputs(),
			Error::NumberOfAssignedWires {
				expected: circuit.n_inputs(),
				actual: inputs.len(),
			}
		);
		ensure!(
			outputs.len() == output_wires.len(),
			Error::NumberOfAssignedWires {
				expected: output_wires.len(),
				actual: outputs.len(),
			}
		);

		let n_vars = common_n_vars(circuit.input_wires(), &inputs)?;
		common_n_vars(output_wires.iter().copied(), &outputs)?;

		let mut assignment = Self::empty(circuit, n_vars);
		assignment.set_all(circuit.input_wires(), inputs)?;
		assignment.set_all(output_wires, outputs)?;
		Ok(assignment)
	}

	fn set_all(
		&mut self,
		wires: impl IntoIterator<Item = WireId>,
		values: Vec<Vec<F>>,
	) -> Result<(), Error> {
		for (wire, evals) in wires.into_iter().zip(values) {
			match &self.values[wire.layer][wire.index] {
				Some(existing) => ensure!(
					existing.evals() == evals.as_slice(),
					Error::InconsistentAssignment { wire }
				),
				None => {
					ensure!(
						evals.len() == 1 << self.n_vars,
						Error::InstanceCountMismatch {
							wire,
							actual: evals.len(),
						}
					);
					self.values[wire.layer][wire.index] =
						Some(MultilinearExtension::from_values(evals)?);
				}
			}
		}
		Ok(())
	}

	/// Projects onto the input and output wires.
	pub fn in_out(&self, circuit: &Circuit<F>) -> Self {
		let mut projected = Self::empty(circuit, self.n_vars);
		for (id, wire) in circuit.wires() {
			if circuit.is_input(id) || wire.is_output() {
				projected.values[id.layer][id.index] = self.values[id.layer][id.index].clone();
			}
		}
		projected
	}

	pub fn get(&self, wire: WireId) -> Result<&MultilinearExtension<F>, Error> {
		self.values
			.get(wire.layer)
			.and_then(|layer| layer.get(wire.index))
			.and_then(Option::as_ref)
			.ok_or(Error::UnassignedWire { wire })
	}

	/// The output values in [`Circuit::output_wires`] order.
	pub fn outputs(&self, circuit: &Circuit<F>) -> Result<Vec<&[F]>, Error> {
		circuit
			.output_wires()
			.map(|wire| self.get(wire).map(MultilinearExtension::evals))
			.collect()
	}

	pub fn n_vars(&self) -> usize {
		self.n_vars
	}

	pub fn n_instances(&self) -> usize {
		1 << self.n_vars
	}
}

fn common_n_vars<F>(
	wires: impl IntoIterator<Item = WireId>,
	values: &[Vec<F>],
) -> Result<usize, Error> {
	let mut n_vars = None;
	for (wire, evals) in wires.into_iter().zip(values) {
		let wire_n_vars = checked_log_2(evals.len()).ok_or(Error::InstanceCountMismatch {
			wire,
			actual: evals.len(),
		})?;
		match n_vars {
			None => n_vars = Some(wire_n_vars),
			Some(n_vars) => ensure!(
				n_vars == wire_n_vars,
				Error::InstanceCountMismatch {
					wire,
					actual: evals.len(),
				}
			),
		}
	}
	Ok(n_vars.unwrap_or(0))
}
