// Copyright 2024-2025 Irreducible Inc.

use super::{
	error::Error,
	gate::{Gate, GateRegistry},
};
use ark_ff::PrimeField;
use getset::{CopyGetters, Getters};
use gkr_utils::{bail, ensure};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The coordinates of a wire: layer 0 holds the outputs, the last layer the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId {
	pub layer: usize,
	pub index: usize,
}

impl WireId {
	pub fn new(layer: usize, index: usize) -> Self {
		Self { layer, index }
	}
}

impl fmt::Display for WireId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.layer, self.index)
	}
}

/// A wire as handed to [`Circuit::new`].
#[derive(Debug, Clone)]
pub struct WireDef<F: PrimeField> {
	pub gate: Gate<F>,
	pub inputs: Vec<WireId>,
}

impl<F: PrimeField> WireDef<F> {
	pub fn new(gate: Gate<F>, inputs: Vec<WireId>) -> Self {
		Self { gate, inputs }
	}

	/// A wire of the input layer.
	pub fn input() -> Self {
		Self::new(Gate::Identity, Vec::new())
	}
}

#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Wire<F: PrimeField> {
	#[getset(get = "pub")]
	gate: Gate<F>,
	#[getset(get = "pub")]
	inputs: Vec<WireId>,
	/// Number of references from shallower wires, or one for an output wire.
	#[getset(get_copy = "pub")]
	n_outputs: usize,
	#[getset(get_copy = "pub")]
	is_output: bool,
}

/// A layered arithmetic circuit.
///
/// Wires only reference wires of strictly deeper layers, and exactly the deepest layer consists of
/// input wires. A wire referenced by no other wire is an output wire, whatever its layer.
#[derive(Debug, Clone)]
pub struct Circuit<F: PrimeField> {
	layers: Vec<Vec<Wire<F>>>,
}

impl<F: PrimeField> Circuit<F> {
	pub fn new(layers: Vec<Vec<WireDef<F>>>) -> Result<Self, Error> {
		if layers.is_empty() {
			bail!(Error::EmptyCircuit);
		}
		let input_layer = layers.len() - 1;

		let mut n_references = layers
			.iter()
			.enumerate()
			.map(|(layer, wires)| -> Result<Vec<usize>, Error> {
				ensure!(!wires.is_empty(), Error::EmptyLayer { layer });
				Ok(vec![0usize; wires.len()])
			})
			.collect::<Result<Vec<_>, _>>()?;

		for (layer, wires) in layers.iter().enumerate() {
			for (index, def) in wires.iter().enumerate() {
				let wire = WireId::new(layer, index);
				if layer == input_layer {
					ensure!(def.inputs.is_empty(), Error::InputWireHasInputs { wire });
					continue;
				}

				ensure!(!def.inputs.is_empty(), Error::MissingInputs { wire });
				ensure!(
					def.inputs.len() == def.gate.n_inputs(),
					Error::GateArityMismatch {
						wire,
						expected: def.gate.n_inputs(),
						actual: def.inputs.len(),
					}
				);
				for &input in &def.inputs {
					ensure!(input.layer > layer, Error::InputNotDeeper { wire, input });
					let count = n_references
						.get_mut(input.layer)
						.and_then(|counts| counts.get_mut(input.index))
						.ok_or(Error::InputOutOfRange { wire, input })?;
					*count += 1;
				}
			}
		}

		let layers = layers
			.into_iter()
			.zip(n_references)
			.enumerate()
			.map(|(layer, (wires, counts))| {
				wires
					.into_iter()
					.zip(counts)
					.map(|(def, count)| Wire {
						gate: if layer == input_layer {
							Gate::Identity
						} else {
							def.gate
						},
						inputs: def.inputs,
						n_outputs: count.max(1),
						is_output: count == 0,
					})
					.collect()
			})
			.collect();
		Ok(Self { layers })
	}

	/// Builds a circuit from its JSON-shaped description, resolving gate names in `registry`.
	pub fn from_description(
		description: &CircuitDescription,
		registry: &GateRegistry<F>,
	) -> Result<Self, Error> {
		let input_layer = description.0.len().saturating_sub(1);
		let layers = description
			.0
			.iter()
			.enumerate()
			.map(|(layer, wires)| {
				wires
					.iter()
					.enumerate()
					.map(|(index, wire)| -> Result<WireDef<F>, Error> {
						let inputs = wire
							.inputs
							.iter()
							.map(|&(layer, index)| WireId::new(layer, index))
							.collect();
						let gate = match &wire.gate {
							Some(name) => registry
								.get(name)
								.cloned()
								.ok_or_else(|| Error::UnknownGate { name: name.clone() })?,
							None if layer == input_layer => Gate::Identity,
							None => bail!(Error::MissingGate {
								wire: WireId::new(layer, index)
							}),
						};
						Ok(WireDef::new(gate, inputs))
					})
					.collect::<Result<Vec<_>, Error>>()
			})
			.collect::<Result<Vec<_>, Error>>()?;
		Self::new(layers)
	}

	pub fn n_layers(&self) -> usize {
		self.layers.len()
	}

	pub fn layer(&self, layer: usize) -> &[Wire<F>] {
		&self.layers[layer]
	}

	pub fn input_layer_index(&self) -> usize {
		self.layers.len() - 1
	}

	pub fn n_inputs(&self) -> usize {
		self.layers[self.input_layer_index()].len()
	}

	pub fn wire(&self, id: WireId) -> Option<&Wire<F>> {
		self.layers.get(id.layer)?.get(id.index)
	}

	pub fn is_input(&self, id: WireId) -> bool {
		id.layer == self.input_layer_index()
	}

	pub fn is_output(&self, id: WireId) -> bool {
		self.wire(id).is_some_and(Wire::is_output)
	}

	/// All wires in processing order: by layer from the outputs down, then by index.
	pub fn wires(&self) -> impl Iterator<Item = (WireId, &Wire<F>)> + '_ {
		self.layers.iter().enumerate().flat_map(|(layer, wires)| {
			wires
				.iter()
				.enumerate()
				.map(move |(index, wire)| (WireId::new(layer, index), wire))
		})
	}

	pub fn output_wires(&self) -> impl Iterator<Item = WireId> + '_ {
		self.wires()
			.filter(|(_, wire)| wire.is_output())
			.map(|(id, _)| id)
	}

	pub fn input_wires(&self) -> impl Iterator<Item = WireId> + '_ {
		let layer = self.input_layer_index();
		(0..self.n_inputs()).map(move |index| WireId::new(layer, index))
	}
}

/// The serialized form of a circuit: layers of wires, each naming its gate and listing its inputs
/// as `[layer, index]` pairs.
///
/// ```json
/// [[{"gate": "mul", "inputs": [[1, 0], [1, 1]]}], [{"inputs": []}, {"inputs": []}]]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitDescription(pub Vec<Vec<WireDescription>>);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDescription {
	#[serde(default)]
	pub gate: Option<String>,
	#[serde(default)]
	pub inputs: Vec<(usize, usize)>,
}
