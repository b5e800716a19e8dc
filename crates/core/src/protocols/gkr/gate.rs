// Copyright 2024-2025 Irreducible Inc.

use ark_ff::PrimeField;
use std::{collections::BTreeMap, fmt::Debug, sync::Arc};

/// A gate defined outside this crate.
///
/// The declared degree must bound the total degree of `evaluate` as a polynomial in its inputs.
/// An understated degree is not detected at runtime; proofs over such a gate simply fail to verify.
pub trait CustomGate<F>: Debug + Send + Sync {
	fn evaluate(&self, inputs: &[F]) -> F;

	fn degree(&self) -> usize;

	fn n_inputs(&self) -> usize;
}

/// The function a circuit wire computes from its input wires.
#[derive(Debug, Clone)]
pub enum Gate<F: PrimeField> {
	/// Forwards its single input.
	Identity,
	/// Sum of two inputs.
	Add,
	/// Product of two inputs.
	Mul,
	/// One round of the MiMC cipher, $(x_0 + x_1 + c)^7$.
	MimcCipher { constant: F },
	Custom(Arc<dyn CustomGate<F>>),
}

impl<F: PrimeField> Gate<F> {
	/// Evaluates the gate.
	///
	/// # Panics
	///
	/// Panics if `inputs` is shorter than [`Self::n_inputs`].
	pub fn evaluate(&self, inputs: &[F]) -> F {
		match self {
			Self::Identity => inputs[0],
			Self::Add => inputs[0] + inputs[1],
			Self::Mul => inputs[0] * inputs[1],
			Self::MimcCipher { constant } => {
				let sum = inputs[0] + inputs[1] + *constant;
				let sum_sq = sum.square();
				let sum_4 = sum_sq.square();
				sum_4 * sum_sq * sum
			}
			Self::Custom(gate) => gate.evaluate(inputs),
		}
	}

	pub fn degree(&self) -> usize {
		match self {
			Self::Identity | Self::Add => 1,
			Self::Mul => 2,
			Self::MimcCipher { .. } => 7,
			Self::Custom(gate) => gate.degree(),
		}
	}

	pub fn n_inputs(&self) -> usize {
		match self {
			Self::Identity => 1,
			Self::Add | Self::Mul | Self::MimcCipher { .. } => 2,
			Self::Custom(gate) => gate.n_inputs(),
		}
	}
}

/// Resolves gate names used in circuit descriptions.
#[derive(Debug, Clone)]
pub struct GateRegistry<F: PrimeField> {
	gates: BTreeMap<String, Gate<F>>,
}

impl<F: PrimeField> GateRegistry<F> {
	/// A registry without any gates.
	pub fn empty() -> Self {
		Self {
			gates: BTreeMap::new(),
		}
	}

	pub fn register(&mut self, name: impl Into<String>, gate: Gate<F>) -> &mut Self {
		self.gates.insert(name.into(), gate);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Gate<F>> {
		self.gates.get(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.gates.keys().map(String::as_str)
	}
}

/// The built-in gates `identity`, `add`, `mul` and `mimc` (round constant zero).
impl<F: PrimeField> Default for GateRegistry<F> {
	fn default() -> Self {
		let mut registry = Self::empty();
		registry
			.register("identity", Gate::Identity)
			.register("add", Gate::Add)
			.register("mul", Gate::Mul)
			.register("mimc", Gate::MimcCipher { constant: F::ZERO });
		registry
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ark_bn254::Fr;
	use ark_ff::Field;

	#[derive(Debug)]
	struct SelectGate;

	/// $s \cdot a + (1 - s) \cdot b$
	impl CustomGate<Fr> for SelectGate {
		fn evaluate(&self, inputs: &[Fr]) -> Fr {
			let (s, a, b) = (inputs[0], inputs[1], inputs[2]);
			s * a + (Fr::ONE - s) * b
		}

		fn degree(&self) -> usize {
			2
		}

		fn n_inputs(&self) -> usize {
			3
		}
	}

	#[test]
	fn test_mimc_round() {
		let gate = Gate::MimcCipher {
			constant: Fr::from(7u64),
		};
		let out = gate.evaluate(&[Fr::from(3u64), Fr::from(5u64)]);
		assert_eq!(out, Fr::from(15u64).pow([7u64]));
		assert_eq!(out, Fr::from(170859375u64));
		assert_eq!(gate.degree(), 7);
	}

	#[test]
	fn test_builtin_gates() {
		let (a, b) = (Fr::from(6u64), Fr::from(9u64));
		assert_eq!(Gate::Identity.evaluate(&[a]), a);
		assert_eq!(Gate::Add.evaluate(&[a, b]), Fr::from(15u64));
		assert_eq!(Gate::Mul.evaluate(&[a, b]), Fr::from(54u64));
		assert_eq!(Gate::<Fr>::Mul.degree(), 2);
		assert_eq!(Gate::<Fr>::Identity.n_inputs(), 1);
	}

	#[test]
	fn test_registry() {
		let mut registry = GateRegistry::<Fr>::default();
		assert_eq!(registry.names().collect::<Vec<_>>(), ["add", "identity", "mimc", "mul"]);
		assert!(registry.get("select").is_none());

		registry.register("select", Gate::Custom(Arc::new(SelectGate)));
		let select = registry.get("select").unwrap();
		assert_eq!(select.n_inputs(), 3);
		assert_eq!(
			select.evaluate(&[Fr::ZERO, Fr::from(4u64), Fr::from(8u64)]),
			Fr::from(8u64)
		);
	}
}
