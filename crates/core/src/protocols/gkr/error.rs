// Copyright 2024-2025 Irreducible Inc.

use super::circuit::WireId;
use crate::protocols::sumcheck::Error as SumcheckError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("a circuit must have at least one layer")]
	EmptyCircuit,
	#[error("layer {layer} has no wires")]
	EmptyLayer { layer: usize },
	#[error("wire {wire} references {input}, which does not exist")]
	InputOutOfRange { wire: WireId, input: WireId },
	#[error("wire {wire} references {input}, which is not in a deeper layer")]
	InputNotDeeper { wire: WireId, input: WireId },
	#[error("wire {wire} is in the input layer and cannot have inputs")]
	InputWireHasInputs { wire: WireId },
	#[error("wire {wire} is not in the input layer and must have inputs")]
	MissingInputs { wire: WireId },
	#[error("wire {wire} has {actual} inputs, its gate takes {expected}")]
	GateArityMismatch {
		wire: WireId,
		expected: usize,
		actual: usize,
	},
	#[error("unknown gate {name:?}")]
	UnknownGate { name: String },
	#[error("wire {wire} is not in the input layer and needs a gate")]
	MissingGate { wire: WireId },
	#[error("expected {expected} value vectors, got {actual}")]
	NumberOfAssignedWires { expected: usize, actual: usize },
	#[error("every wire needs the same power-of-two number of values, got {actual} for {wire}")]
	InstanceCountMismatch { wire: WireId, actual: usize },
	#[error("wire {wire} is both an input and an output and was given conflicting values")]
	InconsistentAssignment { wire: WireId },
	#[error("wire {wire} has no assigned values")]
	UnassignedWire { wire: WireId },
	#[error("math error: {0}")]
	Math(#[from] gkr_math::Error),
	#[error("sumcheck failure: {0}")]
	Sumcheck(#[from] SumcheckError),
	#[error("verification failure: {0}")]
	Verification(#[from] VerificationError),
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
	#[error("the proof has {actual} layers, the circuit has {expected}")]
	NumberOfLayers { expected: usize, actual: usize },
	#[error("the proof has {actual} wire proofs for layer {layer}, the circuit has {expected}")]
	NumberOfWireProofs {
		layer: usize,
		expected: usize,
		actual: usize,
	},
	#[error("input wire {wire} with a single claim must have an empty proof")]
	NonEmptyInputProof { wire: WireId },
	#[error("the claim on input wire {wire} does not match its assignment")]
	InputClaimMismatch { wire: WireId },
	#[error("final evaluation proof of {wire} has {actual} values, expected {expected}")]
	FinalEvalProofLength {
		wire: WireId,
		expected: usize,
		actual: usize,
	},
	#[error("final evaluation of {wire} does not match the reduced sumcheck claim")]
	FinalEvalMismatch { wire: WireId },
}
