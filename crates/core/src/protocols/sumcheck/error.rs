// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("sumcheck requires at least one claim")]
	EmptyClaims,
	#[error("expected {expected} batching coefficients, got {actual}")]
	NumberOfBatchCoeffs { expected: usize, actual: usize },
	#[error("fold was called on this sumcheck prover too many times")]
	TooManyFoldCalls,
	#[error("finish was called on this sumcheck prover before all rounds were completed")]
	PrematureFinishCall,
	#[error("math error: {0}")]
	Math(#[from] gkr_math::Error),
	#[error("verification failure: {0}")]
	Verification(#[from] VerificationError),
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
	#[error("expected {expected} rounds, the proof has {actual}")]
	NumberOfRounds { expected: usize, actual: usize },
	#[error("round {round} polynomial must have at least one coefficient")]
	NumberOfCoefficients { round: usize },
	#[error("round {round} polynomial has degree {degree}, exceeding the bound {max_degree}")]
	DegreeTooHigh {
		round: usize,
		degree: usize,
		max_degree: usize,
	},
	#[error("round {round} polynomial does not sum to the running claim over {{0, 1}}")]
	RoundSumMismatch { round: usize },
}
