// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("argument {arg} does not have expected length {expected}")]
	IncorrectArgumentLength { arg: String, expected: usize },
	#[error("the matrix is not square")]
	MatrixNotSquare,
	#[error("the matrix is singular")]
	MatrixIsSingular,
	#[error("duplicate point in domain")]
	DuplicateDomainPoint,
	#[error("expected the number of evaluations to match the domain size")]
	ExtrapolateNumberOfEvaluations,
	#[error("the number of evaluations must be a non-zero power of two, got {0}")]
	PowerOfTwoLengthRequired(usize),
	#[error("cannot fold a multilinear extension with no variables")]
	NoVariablesToFold,
	#[error("the query must have size {expected}")]
	IncorrectQuerySize { expected: usize },
}
