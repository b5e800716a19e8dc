// Copyright 2024-2025 Irreducible Inc.

use crate::{eq_ind_partial_eval, extrapolate_line, Error};
use ark_ff::Field;
use gkr_utils::{bail, checked_arithmetics::checked_log_2, rayon::min_parallel_chunk};
use rayon::prelude::*;

/// A multilinear polynomial represented by its evaluations over the boolean hypercube.
///
/// Variable $x_k$ corresponds to bit $k$ of the evaluation index, so the evaluation at index
/// $i$ is the value at the vertex whose $k$-th coordinate is $(i \gg k) \mathbin{\&} 1$.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilinearExtension<F: Field> {
	n_vars: usize,
	evals: Vec<F>,
}

impl<F: Field> MultilinearExtension<F> {
	pub fn zeros(n_vars: usize) -> Self {
		Self {
			n_vars,
			evals: vec![F::ZERO; 1 << n_vars],
		}
	}

	pub fn from_values(evals: Vec<F>) -> Result<Self, Error> {
		let n_vars =
			checked_log_2(evals.len()).ok_or(Error::PowerOfTwoLengthRequired(evals.len()))?;
		Ok(Self { n_vars, evals })
	}

	pub fn n_vars(&self) -> usize {
		self.n_vars
	}

	pub fn size(&self) -> usize {
		self.evals.len()
	}

	pub fn evals(&self) -> &[F] {
		&self.evals
	}

	/// Evaluate the multilinear extension at an arbitrary point of $F^n$.
	pub fn evaluate(&self, query: &[F]) -> Result<F, Error> {
		if query.len() != self.n_vars {
			bail!(Error::IncorrectQuerySize {
				expected: self.n_vars
			});
		}

		let eq = eq_ind_partial_eval(query);
		Ok(self
			.evals
			.par_iter()
			.zip(eq.par_iter())
			.with_min_len(min_parallel_chunk(self.size()))
			.map(|(&v, &e)| v * e)
			.sum())
	}

	/// Partially evaluate the lowest variable at `r`, returning an $(n-1)$-variate extension.
	pub fn evaluate_partial_low(&self, r: F) -> Result<Self, Error> {
		if self.n_vars == 0 {
			bail!(Error::NoVariablesToFold);
		}

		let evals = self
			.evals
			.par_chunks_exact(2)
			.with_min_len(min_parallel_chunk(self.size() / 2))
			.map(|pair| extrapolate_line(pair[0], pair[1], r))
			.collect();
		Ok(Self {
			n_vars: self.n_vars - 1,
			evals,
		})
	}
}
