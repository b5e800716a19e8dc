// Copyright 2024-2025 Irreducible Inc.

use super::{
	assignment::WireAssignment,
	circuit::{Wire, WireId},
	claims::LayerClaim,
	error::Error,
	gate::Gate,
};
use crate::protocols::sumcheck::{Error as SumcheckError, RoundCoeffs, SumcheckProver};
use ark_ff::PrimeField;
use gkr_math::{
	eq_ind_eval, eq_ind_partial_eval, make_evaluation_points, InterpolationDomain,
	MultilinearExtension,
};
use gkr_utils::{bail, rayon::min_parallel_chunk};
use rayon::prelude::*;

/// Sumcheck prover for the claims on one wire.
///
/// For a wire with gate $G$ and input wires $u_1, \ldots, u_k$, a claim $(x_j, y_j)$ states
/// $y_j = \sum_h eq(x_j, h) \cdot G(P_{u_1}(h), \ldots, P_{u_k}(h))$. The batched polynomial is
/// $\left(\sum_j \lambda_j eq(x_j, h)\right) \cdot G(\ldots)$ of degree $1 + \deg G$ in each
/// variable. An input wire is summed as the identity gate over its own values.
#[derive(Debug)]
pub struct GateSumcheckProver<'a, F: PrimeField> {
	gate: &'a Gate<F>,
	claims: &'a [LayerClaim<F>],
	eq: MultilinearExtension<F>,
	multilinears: Vec<MultilinearExtension<F>>,
	is_input: bool,
	domain: InterpolationDomain<F>,
	n_vars: usize,
	round: usize,
}

impl<'a, F: PrimeField> GateSumcheckProver<'a, F> {
	pub fn new(
		id: WireId,
		wire: &'a Wire<F>,
		is_input: bool,
		assignment: &WireAssignment<F>,
		claims: &'a [LayerClaim<F>],
	) -> Result<Self, Error> {
		let multilinears = if is_input {
			vec![assignment.get(id)?.clone()]
		} else {
			wire.inputs()
				.iter()
				.map(|&input| assignment.get(input).cloned())
				.collect::<Result<Vec<_>, _>>()?
		};

		let degree = 1 + wire.gate().degree();
		let n_vars = assignment.n_vars();
		Ok(Self {
			gate: wire.gate(),
			claims,
			eq: MultilinearExtension::zeros(n_vars),
			multilinears,
			is_input,
			domain: InterpolationDomain::from_points(make_evaluation_points(degree + 1))?,
			n_vars,
			round: 0,
		})
	}
}

impl<F: PrimeField> SumcheckProver<F> for GateSumcheckProver<'_, F> {
	fn n_vars(&self) -> usize {
		self.n_vars
	}

	fn n_claims(&self) -> usize {
		self.claims.len()
	}

	fn degree(&self) -> usize {
		self.domain.size() - 1
	}

	fn batch(&mut self, batch_coeffs: &[F]) -> Result<(), SumcheckError> {
		if batch_coeffs.len() != self.claims.len() {
			bail!(SumcheckError::NumberOfBatchCoeffs {
				expected: self.claims.len(),
				actual: batch_coeffs.len(),
			});
		}

		let size = 1 << self.n_vars;
		let mut eq = vec![F::ZERO; size];
		for (claim, &coeff) in self.claims.iter().zip(batch_coeffs) {
			let claim_eq = eq_ind_partial_eval(&claim.eval_point);
			if claim_eq.len() != size {
				bail!(gkr_math::Error::IncorrectQuerySize {
					expected: self.n_vars
				});
			}
			eq.par_iter_mut()
				.zip(claim_eq.par_iter())
				.with_min_len(min_parallel_chunk(size))
				.for_each(|(acc, &value)| *acc += coeff * value);
		}
		self.eq = MultilinearExtension::from_values(eq)?;
		Ok(())
	}

	fn round_coeffs(&self) -> Result<RoundCoeffs<F>, SumcheckError> {
		let degree = self.degree();
		let n_inputs = self.multilinears.len();
		let half = self.eq.size() / 2;
		let eq = self.eq.evals();

		// Evaluations at t = 0, ..., degree of the batched polynomial summed over the remaining
		// variables. Every multilinear restricted to the lowest variable is the line through its
		// even and odd entries, stepped by their difference.
		let evals = (0..half)
			.into_par_iter()
			.with_min_len(min_parallel_chunk(half))
			.fold(
				|| (vec![F::ZERO; degree + 1], vec![F::ZERO; n_inputs], vec![F::ZERO; n_inputs]),
				|(mut evals, mut point, mut step), i| {
					let mut eq_t = eq[2 * i];
					let eq_step = eq[2 * i + 1] - eq_t;
					for (k, multilinear) in self.multilinears.iter().enumerate() {
						let values = multilinear.evals();
						point[k] = values[2 * i];
						step[k] = values[2 * i + 1] - values[2 * i];
					}

					for (t, eval) in evals.iter_mut().enumerate() {
						if t > 0 {
							eq_t += eq_step;
							for (x, &dx) in point.iter_mut().zip(&step) {
								*x += dx;
							}
						}
						*eval += eq_t * self.gate.evaluate(&point);
					}
					(evals, point, step)
				},
			)
			.map(|(evals, _, _)| evals)
			.reduce(
				|| vec![F::ZERO; degree + 1],
				|mut lhs, rhs| {
					for (l, r) in lhs.iter_mut().zip(rhs) {
						*l += r;
					}
					lhs
				},
			);

		Ok(RoundCoeffs(self.domain.interpolate(&evals)?))
	}

	fn fold(&mut self, challenge: F) -> Result<(), SumcheckError> {
		if self.round == self.n_vars {
			bail!(SumcheckError::TooManyFoldCalls);
		}

		self.eq = self.eq.evaluate_partial_low(challenge)?;
		self.multilinears = self
			.multilinears
			.iter()
			.map(|multilinear| multilinear.evaluate_partial_low(challenge))
			.collect::<Result<Vec<_>, gkr_math::Error>>()?;
		self.round += 1;
		Ok(())
	}

	fn finish(self) -> Result<Vec<F>, SumcheckError> {
		if self.round != self.n_vars {
			bail!(SumcheckError::PrematureFinishCall);
		}

		if self.is_input {
			return Ok(Vec::new());
		}
		Ok(self
			.multilinears
			.iter()
			.map(|multilinear| multilinear.evals()[0])
			.collect())
	}
}

/// $\sum_j \lambda_j \cdot eq(x_j, r)$, the verifier's evaluation of the batched eq factor.
pub(super) fn batched_eq_eval<F: PrimeField>(
	claims: &[LayerClaim<F>],
	batch_coeffs: &[F],
	point: &[F],
) -> Result<F, Error> {
	claims
		.iter()
		.zip(batch_coeffs)
		.map(|(claim, &coeff)| Ok(coeff * eq_ind_eval(&claim.eval_point, point)?))
		.sum()
}
