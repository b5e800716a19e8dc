// Copyright 2024-2025 Irreducible Inc.

use crate::Error;
use ark_ff::Field;
use gkr_utils::{bail, rayon::min_parallel_chunk};
use rayon::prelude::*;

/// Tensor product expansion of values with the partial eq indicator evaluated at
/// `extra_query_coordinates`.
///
/// Let $n$ be `log_n_values` and $k$ the length of `extra_query_coordinates`. `values` must have
/// length $2^{n+k}$, of which only the first $2^n$ entries are read. Denoting those by $v$ and the
/// coordinates by $r = (r_0, \ldots, r_{k-1})$, `values` is overwritten with
/// $v \otimes (1 - r_0, r_0) \otimes \ldots \otimes (1 - r_{k-1}, r_{k-1})$.
///
/// # Interpretation
/// If $f$ is the $n$-variate multilinear with hypercube evaluations $v$, the result holds the
/// hypercube evaluations of
/// $g(x_0, \ldots, x_{n+k-1}) = f(x_0, \ldots, x_{n-1}) \cdot eq(x_n, \ldots, x_{n+k-1}, r)$,
/// where variable $x_j$ corresponds to bit $j$ of the hypercube index.
pub fn tensor_prod_eq_ind<F: Field>(
	log_n_values: usize,
	values: &mut [F],
	extra_query_coordinates: &[F],
) -> Result<(), Error> {
	let new_n_vars = log_n_values + extra_query_coordinates.len();
	if values.len() != 1 << new_n_vars {
		bail!(Error::IncorrectArgumentLength {
			arg: "values".into(),
			expected: 1 << new_n_vars,
		});
	}

	for (i, &r_i) in extra_query_coordinates.iter().enumerate() {
		let prev_length = 1 << (log_n_values + i);
		let (xs, ys) = values.split_at_mut(prev_length);

		xs.par_iter_mut()
			.zip(ys[..prev_length].par_iter_mut())
			.with_min_len(min_parallel_chunk(prev_length))
			.for_each(|(x, y)| {
				// x * (1 - r_i) = x - x * r_i, sharing the product with y
				let prod = *x * r_i;
				*x -= prod;
				*y = prod;
			});
	}
	Ok(())
}

/// Computes the partial evaluation of the equality indicator polynomial.
///
/// Given an $n$-coordinate point $r_0, ..., r_{n-1}$, returns the values of
/// $\widetilde{eq}(X_0, ..., X_{n-1}, r_0, ..., r_{n-1})$ over the $n$-dimensional hypercube,
/// which equal the tensor product
///
/// $$
/// (1 - r_0, r_0) \otimes ... \otimes (1 - r_{n-1}, r_{n-1}).
/// $$
pub fn eq_ind_partial_eval<F: Field>(point: &[F]) -> Vec<F> {
	let mut buffer = vec![F::ZERO; 1 << point.len()];
	buffer[0] = F::ONE;
	tensor_prod_eq_ind(0, &mut buffer, point)
		.expect("buffer is allocated with the correct length");
	buffer
}

/// Evaluates $\widetilde{eq}(x, y) = \prod_i (x_i y_i + (1 - x_i)(1 - y_i))$.
pub fn eq_ind_eval<F: Field>(x: &[F], y: &[F]) -> Result<F, Error> {
	if x.len() != y.len() {
		bail!(Error::IncorrectArgumentLength {
			arg: "y".into(),
			expected: x.len(),
		});
	}

	Ok(x.iter()
		.zip(y)
		.map(|(&x_i, &y_i)| {
			let xy = x_i * y_i;
			// 1 - x - y + 2xy
			F::ONE - x_i - y_i + xy + xy
		})
		.product())
}
