// Copyright 2023-2025 Irreducible Inc.

use super::error::Error;
use crate::Matrix;
use ark_ff::{Field, PrimeField};
use gkr_utils::bail;

/// A set of distinct points supporting interpolation to monomial form. Construction inverts the
/// Vandermonde matrix, which has cubic complexity.
#[derive(Debug, Clone)]
pub struct InterpolationDomain<F: Field> {
	points: Vec<F>,
	interpolation_matrix: Matrix<F>,
}

/// The points `0, 1, ..., size - 1` embedded in the prime field.
pub fn make_evaluation_points<F: PrimeField>(size: usize) -> Vec<F> {
	(0..size as u64).map(F::from).collect()
}

impl<F: Field> InterpolationDomain<F> {
	pub fn from_points(points: Vec<F>) -> Result<Self, Error> {
		if points
			.iter()
			.enumerate()
			.any(|(i, point)| points[..i].contains(point))
		{
			bail!(Error::DuplicateDomainPoint);
		}

		let n = points.len();
		let mut interpolation_matrix = Matrix::zeros(n, n);
		vandermonde(&points).inverse_into(&mut interpolation_matrix)?;
		Ok(Self {
			points,
			interpolation_matrix,
		})
	}

	pub fn size(&self) -> usize {
		self.points.len()
	}

	pub fn points(&self) -> &[F] {
		self.points.as_slice()
	}

	/// Recover the monomial coefficients, lowest degree first, of the polynomial taking `values`
	/// on the domain points.
	pub fn interpolate(&self, values: &[F]) -> Result<Vec<F>, Error> {
		if values.len() != self.size() {
			bail!(Error::ExtrapolateNumberOfEvaluations);
		}

		let mut coeffs = vec![F::ZERO; values.len()];
		self.interpolation_matrix.mul_vec_into(values, &mut coeffs);
		Ok(coeffs)
	}
}

/// Evaluate a univariate polynomial specified by its monomial coefficients.
pub fn evaluate_univariate<F: Field>(coeffs: &[F], x: F) -> F {
	// Evaluate using Horner's method
	let mut rev_coeffs = coeffs.iter().copied().rev();
	let last_coeff = rev_coeffs.next().unwrap_or(F::ZERO);
	rev_coeffs.fold(last_coeff, |eval, coeff| eval * x + coeff)
}

/// $a + z (b - a)$, the line through `(0, a)` and `(1, b)` evaluated at `z`.
#[inline]
pub fn extrapolate_line<F: Field>(a: F, b: F, z: F) -> F {
	a + (b - a) * z
}

fn vandermonde<F: Field>(xs: &[F]) -> Matrix<F> {
	let n = xs.len();

	let mut mat = Matrix::zeros(n, n);
	for (i, x_i) in xs.iter().copied().enumerate() {
		let mut acc = F::ONE;
		mat[(i, 0)] = acc;

		for j in 1..n {
			acc *= x_i;
			mat[(i, j)] = acc;
		}
	}
	mat
}
