// Copyright 2024-2025 Irreducible Inc.

use super::error::Error;
use ark_ff::Field;
use getset::CopyGetters;
use gkr_utils::bail;
use std::ops::{Index, IndexMut};

/// A dense row-major matrix over a field.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct Matrix<F: Field> {
	#[getset(get_copy = "pub")]
	m: usize,
	#[getset(get_copy = "pub")]
	n: usize,
	elements: Box<[F]>,
}

impl<F: Field> Matrix<F> {
	pub fn zeros(m: usize, n: usize) -> Self {
		Self {
			m,
			n,
			elements: vec![F::ZERO; m * n].into_boxed_slice(),
		}
	}

	pub fn identity(n: usize) -> Self {
		let mut out = Self::zeros(n, n);
		out.fill_identity();
		out
	}

	fn fill_identity(&mut self) {
		assert_eq!(self.m, self.n);
		self.elements.fill(F::ZERO);
		for i in 0..self.n {
			self[(i, i)] = F::ONE;
		}
	}

	pub fn dim(&self) -> (usize, usize) {
		(self.m, self.n)
	}

	pub fn mul_vec_into(&self, x: &[F], y: &mut [F]) {
		assert_eq!(self.n(), x.len());
		assert_eq!(self.m(), y.len());

		for (i, y_i) in y.iter_mut().enumerate() {
			*y_i = self.row_ref(i).iter().zip(x).map(|(&a, &b)| a * b).sum();
		}
	}

	/// Invert a square matrix by Gauss-Jordan elimination.
	///
	/// ## Throws
	///
	/// * [`Error::MatrixNotSquare`]
	/// * [`Error::MatrixIsSingular`]
	///
	/// ## Preconditions
	///
	/// * `out` - must have the same dimensions as `self`
	pub fn inverse_into(&self, out: &mut Self) -> Result<(), Error> {
		assert_eq!(self.dim(), out.dim());

		if self.m != self.n {
			bail!(Error::MatrixNotSquare);
		}

		let n = self.n;
		let mut tmp = self.clone();
		out.fill_identity();

		for col in 0..n {
			let pivot = (col..n)
				.find(|&row| !tmp[(row, col)].is_zero())
				.ok_or(Error::MatrixIsSingular)?;
			tmp.swap_rows(col, pivot);
			out.swap_rows(col, pivot);

			let scalar = tmp[(col, col)].inverse().ok_or(Error::MatrixIsSingular)?;
			tmp.scale_row(col, scalar);
			out.scale_row(col, scalar);

			for row in (0..col).chain(col + 1..n) {
				let scalar = tmp[(row, col)];
				if scalar.is_zero() {
					continue;
				}
				tmp.sub_scaled_row(row, col, scalar);
				out.sub_scaled_row(row, col, scalar);
			}
		}

		debug_assert_eq!(tmp, Self::identity(n));
		Ok(())
	}

	fn row_ref(&self, i: usize) -> &[F] {
		assert!(i < self.m);
		&self.elements[i * self.n..(i + 1) * self.n]
	}

	fn row_mut(&mut self, i: usize) -> &mut [F] {
		assert!(i < self.m);
		&mut self.elements[i * self.n..(i + 1) * self.n]
	}

	fn swap_rows(&mut self, i0: usize, i1: usize) {
		if i0 == i1 {
			return;
		}
		let (lo, hi) = (i0.min(i1), i0.max(i1));
		let (head, tail) = self.elements.split_at_mut(hi * self.n);
		head[lo * self.n..(lo + 1) * self.n].swap_with_slice(&mut tail[..self.n]);
	}

	fn scale_row(&mut self, i: usize, scalar: F) {
		for x in self.row_mut(i) {
			*x *= scalar;
		}
	}

	/// row[dst] -= scalar * row[src]
	fn sub_scaled_row(&mut self, dst: usize, src: usize, scalar: F) {
		assert!(dst < self.m);
		assert!(src < self.m);

		for j in 0..self.n {
			let x = self[(src, j)];
			self[(dst, j)] -= x * scalar;
		}
	}
}

impl<F: Field> Index<(usize, usize)> for Matrix<F> {
	type Output = F;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&self.elements[i * self.n + j]
	}
}

impl<F: Field> IndexMut<(usize, usize)> for Matrix<F> {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&mut self.elements[i * self.n + j]
	}
}
