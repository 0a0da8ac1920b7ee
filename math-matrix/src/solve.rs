//! Direct linear-system solver
//!
//! Gaussian elimination with partial pivoting followed by back-substitution.
//! The elimination runs in place on private copies of the coefficient matrix
//! and the right-hand side, so the caller's matrices are never touched.

use crate::dense::Matrix;
use crate::error::{MatrixError, Result};

impl Matrix {
    /// Solves `self * x = rhs` for a square coefficient matrix and a single
    /// right-hand-side column, returning `x` as an `n x 1` matrix.
    ///
    /// At each elimination step the pivot row is the one with the
    /// largest-magnitude entry in the current column (first such row on ties).
    /// A pivot that is exactly `0.0` after the swap means the matrix is
    /// singular for solving purposes and yields [`MatrixError::Singular`];
    /// no tolerance is applied. See [`Matrix::solve_with_pivot_threshold`]
    /// for a near-singularity guard.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] before any computation when
    /// `self` is not square, `rhs` has a different row count, or `rhs` has
    /// more than one column.
    pub fn solve(&self, rhs: &Matrix) -> Result<Matrix> {
        self.solve_inner(rhs, None)
    }

    /// Like [`Matrix::solve`], but treats any pivot with absolute value below
    /// `threshold` as singular instead of only an exactly zero one.
    pub fn solve_with_pivot_threshold(&self, rhs: &Matrix, threshold: f64) -> Result<Matrix> {
        self.solve_inner(rhs, Some(threshold))
    }

    fn solve_inner(&self, rhs: &Matrix, pivot_threshold: Option<f64>) -> Result<Matrix> {
        let n = self.num_rows();
        if !self.is_square() || rhs.num_rows() != n || rhs.num_cols() != 1 {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        // Working copies; the inputs stay intact even when we bail out.
        let mut a = self.clone();
        let mut b = rhs.clone();

        // Forward elimination.
        for i in 0..n {
            // Pivot: largest-magnitude entry in column i, rows i..n.
            let mut max = i;
            for j in (i + 1)..n {
                if a.data[[j, i]].abs() > a.data[[max, i]].abs() {
                    max = j;
                }
            }
            // Keep the coefficient copy and the rhs copy in lockstep.
            a.swap_rows(i, max)?;
            b.swap_rows(i, max)?;

            let pivot = a.data[[i, i]];
            let singular = match pivot_threshold {
                Some(threshold) => pivot.abs() < threshold,
                None => pivot == 0.0,
            };
            if singular {
                return Err(MatrixError::Singular);
            }

            for j in (i + 1)..n {
                let mult = a.data[[j, i]] / pivot;
                b.data[[j, 0]] -= mult * b.data[[i, 0]];
                for k in (i + 1)..n {
                    a.data[[j, k]] -= mult * a.data[[i, k]];
                }
                // Eliminated entry is zero by construction; store it as such
                // rather than leaving rounding residue.
                a.data[[j, i]] = 0.0;
            }
        }

        // Back-substitution on the upper-triangular system.
        let mut x = Matrix::zeros(n, 1)?;
        for j in (0..n).rev() {
            let mut t = 0.0;
            for k in (j + 1)..n {
                t += a.data[[j, k]] * x.data[[k, 0]];
            }
            x.data[[j, 0]] = (b.data[[j, 0]] - t) / a.data[[j, j]];
        }
        Ok(x)
    }
}
