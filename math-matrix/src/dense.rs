//! Dense matrix storage and elementary algebra
//!
//! Entries are stored in an `ndarray::Array2<f64>`. The shape is fixed at
//! construction; contents can only be mutated in place through the row and
//! column swaps. Every other operation returns a new matrix.

use crate::error::{MatrixError, Result};
use ndarray::Array2;
use rand::Rng;
use std::fmt;

/// A rectangular matrix of `f64` entries.
///
/// Equality (`==`) is exact: two matrices are equal iff they have the same
/// shape and every entry is bit-for-bit identical. Use a tolerance-based
/// comparison when checking computed results.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) data: Array2<f64>,
}

impl Matrix {
    /// Creates a matrix with every entry set to `0.0`.
    pub fn zeros(num_rows: usize, num_cols: usize) -> Result<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::Empty { num_rows, num_cols });
        }
        Ok(Self {
            data: Array2::zeros((num_rows, num_cols)),
        })
    }

    /// Creates a matrix by copying nested rows.
    ///
    /// Fails with [`MatrixError::Empty`] when there are no rows or the first
    /// row is empty, and with [`MatrixError::Jagged`] when any row length
    /// differs from the first row's.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::Empty { num_rows, num_cols });
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != num_cols {
                return Err(MatrixError::Jagged {
                    row,
                    len: entries.len(),
                    expected: num_cols,
                });
            }
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((num_rows, num_cols), flat)
            .expect("row lengths validated above");
        Ok(Self { data })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[[i, i]] = 1.0;
        }
        Ok(m)
    }

    /// Creates a matrix with entries drawn uniformly from `[0, 1)` using the
    /// process-wide generator.
    ///
    /// Not reproducible across runs; use [`Matrix::random_with`] with a seeded
    /// generator when determinism matters.
    pub fn random(num_rows: usize, num_cols: usize) -> Result<Self> {
        Self::random_with(num_rows, num_cols, &mut rand::rng())
    }

    /// Creates a matrix with entries drawn uniformly from `[0, 1)` using the
    /// supplied generator.
    pub fn random_with<R: Rng + ?Sized>(
        num_rows: usize,
        num_cols: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut m = Self::zeros(num_rows, num_cols)?;
        for entry in m.data.iter_mut() {
            *entry = rng.random::<f64>();
        }
        Ok(m)
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Returns the number of columns.
    pub fn num_cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    /// Checks if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[[row, col]])
    }

    /// Swaps rows `i` and `j` in place. A no-op when `i == j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_row(i)?;
        self.check_row(j)?;
        if i == j {
            return Ok(());
        }
        for k in 0..self.num_cols() {
            let tmp = self.data[[i, k]];
            self.data[[i, k]] = self.data[[j, k]];
            self.data[[j, k]] = tmp;
        }
        Ok(())
    }

    /// Swaps columns `i` and `j` in place. A no-op when `i == j`.
    pub fn swap_cols(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_col(i)?;
        self.check_col(j)?;
        if i == j {
            return Ok(());
        }
        for k in 0..self.num_rows() {
            let tmp = self.data[[k, i]];
            self.data[[k, i]] = self.data[[k, j]];
            self.data[[k, j]] = tmp;
        }
        Ok(())
    }

    /// Returns the transpose as a new matrix.
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().to_owned(),
        }
    }

    /// Returns the elementwise sum `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: &self.data + &other.data,
        })
    }

    /// Returns the elementwise difference `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: &self.data - &other.data,
        })
    }

    /// Returns the matrix product `self * other`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless `self.num_cols()`
    /// equals `other.num_rows()`. Plain triple loop; this is a reference
    /// implementation, not a blocked kernel.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.num_cols() != other.num_rows() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (m, inner) = self.shape();
        let n = other.num_cols();
        let mut out = Array2::zeros((m, n));
        for i in 0..m {
            for j in 0..n {
                let mut acc = 0.0;
                for k in 0..inner {
                    acc += self.data[[i, k]] * other.data[[k, j]];
                }
                out[[i, j]] = acc;
            }
        }
        Ok(Self { data: out })
    }

    /// Returns `self` with every entry multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: &self.data * factor,
        }
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.num_rows() {
            return Err(MatrixError::RowOutOfBounds {
                index,
                num_rows: self.num_rows(),
            });
        }
        Ok(())
    }

    fn check_col(&self, index: usize) -> Result<()> {
        if index >= self.num_cols() {
            return Err(MatrixError::ColOutOfBounds {
                index,
                num_cols: self.num_cols(),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    /// One row per line, entries right-aligned in 9 columns with four decimal
    /// digits, each followed by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_rows() {
            for j in 0..self.num_cols() {
                write!(f, "{:9.4} ", self.data[[i, j]])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.get(i, j).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_empty_shapes_rejected() {
        assert_eq!(
            Matrix::zeros(0, 3),
            Err(MatrixError::Empty {
                num_rows: 0,
                num_cols: 3
            })
        );
        assert!(Matrix::identity(0).is_err());
        assert!(Matrix::from_rows(&[]).is_err());
        assert!(Matrix::from_rows(&[vec![]]).is_err());
    }

    #[test]
    fn test_from_rows_jagged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Jagged {
                row: 1,
                len: 1,
                expected: 2
            }
        );
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_from_rows_copies() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let m = Matrix::from_rows(&rows).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), 2.0);
        assert_eq!(m.get(1, 0).unwrap(), 3.0);
    }

    #[test]
    fn test_identity() {
        let id = Matrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_random_with_is_deterministic_and_in_range() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = Matrix::random_with(4, 3, &mut rng1).unwrap();
        let b = Matrix::random_with(4, 3, &mut rng2).unwrap();
        assert_eq!(a, b);
        for i in 0..4 {
            for j in 0..3 {
                let v = a.get(i, j).unwrap();
                assert!((0.0..1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let m = Matrix::zeros(2, 2).unwrap();
        assert_eq!(
            m.get(2, 0),
            Err(MatrixError::RowOutOfBounds {
                index: 2,
                num_rows: 2
            })
        );
        assert_eq!(
            m.get(0, 5),
            Err(MatrixError::ColOutOfBounds {
                index: 5,
                num_cols: 2
            })
        );
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        m.swap_rows(0, 1).unwrap();
        assert_eq!(
            m,
            Matrix::from_rows(&[vec![3.0, 4.0], vec![1.0, 2.0]]).unwrap()
        );

        // same-index swap is a no-op
        let before = m.clone();
        m.swap_rows(1, 1).unwrap();
        assert_eq!(m, before);

        assert!(m.swap_rows(0, 2).unwrap_err().is_index_error());
    }

    #[test]
    fn test_swap_cols() {
        let mut m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        m.swap_cols(0, 1).unwrap();
        assert_eq!(
            m,
            Matrix::from_rows(&[vec![2.0, 1.0], vec![4.0, 3.0]]).unwrap()
        );
        assert!(m.swap_cols(3, 0).unwrap_err().is_index_error());
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1).unwrap(), 6.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_add_sub() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get(0, 0).unwrap(), 1.5);
        assert_eq!(sum.sub(&b).unwrap(), a);

        let wrong = Matrix::zeros(3, 2).unwrap();
        assert!(a.add(&wrong).unwrap_err().is_shape_error());
        assert!(a.sub(&wrong).unwrap_err().is_shape_error());
    }

    #[test]
    fn test_mul() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.mul(&b).unwrap();
        assert_eq!(
            c,
            Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap()
        );

        let col = Matrix::from_rows(&[vec![1.0], vec![1.0]]).unwrap();
        let prod = a.mul(&col).unwrap();
        assert_eq!(prod.shape(), (2, 1));
        assert_eq!(prod.get(0, 0).unwrap(), 3.0);

        assert!(col.mul(&a).unwrap_err().is_shape_error());
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = Matrix::from_rows(&[vec![1.5, -2.0], vec![0.0, 4.25]]).unwrap();
        let id = Matrix::identity(2).unwrap();
        assert_eq!(id.mul(&a).unwrap(), a);
        assert_eq!(a.mul(&id).unwrap(), a);
    }

    #[test]
    fn test_scale() {
        let a = Matrix::from_rows(&[vec![1.0, -2.0]]).unwrap();
        let b = a.scale(2.0);
        assert_eq!(b, Matrix::from_rows(&[vec![2.0, -4.0]]).unwrap());
    }

    #[test]
    fn test_equality_across_shapes() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(3, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_format() {
        let m = Matrix::from_rows(&[vec![1.0, -2.5], vec![3.25, 0.0]]).unwrap();
        let rendered = m.to_string();
        assert_eq!(rendered, "   1.0000   -2.5000 \n   3.2500    0.0000 \n");
    }
}
