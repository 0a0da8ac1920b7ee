//! Dense real matrices with standard algebra and a direct linear-system solver
//!
//! This crate provides a single value type, [`Matrix`], a rectangular array of
//! `f64` entries with a shape fixed at construction:
//!
//! - **Construction**: zero-filled, from nested rows, identity, uniform random
//! - **Elementary algebra**: row/column swap, transpose, add/sub, matrix product
//! - **Direct solver**: Gaussian elimination with partial pivoting and
//!   back-substitution ([`Matrix::solve`])
//!
//! Binary operators are pure and return a new matrix; the only in-place
//! mutators are [`Matrix::swap_rows`] and [`Matrix::swap_cols`]. The solver
//! works on private copies and never mutates its inputs, even on failure.
//!
//! # Example
//!
//! ```
//! use math_matrix::Matrix;
//!
//! let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 1.0]])?;
//! let b = Matrix::from_rows(&[vec![3.0], vec![2.0]])?;
//! let x = a.solve(&b)?;
//! assert_eq!(x.get(0, 0)?, 1.0);
//! assert_eq!(x.get(1, 0)?, 1.0);
//! # Ok::<(), math_matrix::MatrixError>(())
//! ```

pub mod dense;
pub mod error;
mod solve;

pub use dense::Matrix;
pub use error::{MatrixError, Result};
