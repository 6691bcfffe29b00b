//! __densemat__ is a small dense 2-D matrix library built around two ideas:
//! an owned [`Matrix`](crate::algebra::Matrix) value type with the usual
//! arithmetic operator set, and zero-copy views
//! ([`MatrixView`](crate::algebra::MatrixView) /
//! [`MatrixViewMut`](crate::algebra::MatrixViewMut)) that alias a
//! rectangular region of a live matrix and read or write straight through
//! to it.
//!
//! The view machinery is not a convenience layer: the recursive cofactor
//! determinant assembles its minors by concatenating sub-views, and
//! Gauss-Jordan inversion applies every row operation through row-addressed
//! views of the working and companion matrices.
//!
//! Matrices parse from and render to a plain whitespace-delimited text
//! format, and a compact address mini-language (`"R3"`, `"C2"`) selects
//! whole rows or columns as views.
//!
//! All coordinates are 1-indexed `(row, column)` pairs.
//!
//! ```
//! use densemat::algebra::*;
//!
//! let a: Matrix<f64> = Matrix::from(&[
//!     [1.0, 2.0], //
//!     [3.0, 4.0], //
//! ]);
//! assert_eq!(a.determinant().unwrap(), -2.0);
//!
//! let inv = a.inverse().unwrap();
//! let eye = &a * &inv;
//! assert!((eye[(1, 1)] - 1.0).abs() < 1e-12);
//! ```

pub mod algebra;
