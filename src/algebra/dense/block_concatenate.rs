use crate::algebra::{DenseMatrix, FloatT, Matrix, MatrixError};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Horizontal matrix concatenation
    ///
    /// ```text
    /// C = [A B]
    /// ```
    /// Operands must share their row count and may be any mix of owned
    /// matrices and views.
    pub fn hcat<A, B>(a: &A, b: &B) -> Result<Self, MatrixError>
    where
        A: DenseMatrix<T>,
        B: DenseMatrix<T>,
    {
        if a.nrows() != b.nrows() {
            return Err(MatrixError::ShapeMismatch {
                lhs: a.size(),
                rhs: b.size(),
            });
        }

        let m = a.nrows();
        let n = a.ncols() + b.ncols();
        let mut data = Vec::with_capacity(m * n);
        for c in 1..=a.ncols() {
            for r in 1..=m {
                data.push(a[(r, c)]);
            }
        }
        for c in 1..=b.ncols() {
            for r in 1..=m {
                data.push(b[(r, c)]);
            }
        }
        Ok(Self::new((m, n), data))
    }

    /// Vertical matrix concatenation
    ///
    /// ```text
    /// C = [ A ]
    ///     [ B ]
    /// ```
    /// Operands must share their column count and may be any mix of
    /// owned matrices and views.
    pub fn vcat<A, B>(a: &A, b: &B) -> Result<Self, MatrixError>
    where
        A: DenseMatrix<T>,
        B: DenseMatrix<T>,
    {
        if a.ncols() != b.ncols() {
            return Err(MatrixError::ShapeMismatch {
                lhs: a.size(),
                rhs: b.size(),
            });
        }

        let m = a.nrows() + b.nrows();
        let n = a.ncols();
        let mut data = Vec::with_capacity(m * n);
        for c in 1..=n {
            for r in 1..=a.nrows() {
                data.push(a[(r, c)]);
            }
            for r in 1..=b.nrows() {
                data.push(b[(r, c)]);
            }
        }
        Ok(Self::new((m, n), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab() -> (Matrix<f64>, Matrix<f64>) {
        let a = Matrix::from(&[
            [1.0, 2.0], //
            [3.0, 4.0], //
        ]);
        let b = Matrix::from(&[
            [5.0, 6.0], //
            [7.0, 8.0], //
        ]);
        (a, b)
    }

    #[test]
    fn test_hcat() {
        let (a, b) = ab();
        let c = Matrix::hcat(&a, &b).unwrap();
        assert_eq!(
            c,
            Matrix::from(&[
                [1.0, 2.0, 5.0, 6.0], //
                [3.0, 4.0, 7.0, 8.0], //
            ])
        );
    }

    #[test]
    fn test_vcat() {
        let (a, b) = ab();
        let c = Matrix::vcat(&a, &b).unwrap();
        assert_eq!(
            c,
            Matrix::from(&[
                [1.0, 2.0], //
                [3.0, 4.0], //
                [5.0, 6.0], //
                [7.0, 8.0], //
            ])
        );
    }

    #[test]
    fn test_cat_shape_checks() {
        let a = Matrix::from(&[[1.0, 2.0]]);
        let b = Matrix::from(&[[1.0], [2.0]]);
        assert!(matches!(
            Matrix::hcat(&a, &b),
            Err(MatrixError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            Matrix::vcat(&a, &b),
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_cat_views() {
        let (a, b) = ab();
        let va = a.view((1, 1), (2, 1)).unwrap();
        let vb = b.view((1, 2), (2, 2)).unwrap();
        let c = Matrix::hcat(&va, &vb).unwrap();
        assert_eq!(
            c,
            Matrix::from(&[
                [1.0, 6.0], //
                [3.0, 8.0], //
            ])
        );
    }
}
