use crate::algebra::{DenseMatrix, FloatT, Matrix, MatrixError, MatrixView, ShapedMatrix};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// Fails on non-square matrices.  The expansion row and the
    /// alternating sign `(-1)^(column+1)` are part of the numeric
    /// contract; note the cost is O(n!), so this is only suitable for
    /// small matrices.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        let (m, n) = self.size();
        if m != n {
            return Err(MatrixError::NotSquare(m, n));
        }
        if n == 0 {
            return Ok(T::zero());
        }
        cofactor_det(&self.view((1, 1), (n, n))?)
    }

    /// Inverse by Gauss-Jordan elimination.
    ///
    /// Fails on non-square matrices and on matrices whose determinant is
    /// zero.  All row operations run through row-addressed views of the
    /// working copy and the identity-seeded companion, so elimination on
    /// one applies the same scalings to the other.  No pivoting is
    /// performed beyond the natural row order.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        if self.determinant()? == T::zero() {
            return Err(MatrixError::Singular);
        }

        let n = self.ncols();
        let mut tmp = self.clone();
        let mut inverse = Matrix::identity(n);

        // For row r, divide it by its rth element.  Then, for every other
        // row r2, subtract row r multiplied by the rth element of row r2.
        // The working copy becomes the identity and the companion the
        // inverse.
        for r in 1..=n {
            let pivot = tmp[(r, r)];
            let mut working_row = tmp.row_mut(r)?;
            working_row /= pivot;
            let mut companion_row = inverse.row_mut(r)?;
            companion_row /= pivot;

            let pivot_row = tmp.row(r)?.to_matrix();
            let pivot_row_companion = inverse.row(r)?.to_matrix();

            for r2 in 1..=n {
                if r2 == r {
                    continue;
                }
                let factor = tmp[(r2, r)];
                tmp.row_mut(r2)?.axpy(-factor, &pivot_row)?;
                inverse.row_mut(r2)?.axpy(-factor, &pivot_row_companion)?;
            }
        }

        Ok(inverse)
    }
}

impl<'a, T> MatrixView<'a, T>
where
    T: FloatT,
{
    /// Determinant of the aliased region; see [`Matrix::determinant`].
    pub fn determinant(&self) -> Result<T, MatrixError> {
        let (m, n) = self.size();
        if m != n {
            return Err(MatrixError::NotSquare(m, n));
        }
        cofactor_det(self)
    }
}

// Expansion along row 1 for side length n >= 1.  Each minor is assembled
// by horizontally concatenating the sub-views to the left and right of
// the expansion column over rows 2..=n; the first and last columns have
// a single-sided minor and recurse on a sub-view directly.
fn cofactor_det<T>(mat: &MatrixView<'_, T>) -> Result<T, MatrixError>
where
    T: FloatT,
{
    let n = mat.ncols();

    if n == 1 {
        return Ok(mat[(1, 1)]);
    }
    if n == 2 {
        return Ok(mat[(1, 1)] * mat[(2, 2)] - mat[(1, 2)] * mat[(2, 1)]);
    }

    // expansion always uses row 1, so the term is negated exactly when
    // the column number is even
    let mut det = T::zero();
    for col in 1..=n {
        let sign = if col % 2 == 0 { -T::one() } else { T::one() };

        let minor_det = if col == 1 {
            // bottom-right minor
            cofactor_det(&mat.subview((2, 2), (n, n))?)?
        } else if col == n {
            // bottom-left minor
            cofactor_det(&mat.subview((2, 1), (n, n - 1))?)?
        } else {
            let left = mat.subview((2, 1), (n, col - 1))?;
            let right = mat.subview((2, col + 1), (n, n))?;
            let minor = Matrix::hcat(&left, &right)?;
            cofactor_det(&minor.view((1, 1), (n - 1, n - 1))?)?
        };

        det += sign * mat[(1, col)] * minor_det;
    }

    Ok(det)
}
