use crate::algebra::{DenseMatrix, FloatT, MatrixError, ShapedMatrix};
use std::ops::{Index, IndexMut};

/// Dense matrix of floating point values.
///
/// Data is stored in column major format with an explicit `(rows, cols)`
/// size fixed at construction.  There is no in-place resize: a matrix
/// changes shape only by whole-value replacement.
///
/// Element access is 1-indexed: `a[(r, c)]` addresses the `r`th row's
/// `c`th column, `r ∈ [1, nrows]`, `c ∈ [1, ncols]`.  Indexing panics on
/// out-of-bounds coordinates; [`DenseMatrix::get`] and [`Matrix::set`]
/// are the checked forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// dimensions as (rows, cols)
    pub(crate) size: (usize, usize),
    /// vector of data in column major format
    pub(crate) data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub(crate) fn index_linear(&self, (r, c): (usize, usize)) -> usize {
        let (m, n) = self.size;
        assert!(
            (1..=m).contains(&r) && (1..=n).contains(&c),
            "no element at row {}, column {}",
            r,
            c
        );
        (r - 1) + m * (c - 1)
    }

    /// Checked element write.  The coordinate must already exist; the
    /// store holds only within-bounds cells.
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<(), MatrixError> {
        let (m, n) = self.size;
        if (1..=m).contains(&r) && (1..=n).contains(&c) {
            self[(r, c)] = value;
            Ok(())
        } else {
            Err(MatrixError::BadIndex { r, c })
        }
    }

}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn size(&self) -> (usize, usize) {
        self.size
    }
}

impl<T> DenseMatrix<T> for Matrix<T>
where
    T: FloatT,
{
    fn to_matrix(&self) -> Matrix<T> {
        self.clone()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        let lidx = self.index_linear(idx);
        &self.data[lidx]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}
