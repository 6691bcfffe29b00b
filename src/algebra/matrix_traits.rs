use crate::algebra::{FloatT, Matrix, MatrixError};
use std::ops::Index;

/// Dimension queries shared by matrices and views.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// size as a `(rows, cols)` pair
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if `self.nrows() == self.ncols()`
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
    /// true if `self` and `other` have equal dimensions
    fn is_same_shape<M: ShapedMatrix>(&self, other: &M) -> bool
    where
        Self: Sized,
    {
        self.size() == other.size()
    }
}

//NB: the concrete owned type is just called "Matrix".  The "DenseMatrix"
//trait is implemented on Matrix, MatrixView and MatrixViewMut so that
//arithmetic, concatenation and the elimination algorithms can accept any
//of those formats interchangeably.   Element access is 1-indexed
//throughout: valid coordinates are (1..=nrows, 1..=ncols).
pub trait DenseMatrix<T: FloatT>: ShapedMatrix + Index<(usize, usize), Output = T> {
    /// Checked element read.  Out-of-bounds coordinates return
    /// [`MatrixError::BadIndex`] where indexing would panic.
    fn get(&self, r: usize, c: usize) -> Result<T, MatrixError> {
        let (m, n) = self.size();
        if (1..=m).contains(&r) && (1..=n).contains(&c) {
            Ok(self[(r, c)])
        } else {
            Err(MatrixError::BadIndex { r, c })
        }
    }

    /// Materialize an owned copy of the addressed values.
    fn to_matrix(&self) -> Matrix<T> {
        let (m, n) = self.size();
        let mut out = Matrix::zeros((m, n));
        for c in 1..=n {
            for r in 1..=m {
                out[(r, c)] = self[(r, c)];
            }
        }
        out
    }
}
