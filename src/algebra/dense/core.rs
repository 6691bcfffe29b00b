use crate::algebra::{
    DenseMatrix, FloatT, Matrix, MatrixError, MatrixView, MatrixViewMut, ShapedMatrix,
};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// An empty 0x0 matrix.
    pub fn empty() -> Self {
        Self {
            size: (0, 0),
            data: Vec::new(),
        }
    }

    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { size, data }
    }

    /// Matrix from raw column major data.
    ///
    /// # Panics
    /// Panics unless `data.len() == size.0 * size.1`.
    pub fn new(size: (usize, usize), data: Vec<T>) -> Self {
        let (m, n) = size;
        assert!(m * n == data.len());
        Self { size, data }
    }

    /// n x n matrix with 1 on the diagonal and 0 elsewhere.
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.is_square());
        self.data.fill(T::zero());
        for i in 1..=self.ncols() {
            self[(i, i)] = T::one();
        }
    }

    /// Matrix from a list of rows.  All rows must have equal length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, MatrixError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != n) {
            return Err(MatrixError::NonUniformWidth);
        }
        let mut out = Self::zeros((m, n));
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                out[(r + 1, c + 1)] = v;
            }
        }
        Ok(out)
    }

    /// Column vector from a flat list: a single-row matrix over the list,
    /// transposed.
    pub fn col_vector(vals: &[T]) -> Self {
        Self::new((1, vals.len()), vals.to_vec()).transposed()
    }

    /// A new matrix with `result[(c, r)] = self[(r, c)]` for all valid
    /// coordinates.  The receiver is not mutated.
    pub fn transposed(&self) -> Self {
        let (m, n) = self.size;
        let mut out = Self::zeros((n, m));
        for c in 1..=n {
            for r in 1..=m {
                out[(c, r)] = self[(r, c)];
            }
        }
        out
    }

    /// Write `src`'s values into this matrix starting at `(r, c)`.
    /// Fails if the placement would exceed this matrix's bounds; nothing
    /// is written on failure.
    pub fn set_at<M>(&mut self, r: usize, c: usize, src: &M) -> Result<(), MatrixError>
    where
        M: DenseMatrix<T>,
    {
        let (m, n) = self.size;
        if r < 1 || c < 1 || r + src.nrows() - 1 > m || c + src.ncols() - 1 > n {
            return Err(MatrixError::OutOfRange);
        }
        for cs in 1..=src.ncols() {
            for rs in 1..=src.nrows() {
                self[(r + rs - 1, c + cs - 1)] = src[(rs, cs)];
            }
        }
        Ok(())
    }

    /// Read-only view spanning rows `r1..=r2` and columns `c1..=c2`.
    pub fn view(
        &self,
        (r1, c1): (usize, usize),
        (r2, c2): (usize, usize),
    ) -> Result<MatrixView<'_, T>, MatrixError> {
        MatrixView::new(self, (r1, c1), (r2, c2))
    }

    /// Write-through view spanning rows `r1..=r2` and columns `c1..=c2`.
    pub fn view_mut(
        &mut self,
        (r1, c1): (usize, usize),
        (r2, c2): (usize, usize),
    ) -> Result<MatrixViewMut<'_, T>, MatrixError> {
        MatrixViewMut::new(self, (r1, c1), (r2, c2))
    }

    /// View of the entire `r`th row (height 1, width `ncols`).
    pub fn row(&self, r: usize) -> Result<MatrixView<'_, T>, MatrixError> {
        self.view((r, 1), (r, self.ncols()))
    }

    /// View of the entire `c`th column (width 1, height `nrows`).
    pub fn col(&self, c: usize) -> Result<MatrixView<'_, T>, MatrixError> {
        self.view((1, c), (self.nrows(), c))
    }

    /// Write-through view of the entire `r`th row.
    pub fn row_mut(&mut self, r: usize) -> Result<MatrixViewMut<'_, T>, MatrixError> {
        self.view_mut((r, 1), (r, self.ncols()))
    }

    /// Write-through view of the entire `c`th column.
    pub fn col_mut(&mut self, c: usize) -> Result<MatrixViewMut<'_, T>, MatrixError> {
        self.view_mut((1, c), (self.nrows(), c))
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut out = Self::zeros((R, C));
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                out[(r + 1, c + 1)] = v;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let eye: Matrix<f64> = Matrix::identity(3);
        assert_eq!(
            eye,
            Matrix::from(&[
                [1.0, 0.0, 0.0], //
                [0.0, 1.0, 0.0], //
                [0.0, 0.0, 1.0], //
            ])
        );
    }

    #[test]
    fn test_from_rows_uniform_width() {
        let ok = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(ok, Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]));

        let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(ragged, Err(MatrixError::NonUniformWidth)));
    }

    #[test]
    fn test_col_vector() {
        let v = Matrix::col_vector(&[1.0, 2.0, 3.0]);
        assert_eq!(v.size(), (3, 1));
        assert_eq!(v[(2, 1)], 2.0);
    }

    #[test]
    fn test_transposed_involution() {
        let a = Matrix::from(&[
            [1.0, 2.0, 3.0], //
            [4.0, 5.0, 6.0], //
        ]);
        assert_eq!(a.transposed().size(), (3, 2));
        assert_eq!(a.transposed()[(3, 2)], 6.0);
        assert_eq!(a.transposed().transposed(), a);
    }

    #[test]
    fn test_set_at() {
        let mut a: Matrix<f64> = Matrix::zeros((3, 3));
        let b = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);

        a.set_at(2, 2, &b).unwrap();
        assert_eq!(a[(2, 2)], 1.0);
        assert_eq!(a[(3, 3)], 4.0);
        assert_eq!(a[(1, 1)], 0.0);

        // placement would spill over the right edge; nothing written
        let before = a.clone();
        assert!(matches!(
            a.set_at(3, 3, &b),
            Err(MatrixError::OutOfRange)
        ));
        assert_eq!(a, before);
    }
}
