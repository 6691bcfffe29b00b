use crate::algebra::{FloatT, Matrix, MatrixError, MatrixView, MatrixViewMut};

// Address mini-language: a one-character selector followed by a 1-based
// index.  "R3" is the whole third row, "C2" the whole second column.
// No other forms are recognized.

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Resolve a compact textual address to a read-only view.
    ///
    /// `R<n>` spans the entire nth row (height 1); `C<n>` spans the
    /// entire nth column (width 1).  An unknown selector fails with
    /// [`MatrixError::BadAddress`]; a malformed index surfaces the
    /// integer parser's error; an out-of-range index fails like the
    /// equivalent [`Matrix::view`] call.
    pub fn select(&self, address: &str) -> Result<MatrixView<'_, T>, MatrixError> {
        let (selector, index) = split_address(address)?;
        match selector {
            'R' => self.row(index),
            'C' => self.col(index),
            _ => Err(MatrixError::BadAddress(address.to_string())),
        }
    }

    /// Resolve a compact textual address to a write-through view; see
    /// [`Matrix::select`].
    pub fn select_mut(&mut self, address: &str) -> Result<MatrixViewMut<'_, T>, MatrixError> {
        let (selector, index) = split_address(address)?;
        match selector {
            'R' => self.row_mut(index),
            'C' => self.col_mut(index),
            _ => Err(MatrixError::BadAddress(address.to_string())),
        }
    }
}

// the index is extracted before the selector is inspected, so a
// malformed number is reported as such even for unknown selectors
fn split_address(address: &str) -> Result<(char, usize), MatrixError> {
    let mut chars = address.chars();
    let selector = chars
        .next()
        .ok_or_else(|| MatrixError::BadAddress(address.to_string()))?;
    let index: usize = chars.as_str().parse()?;
    Ok((selector, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::ShapedMatrix;

    fn target() -> Matrix<f64> {
        Matrix::from(&[
            [1.0, 2.0, 3.0], //
            [4.0, 5.0, 6.0], //
            [7.0, 8.0, 9.0], //
        ])
    }

    #[test]
    fn test_select_row() {
        let a = target();
        let row = a.select("R2").unwrap();
        assert_eq!(row.size(), (1, 3));
        assert_eq!(row[(1, 1)], a[(2, 1)]);
        assert_eq!(row[(1, 3)], 6.0);
    }

    #[test]
    fn test_select_col() {
        let a = target();
        let col = a.select("C2").unwrap();
        assert_eq!(col.size(), (3, 1));
        assert_eq!(col[(1, 1)], 2.0);
        assert_eq!(col[(3, 1)], 8.0);
    }

    #[test]
    fn test_select_mut_writes_through() {
        let mut a = target();
        let mut row = a.select_mut("R1").unwrap();
        row *= 10.0;
        assert_eq!(a[(1, 3)], 30.0);
        assert_eq!(a[(2, 1)], 4.0);
    }

    #[test]
    fn test_select_errors() {
        let a = target();
        assert!(matches!(
            a.select("R5"),
            Err(MatrixError::OutOfRange)
        ));
        assert!(matches!(
            a.select("X2"),
            Err(MatrixError::BadAddress(_))
        ));
        assert!(matches!(
            a.select("Rtwo"),
            Err(MatrixError::BadAddressIndex(_))
        ));
        assert!(matches!(a.select(""), Err(MatrixError::BadAddress(_))));
        // index zero is outside the 1-indexed coordinate space
        assert!(matches!(a.select("R0"), Err(MatrixError::OutOfRange)));
    }
}
