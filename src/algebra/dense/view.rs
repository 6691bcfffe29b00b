use crate::algebra::{DenseMatrix, FloatT, Matrix, MatrixError, ShapedMatrix};
use std::ops::{Index, IndexMut};

/// Read-only window onto a rectangular region of a live [`Matrix`].
///
/// A view never copies data: it holds a borrow of its target for its
/// entire lifetime, translating its own 1-indexed local coordinates to
/// the target's by `(headRow + r - 1, headColumn + c - 1)`.  The target
/// area cannot be changed after construction.  A view exposes neither
/// more nor less than the declared rectangle: local out-of-bounds access
/// is rejected even where the translated coordinate would land inside
/// the target.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T = f64> {
    pub(crate) target: &'a Matrix<T>,
    /// 1-based (headRow, headColumn) offset within the target
    pub(crate) head: (usize, usize),
    /// view dimensions as (rows, cols), independent of the target's
    pub(crate) size: (usize, usize),
}

/// Write-through window onto a rectangular region of a live [`Matrix`].
///
/// Same coordinate translation as [`MatrixView`], but holding the target
/// exclusively: writes through the view are writes to the target.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T = f64> {
    pub(crate) target: &'a mut Matrix<T>,
    pub(crate) head: (usize, usize),
    pub(crate) size: (usize, usize),
}

// shared head/extent validation: spans rows r1..=r2, cols c1..=c2 of a
// target with the given size, producing the head and the view size
fn checked_extent(
    target_size: (usize, usize),
    (r1, c1): (usize, usize),
    (r2, c2): (usize, usize),
) -> Result<((usize, usize), (usize, usize)), MatrixError> {
    let (m, n) = target_size;
    if r1 < 1 || c1 < 1 || r1 > r2 || c1 > c2 || r2 > m || c2 > n {
        return Err(MatrixError::OutOfRange);
    }
    Ok(((r1, c1), (r2 - r1 + 1, c2 - c1 + 1)))
}

fn translate(
    head: (usize, usize),
    size: (usize, usize),
    (r, c): (usize, usize),
) -> (usize, usize) {
    let (h, w) = size;
    assert!(
        (1..=h).contains(&r) && (1..=w).contains(&c),
        "no element at row {}, column {}",
        r,
        c
    );
    (head.0 + r - 1, head.1 + c - 1)
}

impl<'a, T> MatrixView<'a, T>
where
    T: FloatT,
{
    /// View spanning target rows `r1..=r2` and columns `c1..=c2`
    /// inclusive.  Fails if the span falls outside the target or is
    /// empty.
    pub fn new(
        target: &'a Matrix<T>,
        head: (usize, usize),
        tail: (usize, usize),
    ) -> Result<Self, MatrixError> {
        let (head, size) = checked_extent(target.size(), head, tail)?;
        Ok(Self { target, head, size })
    }

    /// Sub-rectangle of this view, addressed in the view's own local
    /// coordinates.  The result aliases the same target.
    pub fn subview(
        &self,
        head: (usize, usize),
        tail: (usize, usize),
    ) -> Result<MatrixView<'a, T>, MatrixError> {
        let (local, size) = checked_extent(self.size, head, tail)?;
        Ok(MatrixView {
            target: self.target,
            head: (self.head.0 + local.0 - 1, self.head.1 + local.1 - 1),
            size,
        })
    }
}

impl<'a, T> MatrixViewMut<'a, T>
where
    T: FloatT,
{
    /// Write-through view spanning target rows `r1..=r2` and columns
    /// `c1..=c2` inclusive.
    pub fn new(
        target: &'a mut Matrix<T>,
        head: (usize, usize),
        tail: (usize, usize),
    ) -> Result<Self, MatrixError> {
        let (head, size) = checked_extent(target.size(), head, tail)?;
        Ok(Self { target, head, size })
    }

    /// Replace the view's values with `src`'s.
    ///
    /// Since this overwrites values inside another matrix, the source
    /// must have exactly the view's dimensions; only the aliased cells
    /// are touched and the target's shape never changes.
    pub fn assign<M>(&mut self, src: &M) -> Result<(), MatrixError>
    where
        M: DenseMatrix<T>,
    {
        if self.size != src.size() {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.size,
                rhs: src.size(),
            });
        }
        let (h, w) = self.size;
        for c in 1..=w {
            for r in 1..=h {
                self[(r, c)] = src[(r, c)];
            }
        }
        Ok(())
    }

    /// In-place `self += a * x`, the row-update primitive of
    /// Gauss-Jordan elimination.
    pub fn axpy<M>(&mut self, a: T, x: &M) -> Result<(), MatrixError>
    where
        M: DenseMatrix<T>,
    {
        if self.size != x.size() {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.size,
                rhs: x.size(),
            });
        }
        let (h, w) = self.size;
        for c in 1..=w {
            for r in 1..=h {
                let update = a * x[(r, c)];
                self[(r, c)] += update;
            }
        }
        Ok(())
    }

    /// In-place elementwise scaling.
    pub fn scale(&mut self, a: T) {
        let (h, w) = self.size;
        for c in 1..=w {
            for r in 1..=h {
                self[(r, c)] *= a;
            }
        }
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            target: self.target,
            head: self.head,
            size: self.size,
        }
    }
}

impl<'a, T> ShapedMatrix for MatrixView<'a, T> {
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

impl<'a, T> ShapedMatrix for MatrixViewMut<'a, T> {
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

impl<'a, T> DenseMatrix<T> for MatrixView<'a, T> where T: FloatT {}
impl<'a, T> DenseMatrix<T> for MatrixViewMut<'a, T> where T: FloatT {}

impl<'a, T> Index<(usize, usize)> for MatrixView<'a, T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.target[translate(self.head, self.size, idx)]
    }
}

impl<'a, T> Index<(usize, usize)> for MatrixViewMut<'a, T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.target[translate(self.head, self.size, idx)]
    }
}

impl<'a, T> IndexMut<(usize, usize)> for MatrixViewMut<'a, T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let tidx = translate(self.head, self.size, idx);
        &mut self.target[tidx]
    }
}
