use crate::algebra::{
    DenseMatrix, FloatT, Matrix, MatrixError, MatrixView, MatrixViewMut, ShapedMatrix,
};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Checked arithmetic over anything implementing [`DenseMatrix`], so
/// owned matrices and views interoperate freely.  Every kernel verifies
/// operand shapes before touching any data and allocates a fresh result.
///
/// The std operator impls below are sugar over these kernels and panic
/// with the corresponding [`MatrixError`] message on misuse; callers who
/// want failures as values use the `try_*` forms directly.
pub trait MatrixMath<T: FloatT>: DenseMatrix<T> + Sized {
    /// Elementwise sum.  Operands must have identical dimensions.
    fn try_add<M: DenseMatrix<T>>(&self, rhs: &M) -> Result<Matrix<T>, MatrixError> {
        if !self.is_same_shape(rhs) {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let (m, n) = self.size();
        let mut out = Matrix::zeros((m, n));
        for c in 1..=n {
            for r in 1..=m {
                out[(r, c)] = self[(r, c)] + rhs[(r, c)];
            }
        }
        Ok(out)
    }

    /// Elementwise difference.  Operands must have identical dimensions.
    fn try_sub<M: DenseMatrix<T>>(&self, rhs: &M) -> Result<Matrix<T>, MatrixError> {
        if !self.is_same_shape(rhs) {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let (m, n) = self.size();
        let mut out = Matrix::zeros((m, n));
        for c in 1..=n {
            for r in 1..=m {
                out[(r, c)] = self[(r, c)] - rhs[(r, c)];
            }
        }
        Ok(out)
    }

    /// Matrix product.  The left operand must have as many columns as
    /// the right has rows; result cell `(r, c)` is the dot product of
    /// the left's row `r` and the right's column `c`.
    fn try_mul<M: DenseMatrix<T>>(&self, rhs: &M) -> Result<Matrix<T>, MatrixError> {
        if self.ncols() != rhs.nrows() {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let (m, k, n) = (self.nrows(), self.ncols(), rhs.ncols());
        let mut out = Matrix::zeros((m, n));
        for c in 1..=n {
            for r in 1..=m {
                let mut acc = T::zero();
                for i in 1..=k {
                    acc += self[(r, i)] * rhs[(i, c)];
                }
                out[(r, c)] = acc;
            }
        }
        Ok(out)
    }

    /// Elementwise scalar product, into a new matrix.
    fn scaled(&self, a: T) -> Matrix<T> {
        let (m, n) = self.size();
        let mut out = Matrix::zeros((m, n));
        for c in 1..=n {
            for r in 1..=m {
                out[(r, c)] = self[(r, c)] * a;
            }
        }
        out
    }

    /// Elementwise scalar quotient, into a new matrix.
    fn div_scaled(&self, a: T) -> Matrix<T> {
        let (m, n) = self.size();
        let mut out = Matrix::zeros((m, n));
        for c in 1..=n {
            for r in 1..=m {
                out[(r, c)] = self[(r, c)] / a;
            }
        }
        out
    }

    /// Negation of all components.
    fn negated(&self) -> Matrix<T> {
        self.scaled(-T::one())
    }
}

impl<T: FloatT, M: DenseMatrix<T> + Sized> MatrixMath<T> for M {}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// In-place elementwise scaling.
    pub fn scale(&mut self, a: T) {
        self.data.iter_mut().for_each(|v| *v *= a);
    }

    /// In-place negation of all components.
    pub fn negate(&mut self) {
        self.data.iter_mut().for_each(|v| *v = -*v);
    }
}

// ---------------------------------------------------------------
// operator sugar: Matrix and MatrixView operands in all combinations
// ---------------------------------------------------------------

fn unwrap_op<T>(result: Result<T, MatrixError>) -> T {
    match result {
        Ok(out) => out,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_matrix_binop {
    ($Op:ident, $opfn:ident, $kernel:ident) => {
        impl<T: FloatT> $Op<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $opfn(self, rhs: &Matrix<T>) -> Matrix<T> {
                unwrap_op(self.$kernel(rhs))
            }
        }
        impl<'r, T: FloatT> $Op<&MatrixView<'r, T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $opfn(self, rhs: &MatrixView<'r, T>) -> Matrix<T> {
                unwrap_op(self.$kernel(rhs))
            }
        }
        impl<'l, T: FloatT> $Op<&Matrix<T>> for &MatrixView<'l, T> {
            type Output = Matrix<T>;
            fn $opfn(self, rhs: &Matrix<T>) -> Matrix<T> {
                unwrap_op(self.$kernel(rhs))
            }
        }
        impl<'l, 'r, T: FloatT> $Op<&MatrixView<'r, T>> for &MatrixView<'l, T> {
            type Output = Matrix<T>;
            fn $opfn(self, rhs: &MatrixView<'r, T>) -> Matrix<T> {
                unwrap_op(self.$kernel(rhs))
            }
        }
    };
}

impl_matrix_binop!(Add, add, try_add);
impl_matrix_binop!(Sub, sub, try_sub);
impl_matrix_binop!(Mul, mul, try_mul);

// scalar on the right, for owned matrices and views
macro_rules! impl_scalar_binop {
    ($Op:ident, $opfn:ident, $kernel:ident) => {
        impl<T: FloatT> $Op<T> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $opfn(self, a: T) -> Matrix<T> {
                self.$kernel(a)
            }
        }
        impl<T: FloatT> $Op<T> for Matrix<T> {
            type Output = Matrix<T>;
            fn $opfn(self, a: T) -> Matrix<T> {
                self.$kernel(a)
            }
        }
        impl<'l, T: FloatT> $Op<T> for &MatrixView<'l, T> {
            type Output = Matrix<T>;
            fn $opfn(self, a: T) -> Matrix<T> {
                self.$kernel(a)
            }
        }
    };
}

impl_scalar_binop!(Mul, mul, scaled);
impl_scalar_binop!(Div, div, div_scaled);

// scalar on the left only works for concrete float types
macro_rules! impl_left_scalar_mul {
    ($ty:ty) => {
        impl Mul<&Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;
            fn mul(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                rhs.scaled(self)
            }
        }
        impl Mul<Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;
            fn mul(self, rhs: Matrix<$ty>) -> Matrix<$ty> {
                rhs.scaled(self)
            }
        }
        impl<'r> Mul<&MatrixView<'r, $ty>> for $ty {
            type Output = Matrix<$ty>;
            fn mul(self, rhs: &MatrixView<'r, $ty>) -> Matrix<$ty> {
                rhs.scaled(self)
            }
        }
    };
}

impl_left_scalar_mul!(f32);
impl_left_scalar_mul!(f64);

impl<T: FloatT> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.negated()
    }
}

impl<'l, T: FloatT> Neg for &MatrixView<'l, T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.negated()
    }
}

impl<T: FloatT> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(mut self) -> Matrix<T> {
        self.negate();
        self
    }
}

// ---------------------------------------------------------------
// assigning forms
// ---------------------------------------------------------------

impl<T: FloatT> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_op(self.try_add(rhs));
    }
}

impl<'r, T: FloatT> AddAssign<&MatrixView<'r, T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &MatrixView<'r, T>) {
        *self = unwrap_op(self.try_add(rhs));
    }
}

impl<T: FloatT> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_op(self.try_sub(rhs));
    }
}

impl<'r, T: FloatT> SubAssign<&MatrixView<'r, T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &MatrixView<'r, T>) {
        *self = unwrap_op(self.try_sub(rhs));
    }
}

// the full product is computed before the receiver is replaced, so
// self-referential updates cannot observe partial state
impl<T: FloatT> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_op(self.try_mul(rhs));
    }
}

impl<'r, T: FloatT> MulAssign<&MatrixView<'r, T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &MatrixView<'r, T>) {
        *self = unwrap_op(self.try_mul(rhs));
    }
}

impl<T: FloatT> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, a: T) {
        self.scale(a);
    }
}

impl<T: FloatT> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, a: T) {
        self.data.iter_mut().for_each(|v| *v /= a);
    }
}

// views get the same in-place operator set, writing through to the target

impl<'a, T: FloatT> AddAssign<&Matrix<T>> for MatrixViewMut<'a, T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        unwrap_op(self.axpy(T::one(), rhs));
    }
}

impl<'a, 'r, T: FloatT> AddAssign<&MatrixView<'r, T>> for MatrixViewMut<'a, T> {
    fn add_assign(&mut self, rhs: &MatrixView<'r, T>) {
        unwrap_op(self.axpy(T::one(), rhs));
    }
}

impl<'a, T: FloatT> SubAssign<&Matrix<T>> for MatrixViewMut<'a, T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        unwrap_op(self.axpy(-T::one(), rhs));
    }
}

impl<'a, 'r, T: FloatT> SubAssign<&MatrixView<'r, T>> for MatrixViewMut<'a, T> {
    fn sub_assign(&mut self, rhs: &MatrixView<'r, T>) {
        unwrap_op(self.axpy(-T::one(), rhs));
    }
}

impl<'a, T: FloatT> MulAssign<T> for MatrixViewMut<'a, T> {
    fn mul_assign(&mut self, a: T) {
        self.scale(a);
    }
}

impl<'a, T: FloatT> DivAssign<T> for MatrixViewMut<'a, T> {
    fn div_assign(&mut self, a: T) {
        let (h, w) = self.size();
        for c in 1..=w {
            for r in 1..=h {
                self[(r, c)] /= a;
            }
        }
    }
}
