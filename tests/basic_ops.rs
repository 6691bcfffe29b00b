use densemat::algebra::*;

fn basic_ops_data() -> (Matrix<f64>, Matrix<f64>) {
    // A = [1 2 3; 4 5 6]
    // B = [6 5 4; 3 2 1]
    let a = Matrix::from(&[
        [1.0, 2.0, 3.0], //
        [4.0, 5.0, 6.0], //
    ]);
    let b = Matrix::from(&[
        [6.0, 5.0, 4.0], //
        [3.0, 2.0, 1.0], //
    ]);
    (a, b)
}

#[test]
fn add_sub_elementwise() {
    let (a, b) = basic_ops_data();
    let sum = &a + &b;
    assert_eq!(sum, Matrix::from(&[[7.0, 7.0, 7.0], [7.0, 7.0, 7.0]]));
    assert_eq!(&sum - &b, a);
}

#[test]
fn add_sub_assign() {
    let (a, b) = basic_ops_data();
    let mut c = a.clone();
    c += &b;
    c -= &b;
    assert_eq!(c, a);
}

#[test]
fn checked_add_rejects_shape_mismatch() {
    let (a, _) = basic_ops_data();
    let b = a.transposed();
    assert!(matches!(
        a.try_add(&b),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
#[should_panic]
fn operator_add_panics_on_shape_mismatch() {
    let (a, _) = basic_ops_data();
    let b = a.transposed();
    let _ = &a + &b;
}

#[test]
fn matmul_rectangular() {
    let (a, b) = basic_ops_data();
    let prod = &a * &b.transposed();
    // (2x3)·(3x2)
    assert_eq!(
        prod,
        Matrix::from(&[
            [28.0, 10.0], //
            [73.0, 28.0], //
        ])
    );
}

#[test]
fn matmul_by_identity_is_noop() {
    let (a, _) = basic_ops_data();
    assert_eq!(&a * &Matrix::<f64>::identity(3), a);
}

#[test]
fn checked_mul_rejects_inner_dimension_mismatch() {
    let (a, b) = basic_ops_data();
    assert!(matches!(
        a.try_mul(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn scalar_mul_div_and_negation() {
    let (a, _) = basic_ops_data();
    let doubled = &a * 2.0;
    assert_eq!(doubled, 2.0 * &a);
    assert_eq!(&doubled / 2.0, a);
    let negated = -&a;
    assert_eq!(&negated + &doubled, a);
}

#[test]
fn transpose_swaps_coordinates() {
    let (a, _) = basic_ops_data();
    let at = a.transposed();
    assert_eq!(at.size(), (3, 2));
    for r in 1..=2 {
        for c in 1..=3 {
            assert_eq!(at[(c, r)], a[(r, c)]);
        }
    }
}

#[test]
fn index_is_one_based() {
    let (a, _) = basic_ops_data();
    assert_eq!(a[(1, 1)], 1.0);
    assert_eq!(a[(2, 3)], 6.0);
    assert!(matches!(a.get(0, 1), Err(MatrixError::BadIndex { .. })));
    assert!(matches!(a.get(3, 1), Err(MatrixError::BadIndex { .. })));
}
