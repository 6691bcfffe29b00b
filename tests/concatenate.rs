use densemat::algebra::*;

fn left_2x3() -> Matrix<f64> {
    Matrix::from(&[
        [1.0, 2.0, 3.0], //
        [4.0, 5.0, 6.0], //
    ])
}

#[test]
fn hcat_widens() {
    let a = left_2x3();
    let b = Matrix::from(&[[7.0], [8.0]]);
    let ab = Matrix::hcat(&a, &b).unwrap();
    assert_eq!(ab.size(), (2, 4));
    assert_eq!(
        ab,
        Matrix::from(&[
            [1.0, 2.0, 3.0, 7.0], //
            [4.0, 5.0, 6.0, 8.0], //
        ])
    );
}

#[test]
fn vcat_deepens() {
    let a = left_2x3();
    let b = Matrix::from(&[[7.0, 8.0, 9.0]]);
    let ab = Matrix::vcat(&a, &b).unwrap();
    assert_eq!(ab.size(), (3, 3));
    assert_eq!(
        ab,
        Matrix::from(&[
            [1.0, 2.0, 3.0], //
            [4.0, 5.0, 6.0], //
            [7.0, 8.0, 9.0], //
        ])
    );
}

#[test]
fn hcat_rejects_row_mismatch() {
    let a = left_2x3();
    let b = Matrix::<f64>::zeros((3, 1));
    assert!(matches!(
        Matrix::hcat(&a, &b),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
fn vcat_rejects_column_mismatch() {
    let a = left_2x3();
    let b = Matrix::<f64>::zeros((1, 2));
    assert!(matches!(
        Matrix::vcat(&a, &b),
        Err(MatrixError::ShapeMismatch { .. })
    ));
}

#[test]
fn concat_accepts_views() {
    let a = left_2x3();
    let top = a.select("R1").unwrap();
    let bottom = a.select("R2").unwrap();
    assert_eq!(Matrix::vcat(&bottom, &top).unwrap().size(), (2, 3));

    let first = a.select("C1").unwrap();
    let last = a.select("C3").unwrap();
    let narrow = Matrix::hcat(&first, &last).unwrap();
    assert_eq!(
        narrow,
        Matrix::from(&[
            [1.0, 3.0], //
            [4.0, 6.0], //
        ])
    );
}

#[test]
fn concat_then_split_recovers_operands() {
    let a = left_2x3();
    let b = &a * -1.0;
    let stacked = Matrix::vcat(&a, &b).unwrap();
    let top = stacked.view((1, 1), (2, 3)).unwrap();
    let bottom = stacked.view((3, 1), (4, 3)).unwrap();
    assert_eq!(top.to_matrix(), a);
    assert_eq!(bottom.to_matrix(), b);
}

#[test]
fn concat_with_empty_operand() {
    let a = left_2x3();
    let empty = Matrix::<f64>::zeros((2, 0));
    assert_eq!(Matrix::hcat(&a, &empty).unwrap(), a);
    assert_eq!(Matrix::hcat(&empty, &a).unwrap(), a);
}
