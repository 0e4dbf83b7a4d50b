pub(crate) use super::*;
use crate::error::ErrorKind;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let err = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 1) - 4.0).abs() < 1e-12);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-12);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_matmul() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).expect("2x2");
    let c = a.matmul(&b).expect("dimensions match");
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("2x3");
    let b = Matrix::from_vec(2, 2, vec![1.0; 4]).expect("2x2");
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_matvec() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("2x3");
    let v = Vector::from_vec(vec![1.0, 0.0, -1.0]);
    let r = a.matvec(&v).expect("dimensions match");
    assert_eq!(r.as_slice(), &[-2.0, -2.0]);
    assert!(a.matvec(&Vector::from_vec(vec![1.0])).is_err());
}

#[test]
fn test_cholesky_solve() {
    // A = [[4, 2], [2, 3]], b = [2, 1] -> x = [0.5, 0]
    let a = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).expect("2x2");
    let b = Vector::from_vec(vec![2.0, 1.0]);
    let x = a.cholesky_solve(&b).expect("positive definite");
    assert!((x[0] - 0.5).abs() < 1e-12);
    assert!(x[1].abs() < 1e-12);
}

#[test]
fn test_cholesky_singular() {
    // Second column is twice the first: A = XᵀX is singular.
    let x = Matrix::from_vec(3, 2, vec![1.0, 2.0, 2.0, 4.0, 3.0, 6.0]).expect("3x2");
    let xtx = x.transpose().matmul(&x).expect("square");
    let err = xtx
        .cholesky_solve(&Vector::from_vec(vec![1.0, 2.0]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
}

#[test]
fn test_cholesky_zero_matrix() {
    let a = Matrix::from_vec(2, 2, vec![0.0; 4]).expect("2x2");
    let err = a
        .cholesky_solve(&Vector::from_vec(vec![0.0, 0.0]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
}

#[test]
fn test_cholesky_not_square() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("2x3");
    let err = a.cholesky_solve(&Vector::from_vec(vec![1.0, 1.0])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
