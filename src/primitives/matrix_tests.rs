use super::*;

#[test]
fn test_from_vec_valid() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
}

#[test]
fn test_from_vec_wrong_length() {
    let err = Matrix::from_vec(2, 3, vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn test_from_vec_shape_overflow() {
    let err = Matrix::from_vec(usize::MAX, 2, vec![1.0]).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn test_get_set_row_major() {
    let mut m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.get(0, 1), 2.0);
    assert_eq!(m.get(1, 0), 3.0);

    m.set(1, 1, 9.0);
    assert_eq!(m.get(1, 1), 9.0);
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 9.0]);
}

#[test]
fn test_row_is_contiguous_slice() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_try_zeros_shape_and_contents() {
    let m = Matrix::try_zeros(3, 4).unwrap();
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.as_slice().len(), 12);
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_try_zeros_unsatisfiable() {
    let err = Matrix::try_zeros(isize::MAX as usize, 2).unwrap_err();
    assert!(matches!(err, Error::Allocation { .. }));
}

#[test]
fn test_as_mut_slice_writes_through() {
    let mut m = Matrix::try_zeros(2, 2).unwrap();
    m.as_mut_slice()[3] = 5.0;
    assert_eq!(m.get(1, 1), 5.0);
}
