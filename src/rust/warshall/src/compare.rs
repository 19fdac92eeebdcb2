use crate::matrix::Matrix;

/// True iff both matrices have the same shape and equal elements everywhere.
pub fn matrices_equal<T: PartialEq>(left: &Matrix<T>, right: &Matrix<T>) -> bool {
    if left.rows() != right.rows() || left.cols() != right.cols() {
        return false;
    }
    left.as_slice()
        .iter()
        .zip(right.as_slice())
        .all(|(l, r)| l == r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_equals_itself() {
        let m = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert!(matrices_equal(&m, &m));
        assert!(matrices_equal(&m, &m.clone()));
    }

    #[test]
    fn single_element_difference() {
        let a = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![0, 1], vec![1, 1]]).unwrap();
        assert!(!matrices_equal(&a, &b));
    }

    #[test]
    fn shape_mismatch_with_matching_overlap() {
        let small = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let wide = Matrix::from_rows(vec![vec![1, 2, 0], vec![3, 4, 0]]).unwrap();
        let tall = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![0, 0]]).unwrap();
        assert!(!matrices_equal(&small, &wide));
        assert!(!matrices_equal(&small, &tall));
        assert!(!matrices_equal(&wide, &small));
    }

    #[test]
    fn same_flat_data_different_shape() {
        let a = Matrix::new(2, 3, vec![true; 6]).unwrap();
        let b = Matrix::new(3, 2, vec![true; 6]).unwrap();
        assert!(!matrices_equal(&a, &b));
    }

    #[test]
    fn empty_matrices_are_equal() {
        let a: Matrix<bool> = Matrix::filled(0, 0, false);
        assert!(matrices_equal(&a, &Matrix::filled(0, 0, true)));
    }
}
