use crate::{error::ShapeError, matrix::Matrix};

/// Returns the vertex count `n` of an `n x n` matrix, or the offending shape.
pub fn ensure_square<T>(matrix: &Matrix<T>) -> Result<usize, ShapeError> {
    if matrix.is_square() {
        Ok(matrix.rows())
    } else {
        Err(ShapeError {
            rows: matrix.rows(),
            cols: matrix.cols(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn square_matrices_yield_their_size(#[case] n: usize) {
        let m = Matrix::filled(n, n, 0i64);
        assert_eq!(ensure_square(&m), Ok(n));
    }

    #[rstest]
    #[case(2, 3)]
    #[case(3, 2)]
    #[case(2, 0)]
    fn non_square_matrices_report_both_dimensions(#[case] rows: usize, #[case] cols: usize) {
        let m = Matrix::filled(rows, cols, 0i64);
        assert_eq!(ensure_square(&m), Err(ShapeError { rows, cols }));
    }
}
