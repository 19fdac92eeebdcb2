use thiserror::Error;

/// Raised by both engines when the adjacency matrix is not square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrix is not square: {rows} rows x {cols} columns")]
pub struct ShapeError {
    pub rows: usize,
    pub cols: usize,
}

/// Construction errors of [`crate::matrix::Matrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot shape {found} elements into a {rows}x{cols} matrix")]
    DataLength {
        rows: usize,
        cols: usize,
        found: usize,
    },
}
