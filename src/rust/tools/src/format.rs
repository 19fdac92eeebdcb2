use std::fmt::{Display, Write};

use warshall::Matrix;

/// Width every cell is right-aligned to.
pub const CELL_WIDTH: usize = 8;

fn write_rows<T: Display>(out: &mut String, matrix: &Matrix<T>, last_newline: bool) {
    let rows = matrix.rows();
    for (r, row) in matrix.iter_rows().enumerate() {
        for value in row {
            // Writing into a String cannot fail
            let _ = write!(out, "|{:>width$}", value.to_string(), width = CELL_WIDTH);
        }
        out.push('|');
        if r + 1 < rows || last_newline {
            out.push('\n');
        }
    }
}

/// Renders a matrix as aligned text, one line per row:
///
/// ```text
/// |       0|       1|
/// |       3|       0|
/// ```
///
/// There is no newline after the last row.
pub fn format_matrix<T: Display>(matrix: &Matrix<T>) -> String {
    let mut out = String::new();
    write_rows(&mut out, matrix, false);
    out
}

/// Renders a stack of matrices, each preceded by a `k = {index}` line.
pub fn format_layers<T: Display>(layers: &[Matrix<T>]) -> String {
    let mut out = String::new();
    for (k, layer) in layers.iter().enumerate() {
        let _ = writeln!(out, "k = {k}");
        write_rows(&mut out, layer, k + 1 < layers.len());
    }
    out
}
