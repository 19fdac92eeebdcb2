//! Transitive closure of a directed graph (Warshall).
//!
//! Entry `(i, j)` of the result is true iff `j` can be reached from `i` over one or more edges.
//! The diagonal is not forced to true: a vertex reaches itself only through a self-loop or a
//! cycle.

#[cfg(not(feature = "no-multi-thread"))]
use rayon::prelude::*;
use tracing::debug;

use crate::{error::ShapeError, matrix::Matrix, validate::ensure_square};

/// Warshall's algorithm over the edge-presence matrix of `adjacency` (`weight != 0`).
pub fn reachability(adjacency: &Matrix<i64>) -> Result<Matrix<bool>, ShapeError> {
    reachability_with(adjacency, |_, _| {})
}

/// Like [`reachability`], calling `observe(k, &closure)` after every completed k-pass.
pub fn reachability_with<F>(adjacency: &Matrix<i64>, mut observe: F) -> Result<Matrix<bool>, ShapeError>
where
    F: FnMut(usize, &Matrix<bool>),
{
    let n = ensure_square(adjacency)?;
    debug!(n, "computing reachability");

    let mut closure = adjacency.map(|&w| w != 0);
    for k in 0..n {
        let p = closure.as_mut_slice();
        // Loop order is k, then j, then i. Entries only ever flip false -> true, so reading
        // cells already updated in this pass cannot produce a wrong closure.
        for j in 0..n {
            for i in 0..n {
                p[n*i + j] = p[n*i + j] || (p[n*i + k] && p[n*k + j]);
            }
        }
        observe(k, &closure);
    }
    Ok(closure)
}

/// Row-parallel variant of [`reachability`]. Produces the same closure.
pub fn reachability_par(adjacency: &Matrix<i64>) -> Result<Matrix<bool>, ShapeError> {
    let n = ensure_square(adjacency)?;
    debug!(n, "computing reachability (row-parallel)");

    let mut closure = adjacency.map(|&w| w != 0);
    if n == 0 {
        return Ok(closure);
    }
    for k in 0..n {
        let p = closure.as_mut_slice();
        // Row k and column k do not change during pass k, so every row can be updated
        // independently against a copy of row k
        let k_row = p[n*k..n*(k+1)].to_vec();
        let _step_row = |row: &mut [bool]| {
            if !row[k] {
                return;
            }
            for (x, &y) in row.iter_mut().zip(k_row.iter()) {
                *x = *x || y;
            }
        };
        #[cfg(not(feature = "no-multi-thread"))]
        p.par_chunks_mut(n).for_each(_step_row);
        #[cfg(feature = "no-multi-thread")]
        p.chunks_mut(n).for_each(_step_row);
    }
    Ok(closure)
}
