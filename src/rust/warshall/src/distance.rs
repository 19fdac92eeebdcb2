//! All-pairs shortest distances (Floyd-Warshall).
//!
//! Infinity is represented by the finite sentinel `n + 1`, see [`sentinel`]. Results are only
//! meaningful while every shortest path weighs less than `n + 1`; heavier edges are the caller's
//! responsibility. Negative edge weights are accepted, but results on graphs with negative cycles
//! are unspecified. Relaxation saturates at `i64::MIN`/`i64::MAX` instead of overflowing.

#[cfg(not(feature = "no-multi-thread"))]
use rayon::prelude::*;
use tracing::debug;

use crate::{error::ShapeError, matrix::Matrix, validate::ensure_square};

/// Distance reported for unreachable pairs in an `n` vertex graph.
///
/// A simple path has at most `n - 1` unit edges, so `n + 1` never collides with a unit-weight
/// distance, and adding two sentinels cannot overflow the way `i64::MAX` would.
///
/// The sentinel is an ordinary finite value during relaxation. Two unreachable hops sum to
/// `2n + 2`, which replaces any real edge heavier than that: with weights of `n + 1` or more the
/// reported distances no longer describe the graph.
pub fn sentinel(n: usize) -> i64 {
    n as i64 + 1
}

fn initial_distances(adjacency: &Matrix<i64>, n: usize) -> Matrix<i64> {
    let infinity = sentinel(n);
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        for (j, &w) in adjacency.row(i).iter().enumerate() {
            data.push(if i == j {
                // zero-length path wins over any self-loop weight
                0
            } else if w != 0 {
                w
            } else {
                infinity
            });
        }
    }
    Matrix::from_square(n, data)
}

/// Floyd-Warshall over the edge weights of `adjacency`, `0` meaning "no edge".
///
/// The diagonal is 0, unreachable pairs hold [`sentinel`]`(n)`. Only meaningful while every
/// shortest path weighs less than `n + 1`, see [`sentinel`].
pub fn distance(adjacency: &Matrix<i64>) -> Result<Matrix<i64>, ShapeError> {
    distance_with(adjacency, |_, _| {})
}

/// Like [`distance`], calling `observe(k, &distances)` after every completed k-pass.
pub fn distance_with<F>(adjacency: &Matrix<i64>, mut observe: F) -> Result<Matrix<i64>, ShapeError>
where
    F: FnMut(usize, &Matrix<i64>),
{
    let n = ensure_square(adjacency)?;
    debug!(n, infinity = sentinel(n), "computing distances");

    let mut distances = initial_distances(adjacency, n);
    for k in 0..n {
        let d = distances.as_mut_slice();
        // Loop order is k, then j, then i. Entries only ever decrease, so reading cells already
        // relaxed in this pass keeps every value an upper bound of a real path length.
        for j in 0..n {
            for i in 0..n {
                let z = d[n*i + k].saturating_add(d[n*k + j]);
                if d[n*i + j] > z {
                    d[n*i + j] = z;
                }
            }
        }
        observe(k, &distances);
    }
    Ok(distances)
}

/// Row-parallel variant of [`distance`]. Same result unless the graph has a negative cycle.
pub fn distance_par(adjacency: &Matrix<i64>) -> Result<Matrix<i64>, ShapeError> {
    let n = ensure_square(adjacency)?;
    debug!(n, infinity = sentinel(n), "computing distances (row-parallel)");

    let mut distances = initial_distances(adjacency, n);
    if n == 0 {
        return Ok(distances);
    }
    for k in 0..n {
        let d = distances.as_mut_slice();
        // Pass k reads row k frozen; d[i][k] is taken before the row is touched
        let k_row = d[n*k..n*(k+1)].to_vec();
        let _step_row = |row: &mut [i64]| {
            let via = row[k];
            for (x, &y) in row.iter_mut().zip(k_row.iter()) {
                let z = via.saturating_add(y);
                *x = if z < *x { z } else { *x };
            }
        };
        #[cfg(not(feature = "no-multi-thread"))]
        d.par_chunks_mut(n).for_each(_step_row);
        #[cfg(feature = "no-multi-thread")]
        d.chunks_mut(n).for_each(_step_row);
    }
    Ok(distances)
}
