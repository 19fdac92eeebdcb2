//! Sample graphs with known closures and distances.

use rand::{rngs::StdRng, Rng, SeedableRng};
use warshall::Matrix;

/// An adjacency matrix together with independently computed solutions.
pub struct Example {
    pub adjacency: Matrix<i64>,
    /// Transitive closure as 1/0.
    pub closure: Matrix<i64>,
    /// Distances with `n + 1` for unreachable pairs.
    pub distances: Matrix<i64>,
}

fn square<const N: usize>(rows: [[i64; N]; N]) -> Matrix<i64> {
    Matrix::from_fn(N, N, |r, c| rows[r][c])
}

/// Ten vertices in two weakly connected components, with a 2-cycle between 0 and 1.
#[rustfmt::skip]
pub fn reference_example() -> Example {
    Example {
        adjacency: square([
            [0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
            [1, 0, 1, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 1, 1, 0],
        ]),
        closure: square([
            [1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
            [1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
            [1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 1, 1, 0, 0],
            [0, 0, 0, 0, 0, 0, 1, 1, 1, 0],
        ]),
        distances: square([
            [ 0,  1,  2,  3, 11, 11, 11, 11, 11, 11],
            [ 1,  0,  1,  2, 11, 11, 11, 11, 11, 11],
            [11, 11,  0,  1, 11, 11, 11, 11, 11, 11],
            [11, 11, 11,  0, 11, 11, 11, 11, 11, 11],
            [11, 11,  1,  2,  0, 11, 11, 11, 11, 11],
            [ 2,  1,  2,  3, 11,  0, 11, 11, 11, 11],
            [11, 11, 11, 11, 11, 11,  0,  1, 11, 11],
            [11, 11, 11, 11, 11, 11, 11,  0, 11, 11],
            [11, 11, 11, 11, 11, 11,  1,  2,  0, 11],
            [11, 11, 11, 11, 11, 11,  2,  1,  1,  0],
        ]),
    }
}

/// Unit-weight path `0 -> 1 -> ... -> n-1`.
pub fn chain(n: usize) -> Matrix<i64> {
    Matrix::from_fn(n, n, |r, c| i64::from(c == r + 1))
}

/// Unit-weight ring `0 -> 1 -> ... -> n-1 -> 0`.
pub fn cycle(n: usize) -> Matrix<i64> {
    Matrix::from_fn(n, n, |r, c| i64::from(c == (r + 1) % n))
}

/// Each ordered pair (self-loops included) gets an edge with probability `density`, with a
/// weight drawn from `weights`. The same seed always gives the same graph.
pub fn random_graph(n: usize, density: f64, weights: std::ops::Range<i64>, seed: u64) -> Matrix<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);
    Matrix::from_fn(n, n, |_, _| {
        if !weights.is_empty() && rng.random_bool(density) {
            rng.random_range(weights.clone())
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use warshall::{distance, matrices_equal, reachability, sentinel};

    use super::*;

    #[test]
    fn reference_example_solutions_hold() {
        let example = reference_example();
        let closure = reachability(&example.adjacency).unwrap();
        assert!(matrices_equal(&closure.to_indicator(), &example.closure));
        assert!(matrices_equal(&distance(&example.adjacency).unwrap(), &example.distances));
    }

    #[test]
    fn reference_example_is_ten_by_ten() {
        let example = reference_example();
        for m in [&example.adjacency, &example.closure, &example.distances] {
            assert_eq!((m.rows(), m.cols()), (10, 10));
        }
        assert_eq!(example.adjacency.as_slice().iter().sum::<i64>(), 10);
        assert_eq!(example.distances[(5, 0)], 2);
        assert_eq!(example.distances[(9, 6)], 2);
    }

    #[test]
    fn chain_has_n_minus_one_edges() {
        let c = chain(4);
        assert_eq!(c.as_slice().iter().sum::<i64>(), 3);
        assert_eq!(c[(0, 1)], 1);
        assert_eq!(c[(2, 3)], 1);
        assert_eq!(c[(3, 0)], 0);
        assert_eq!(chain(0).rows(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    fn every_vertex_of_a_cycle_reaches_everything(#[case] n: usize) {
        let r = reachability(&cycle(n)).unwrap();
        assert!(r.as_slice().iter().all(|&b| b));
        let d = distance(&cycle(n)).unwrap();
        assert!(d.as_slice().iter().all(|&x| x < sentinel(n)));
    }

    #[test]
    fn random_graph_is_seeded() {
        let a = random_graph(20, 0.2, 1..5, 7);
        let b = random_graph(20, 0.2, 1..5, 7);
        assert_eq!(a, b);
        assert!(a.as_slice().iter().all(|&w| (0..5).contains(&w)));
        assert!(random_graph(5, 1.0, 3..4, 1).as_slice().iter().all(|&w| w == 3));
        assert!(random_graph(5, 0.0, 1..9, 1).as_slice().iter().all(|&w| w == 0));
    }
}
