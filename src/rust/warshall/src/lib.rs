//! Warshall transitive closure and Floyd-Warshall all-pairs distances over dense adjacency
//! matrices.
//!
//! Both engines validate that the input is square, never modify it, and return a fresh
//! matrix. Edge weight `0` means "no edge".

pub mod compare;
pub mod distance;
pub mod error;
pub mod ffi;
pub mod matrix;
pub mod reachability;
pub mod validate;

pub use compare::matrices_equal;
pub use distance::{distance, distance_par, distance_with, sentinel};
pub use error::{MatrixError, ShapeError};
pub use matrix::Matrix;
pub use reachability::{reachability, reachability_par, reachability_with};
pub use validate::ensure_square;
