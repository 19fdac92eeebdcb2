//! C interface over raw row-major buffers of `n * n` elements.
//!
//! The input buffer holds the adjacency weights, the output buffer receives the result. Both
//! must be valid for `n * n` elements and must not overlap.

use tracing::error;

use crate::{distance::distance, matrix::Matrix, reachability::reachability};

/// Reachability as 1/0 bytes into `r_raw`.
///
/// # Safety
/// `d_raw` must be readable and `r_raw` writable for `n * n` elements.
#[no_mangle]
pub unsafe extern "C" fn warshall_reachability(r_raw: *mut u8, d_raw: *const i64, n: i32) {
    let Ok(n) = usize::try_from(n) else {
        return;
    };
    // Catch any unwinding panics so that they won't propagate over the ABI
    let result = std::panic::catch_unwind(|| {
        let d = std::slice::from_raw_parts(d_raw, n * n);
        let r = std::slice::from_raw_parts_mut(r_raw, n * n);
        let adjacency = Matrix::from_square(n, d.to_vec());
        if let Ok(closure) = reachability(&adjacency) {
            for (out, &reachable) in r.iter_mut().zip(closure.as_slice()) {
                *out = u8::from(reachable);
            }
        }
    });
    if result.is_err() {
        error!(n, "reachability panicked");
    }
}

/// Distances into `r_raw`, `n + 1` marking unreachable pairs.
///
/// # Safety
/// `d_raw` must be readable and `r_raw` writable for `n * n` elements.
#[no_mangle]
pub unsafe extern "C" fn warshall_distance(r_raw: *mut i64, d_raw: *const i64, n: i32) {
    let Ok(n) = usize::try_from(n) else {
        return;
    };
    let result = std::panic::catch_unwind(|| {
        let d = std::slice::from_raw_parts(d_raw, n * n);
        let r = std::slice::from_raw_parts_mut(r_raw, n * n);
        let adjacency = Matrix::from_square(n, d.to_vec());
        if let Ok(distances) = distance(&adjacency) {
            r.copy_from_slice(distances.as_slice());
        }
    });
    if result.is_err() {
        error!(n, "distance panicked");
    }
}
