//! Fixtures, display and timing helpers around the `warshall` engines.

pub mod fixtures;
pub mod format;
pub mod timer;
