//! Generic helpers on `ndarray` image arrays.

mod common;
pub mod array;
pub mod size;

pub use array::*;
pub use size::*;
