//! Data preprocessing building blocks.

pub mod scale_jitter;

pub use scale_jitter::*;
