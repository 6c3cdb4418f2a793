//! Scale jittering augmentation for semantic segmentation samples.
//!
//! An image and its pixel-wise annotation are rescaled together, with
//! the aspect ratio preserved, and fitted to a fixed output size. Pixels
//! of the output that are not covered by the rescaled content are marked
//! by a mask-out class id in the annotation.

mod common;
pub mod config;
pub mod error;
pub mod label;
pub mod processor;

pub use config::*;
pub use error::*;
pub use nd_goodies::{PixelSize, HW};
pub use processor::*;
