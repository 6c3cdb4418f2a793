use crate::common::*;

/// Errors raised by the scale jittering processor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleJitterError {
    /// The image and annotation do not share the spatial size, or the
    /// annotation has more than one channel.
    #[error(
        "image shape {image:?} and annotation shape {annotation:?} are incompatible, \
         expect [h, w, c] and [h, w, 1]"
    )]
    ShapeMismatch {
        image: [usize; 3],
        annotation: [usize; 3],
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("input image has zero-sized spatial shape {height}x{width}")]
    EmptyInput { height: usize, width: usize },

    /// The scale factor rounds at least one side of the resized image to zero pixels.
    #[error(
        "scaling {}x{} by {} results in an empty {}x{} image",
        .input.h,
        .input.w,
        .scale,
        .scaled.h,
        .scaled.w
    )]
    DegenerateScale {
        input: HW<usize>,
        scale: f64,
        scaled: HW<usize>,
    },

    /// The scale factor resizes at least one side beyond `limit` pixels.
    #[error(
        "scaling {}x{} by {} exceeds the {} pixel limit per side",
        .input.h,
        .input.w,
        .scale,
        .limit
    )]
    ScaleTooLarge {
        input: HW<usize>,
        scale: f64,
        limit: usize,
    },

    /// A class id is negative or cannot be incremented in the annotation element type.
    #[error("class id {class} is out of the supported range")]
    LabelOutOfRange { class: String },
}
