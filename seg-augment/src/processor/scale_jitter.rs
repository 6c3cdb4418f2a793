//! The scale jittering algorithm with fixed-size output.

use crate::{
    common::*,
    error::ScaleJitterError,
    label::{shift_classes, unshift_classes},
};

/// The longest side an input can be resized to before cropping.
pub const MAX_SCALED_SIDE: usize = 1 << 16;

/// Scale jittering processor initializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaleJitterInit<L> {
    /// The spatial size of every output sample.
    pub output_size: HW<usize>,
    /// The range of the random scale applied on top of the fitting scale.
    pub scale: (R64, R64),
    /// The class id written to annotation pixels not covered by the image.
    pub mask_out_number: L,
}

impl<L> ScaleJitterInit<L> {
    pub fn build(self) -> Result<ScaleJitter<L>, ScaleJitterError> {
        let Self {
            output_size,
            scale: (min_scale, max_scale),
            mask_out_number,
        } = self;

        let output_size = PixelSize::try_from(output_size)
            .map_err(|err| ScaleJitterError::InvalidConfig(format!("output_size: {}", err)))?;

        let min_scale = min_scale.raw();
        let max_scale = max_scale.raw();
        if min_scale <= 0.0 {
            return Err(ScaleJitterError::InvalidConfig(format!(
                "scale min must be positive, but get {}",
                min_scale
            )));
        }
        if max_scale <= 0.0 {
            return Err(ScaleJitterError::InvalidConfig(format!(
                "scale max must be positive, but get {}",
                max_scale
            )));
        }
        if min_scale > max_scale {
            return Err(ScaleJitterError::InvalidConfig(format!(
                "scale min {} must not exceed scale max {}",
                min_scale, max_scale
            )));
        }

        Ok(ScaleJitter {
            output_size,
            min_scale,
            max_scale,
            mask_out_number,
        })
    }
}

/// Scale jittering processor.
///
/// It rescales an image and its annotation to fit the output size,
/// multiplies the scale by a random ratio, and crops or pads the result
/// around the center. Both arrays are resampled by nearest neighbor so
/// that class ids are never blended.
#[derive(Debug, Clone)]
pub struct ScaleJitter<L> {
    output_size: PixelSize,
    min_scale: f64,
    max_scale: f64,
    mask_out_number: L,
}

impl<L> ScaleJitter<L> {
    pub fn output_size(&self) -> PixelSize {
        self.output_size
    }

    pub fn scale_range(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Draw the random scale ratio from `[min, max)`.
    pub fn sample_ratio<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        if self.min_scale < self.max_scale {
            rng.gen_range(self.min_scale..self.max_scale)
        } else {
            self.min_scale
        }
    }

    /// Compute the size an input is resized to before cropping or padding.
    ///
    /// The fitting scale is the smaller of the per-axis ratios between the
    /// output and input sizes. The resized sides are rounded half to even
    /// and must not exceed [MAX_SCALED_SIDE].
    pub fn scaled_size(
        &self,
        input_size: &PixelSize,
        ratio: f64,
    ) -> Result<PixelSize, ScaleJitterError> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(ScaleJitterError::InvalidConfig(format!(
                "scale ratio must be positive and finite, but get {}",
                ratio
            )));
        }

        let [in_h, in_w] = input_size.hw();
        let [out_h, out_w] = self.output_size.hw();
        let fit_scale = (out_h as f64 / in_h as f64).min(out_w as f64 / in_w as f64);
        let scale = fit_scale * ratio;

        let rounded = HW {
            h: in_h as f64 * scale,
            w: in_w as f64 * scale,
        }
        .map(f64::round_ties_even);

        let too_large = || ScaleJitterError::ScaleTooLarge {
            input: **input_size,
            scale,
            limit: MAX_SCALED_SIDE,
        };
        if rounded.h > MAX_SCALED_SIDE as f64 || rounded.w > MAX_SCALED_SIDE as f64 {
            return Err(too_large());
        }
        let scaled: HW<usize> = rounded.cast().ok_or_else(too_large)?;

        PixelSize::try_from(scaled).map_err(|_| ScaleJitterError::DegenerateScale {
            input: **input_size,
            scale,
            scaled,
        })
    }
}

impl<L> ScaleJitter<L>
where
    L: PrimInt + Debug,
{
    /// Apply scale jittering with a ratio drawn from the entropy-seeded generator.
    pub fn forward<SI, SA, A>(
        &self,
        image: &ArrayBase<SI, Ix3>,
        annotation: &ArrayBase<SA, Ix3>,
    ) -> Result<(Array3<A>, Array3<L>), ScaleJitterError>
    where
        SI: Data<Elem = A>,
        SA: Data<Elem = L>,
        A: Clone + Zero,
    {
        let mut rng = StdRng::from_entropy();
        self.forward_with_rng(&mut rng, image, annotation)
    }

    /// Apply scale jittering with a ratio drawn from `rng`.
    pub fn forward_with_rng<R, SI, SA, A>(
        &self,
        rng: &mut R,
        image: &ArrayBase<SI, Ix3>,
        annotation: &ArrayBase<SA, Ix3>,
    ) -> Result<(Array3<A>, Array3<L>), ScaleJitterError>
    where
        R: Rng + ?Sized,
        SI: Data<Elem = A>,
        SA: Data<Elem = L>,
        A: Clone + Zero,
    {
        let ratio = self.sample_ratio(rng);
        trace!("sampled scale ratio {}", ratio);
        self.forward_with_ratio(image, annotation, ratio)
    }

    /// Apply scale jittering with the given random ratio.
    ///
    /// The image has shape `[h, w, c]` and the annotation has shape
    /// `[h, w, 1]`. The outputs have the configured output size, and every
    /// output annotation value is either an input class id or the mask-out
    /// number.
    pub fn forward_with_ratio<SI, SA, A>(
        &self,
        image: &ArrayBase<SI, Ix3>,
        annotation: &ArrayBase<SA, Ix3>,
        ratio: f64,
    ) -> Result<(Array3<A>, Array3<L>), ScaleJitterError>
    where
        SI: Data<Elem = A>,
        SA: Data<Elem = L>,
        A: Clone + Zero,
    {
        let (image_h, image_w, image_c) = image.dim();
        let (annotation_h, annotation_w, annotation_c) = annotation.dim();
        if image_h != annotation_h || image_w != annotation_w || annotation_c != 1 {
            return Err(ScaleJitterError::ShapeMismatch {
                image: [image_h, image_w, image_c],
                annotation: [annotation_h, annotation_w, annotation_c],
            });
        }

        let empty_input = || ScaleJitterError::EmptyInput {
            height: image_h,
            width: image_w,
        };
        let input_size = image.pixel_size().map_err(|_| empty_input())?;
        let scaled_size = self.scaled_size(&input_size, ratio)?;
        debug!(
            "scale jittering {}x{} -> {}x{} -> {}x{}",
            input_size.h,
            input_size.w,
            scaled_size.h,
            scaled_size.w,
            self.output_size.h,
            self.output_size.w
        );

        // shift classes so that zero marks padding
        let shifted = shift_classes(annotation)?;

        let resized_image = image
            .resize_nearest(&scaled_size)
            .map_err(|_| empty_input())?;
        let resized_annotation = shifted
            .resize_nearest(&scaled_size)
            .map_err(|_| empty_input())?;

        let output_image = resized_image.center_crop_or_pad(&self.output_size, A::zero());
        let output_annotation = {
            let padded = resized_annotation.center_crop_or_pad(&self.output_size, L::zero());
            unshift_classes(&padded, self.mask_out_number)
        };

        Ok((output_image, output_annotation))
    }
}

/// Scale jitter an image and annotation pair to `output_size` in one call.
///
/// The random scale ratio is drawn from `[min_scale, max_scale)` using `rng`.
pub fn scale_jittering_with_fixed_size_output<R, SI, SA, A, L>(
    rng: &mut R,
    image: &ArrayBase<SI, Ix3>,
    annotation: &ArrayBase<SA, Ix3>,
    output_size: HW<usize>,
    min_scale: f64,
    max_scale: f64,
    mask_out_number: L,
) -> Result<(Array3<A>, Array3<L>), ScaleJitterError>
where
    R: Rng + ?Sized,
    SI: Data<Elem = A>,
    SA: Data<Elem = L>,
    A: Clone + Zero,
    L: PrimInt + Debug,
{
    let to_r64 = |value: f64| {
        R64::try_new(value).ok_or_else(|| {
            ScaleJitterError::InvalidConfig(format!("scale bound {} must be finite", value))
        })
    };

    let processor = ScaleJitterInit {
        output_size,
        scale: (to_r64(min_scale)?, to_r64(max_scale)?),
        mask_out_number,
    }
    .build()?;
    processor.forward_with_rng(rng, image, annotation)
}
