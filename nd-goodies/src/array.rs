use crate::{common::*, size::PixelSize};

/// Extension methods on `[height, width, channels]` arrays.
pub trait ImageArrayExt<A> {
    fn pixel_size(&self) -> Result<PixelSize>;

    /// Resample to `size` by nearest neighbor.
    ///
    /// Output pixel `(y, x)` takes input pixel
    /// `(floor(y * in_h / out_h), floor(x * in_w / out_w))`, which makes the
    /// resize an identity when the sizes agree.
    fn resize_nearest(&self, size: &PixelSize) -> Result<Array3<A>>;

    /// Crop or pad both spatial axes to `size`, keeping the content centered.
    ///
    /// Padded pixels are set to `fill`.
    fn center_crop_or_pad(&self, size: &PixelSize, fill: A) -> Array3<A>;
}

impl<A, S> ImageArrayExt<A> for ArrayBase<S, Ix3>
where
    S: Data<Elem = A>,
    A: Clone,
{
    fn pixel_size(&self) -> Result<PixelSize> {
        PixelSize::of_array(self)
    }

    fn resize_nearest(&self, size: &PixelSize) -> Result<Array3<A>> {
        let [in_h, in_w] = self.pixel_size()?.hw();
        let [out_h, out_w] = size.hw();

        let rows = nearest_indices(in_h, out_h);
        let cols = nearest_indices(in_w, out_w);
        let resized = self.select(Axis(0), &rows).select(Axis(1), &cols);

        Ok(resized)
    }

    fn center_crop_or_pad(&self, size: &PixelSize, fill: A) -> Array3<A> {
        let (in_h, in_w, channels) = self.dim();
        let [out_h, out_w] = size.hw();
        let rows = CropPadWindow::new(in_h, out_h);
        let cols = CropPadWindow::new(in_w, out_w);

        let mut output = Array3::from_elem((out_h, out_w, channels), fill);
        output
            .slice_mut(s![rows.dst_range(), cols.dst_range(), ..])
            .assign(&self.slice(s![rows.src_range(), cols.src_range(), ..]));
        output
    }
}

/// Source indices of a nearest neighbor resampling from `src_len` to `dst_len` samples.
pub fn nearest_indices(src_len: usize, dst_len: usize) -> Vec<usize> {
    if src_len == 0 {
        return vec![];
    }

    // widen to avoid overflow in the product
    let (src_wide, dst_wide) = (src_len as u128, dst_len as u128);
    (0..dst_len)
        .map(|dst| {
            let index = (dst as u128 * src_wide / dst_wide) as usize;
            cmp::min(index, src_len - 1)
        })
        .collect()
}

/// The window along one axis that survives a centered crop or pad.
///
/// When the difference in length is odd, the extra pixel is cropped or
/// padded at the end of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropPadWindow {
    pub crop_offset: usize,
    pub pad_offset: usize,
    pub len: usize,
}

impl CropPadWindow {
    pub fn new(src_len: usize, dst_len: usize) -> Self {
        Self {
            crop_offset: src_len.saturating_sub(dst_len) / 2,
            pad_offset: dst_len.saturating_sub(src_len) / 2,
            len: cmp::min(src_len, dst_len),
        }
    }

    pub fn src_range(&self) -> Range<usize> {
        self.crop_offset..(self.crop_offset + self.len)
    }

    pub fn dst_range(&self) -> Range<usize> {
        self.pad_offset..(self.pad_offset + self.len)
    }
}
