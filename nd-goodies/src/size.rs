use crate::common::*;

/// A pair of height and width values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HW<T> {
    pub h: T,
    pub w: T,
}

impl<T> HW<T> {
    pub fn hw(&self) -> [T; 2]
    where
        T: Copy,
    {
        [self.h, self.w]
    }

    pub fn cast<S>(&self) -> Option<HW<S>>
    where
        T: Copy + ToPrimitive,
        S: NumCast,
    {
        Some(HW {
            h: <S as NumCast>::from(self.h)?,
            w: <S as NumCast>::from(self.w)?,
        })
    }

    pub fn map<S, F>(self, mut f: F) -> HW<S>
    where
        F: FnMut(T) -> S,
    {
        HW {
            h: f(self.h),
            w: f(self.w),
        }
    }
}

/// Spatial size of an image in pixels. Both sides are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HW<usize>", into = "HW<usize>")]
pub struct PixelSize {
    inner: HW<usize>,
}

impl PixelSize {
    pub fn from_hw(h: usize, w: usize) -> Result<Self> {
        HW { h, w }.try_into()
    }

    /// Get the spatial size of a `[height, width, channels]` array.
    pub fn of_array<S>(array: &ArrayBase<S, Ix3>) -> Result<Self>
    where
        S: Data,
    {
        let (h, w, _c) = array.dim();
        Self::from_hw(h, w)
    }
}

impl TryFrom<HW<usize>> for PixelSize {
    type Error = Error;

    fn try_from(from: HW<usize>) -> Result<Self, Self::Error> {
        let HW { h, w } = from;
        ensure!(
            h > 0 && w > 0,
            "the height and width must be positive, but get {}x{}",
            h,
            w
        );
        Ok(Self { inner: from })
    }
}

impl From<PixelSize> for HW<usize> {
    fn from(from: PixelSize) -> Self {
        from.inner
    }
}

impl Deref for PixelSize {
    type Target = HW<usize>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
