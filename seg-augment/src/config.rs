//! Scale jittering configuration format.

use crate::{common::*, error::ScaleJitterError, processor::ScaleJitterInit};

/// The scale jittering options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleJitterConfig {
    /// The spatial size of every output sample.
    pub output_size: HW<usize>,
    /// The `[min, max]` range of the random relative scale.
    pub scale: (R64, R64),
    /// The class id of pixels to be ignored by the loss.
    #[serde(default = "default_mask_out_number")]
    pub mask_out_number: i64,
}

impl ScaleJitterConfig {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display()))?;
        let config = Self::from_json5_str(&text)
            .with_context(|| format!("unable to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json5_str(text: &str) -> Result<Self> {
        let config = json5::from_str(text)?;
        Ok(config)
    }

    /// Convert to a processor initializer whose annotations have element type `L`.
    pub fn to_init<L>(&self) -> Result<ScaleJitterInit<L>, ScaleJitterError>
    where
        L: NumCast,
    {
        let Self {
            output_size,
            scale,
            mask_out_number,
        } = *self;

        let mask_out_number = <L as NumCast>::from(mask_out_number).ok_or_else(|| {
            ScaleJitterError::InvalidConfig(format!(
                "mask_out_number {} does not fit in the annotation type",
                mask_out_number
            ))
        })?;

        Ok(ScaleJitterInit {
            output_size,
            scale,
            mask_out_number,
        })
    }
}

fn default_mask_out_number() -> i64 {
    255
}
