pub use anyhow::{Context as _, Result};
pub use log::{debug, trace};
pub use nd_goodies::{ImageArrayExt as _, PixelSize, HW};
pub use ndarray::{Array3, ArrayBase, Data, Ix3, Zip};
pub use noisy_float::prelude::*;
pub use num_traits::{NumCast, PrimInt, Zero};
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{fmt::Debug, path::Path};
pub use thiserror::Error;
