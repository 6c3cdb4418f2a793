pub use anyhow::{ensure, Error, Result};
pub use ndarray::{s, Array3, ArrayBase, Axis, Data, Ix3};
pub use num_traits::{NumCast, ToPrimitive};
pub use serde::{Deserialize, Serialize};
pub use std::{
    cmp,
    ops::{Deref, Range},
};
