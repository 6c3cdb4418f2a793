//! Class id shifting that tells padded pixels apart from class 0.
//!
//! Shifted annotations reserve the value 0 for pixels that carry no
//! original content, and store class `c` as `c + 1`.

use crate::{common::*, error::ScaleJitterError};

/// Shift every class id up by one.
///
/// Class ids must be non-negative and less than the maximum value of the
/// element type.
pub fn shift_classes<S, L>(annotation: &ArrayBase<S, Ix3>) -> Result<Array3<L>, ScaleJitterError>
where
    S: Data<Elem = L>,
    L: PrimInt + Debug,
{
    let zero = L::zero();
    let max = L::max_value();

    if let Some(class) = annotation
        .iter()
        .find(|&&class| class < zero || class == max)
    {
        return Err(ScaleJitterError::LabelOutOfRange {
            class: format!("{:?}", class),
        });
    }

    Ok(annotation.mapv(|class| class + L::one()))
}

/// Pixels of a shifted annotation that carry no original content.
pub fn padding_mask<S, L>(shifted: &ArrayBase<S, Ix3>) -> Array3<bool>
where
    S: Data<Elem = L>,
    L: PrimInt,
{
    shifted.mapv(|class| class == L::zero())
}

/// Undo [shift_classes], writing `mask_out_number` to padded pixels.
pub fn unshift_classes<S, L>(shifted: &ArrayBase<S, Ix3>, mask_out_number: L) -> Array3<L>
where
    S: Data<Elem = L>,
    L: PrimInt,
{
    let padding = padding_mask(shifted);
    Zip::from(shifted)
        .and(&padding)
        .map_collect(|&class, &is_padding| {
            if is_padding {
                mask_out_number
            } else {
                class - L::one()
            }
        })
}
