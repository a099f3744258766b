//! Binary thresholding of a float image into a mask.
use crate::image::{BinaryMask, ImageF32, ImageView};

/// Keep pixels with value strictly above `threshold`.
///
/// The strict comparison means a threshold of 0.0 still drops exactly-zero
/// background, which keeps flat regions out of the mask.
pub fn threshold_mask(image: &ImageF32, threshold: f32) -> BinaryMask {
    let mut mask = BinaryMask::new(image.w, image.h);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &v) in row.iter().enumerate() {
            if v > threshold {
                mask.set(x, y, true);
            }
        }
    }
    mask
}
