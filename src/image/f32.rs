//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! The float buffer is the working currency of the pipeline: grayscale input
//! converts into it, gradient magnitudes come out of it, and the renderer
//! normalizes it for display.
use crate::image::traits::{ImageView, ImageViewMut};
use crate::image::ImageU8;

#[derive(Clone, Debug, Default)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Convert an 8-bit grayscale view into a float image normalized to [0, 1].
    pub fn from_u8_normalized(gray: ImageU8<'_>) -> Self {
        let mut out = Self::new(gray.w, gray.h);
        if let Some(flat) = gray.as_slice() {
            for (dst, &src) in out.data.iter_mut().zip(flat) {
                *dst = src as f32 / 255.0;
            }
        } else {
            for y in 0..gray.h {
                let src = gray.row(y);
                let dst = out.row_mut(y);
                for x in 0..gray.w {
                    dst[x] = src[x] as f32 / 255.0;
                }
            }
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Largest pixel value, 0.0 for an empty image. NaN values are ignored.
    pub fn max_value(&self) -> f32 {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f32, f32::max)
    }

    /// Arithmetic mean of all pixels, 0.0 for an empty image.
    pub fn mean_value(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        (sum / self.data.len() as f64) as f32
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        self.is_contiguous().then_some(&self.data[..self.w * self.h])
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_normalizes_full_scale() {
        let data = [0u8, 51, 255, 102];
        let gray = ImageU8 {
            w: 2,
            h: 2,
            stride: 2,
            data: &data,
        };
        let img = ImageF32::from_u8_normalized(gray);
        assert!((img.get(0, 0) - 0.0).abs() < 1e-6);
        assert!((img.get(1, 0) - 0.2).abs() < 1e-6);
        assert!((img.get(0, 1) - 1.0).abs() < 1e-6);
        assert!((img.get(1, 1) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn from_u8_reads_strided_views_row_by_row() {
        // Rows of a wider parent buffer: three pixels, then one pad byte.
        let data = [0u8, 255, 51, 7, 102, 153, 204, 7];
        let gray = ImageU8 {
            w: 3,
            h: 2,
            stride: 4,
            data: &data,
        };
        assert!(gray.as_slice().is_none());
        let img = ImageF32::from_u8_normalized(gray);
        assert_eq!((img.w, img.h, img.stride), (3, 2, 3));
        assert!((img.get(1, 0) - 1.0).abs() < 1e-6);
        assert!((img.get(2, 0) - 0.2).abs() < 1e-6);
        assert!((img.get(0, 1) - 0.4).abs() < 1e-6);
        assert!((img.get(2, 1) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn max_and_mean_on_empty_image() {
        let img = ImageF32::new(0, 0);
        assert_eq!(img.max_value(), 0.0);
        assert_eq!(img.mean_value(), 0.0);
    }
}
