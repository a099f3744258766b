//! Binary pixel masks and their scan-order coordinate enumeration.
//!
//! `BinaryMask` stores one byte per pixel restricted to {0, 1}. It is the
//! currency between the thresholding, thinning, and measurement stages: the
//! thresholded gradient map and the skeleton are both masks. Construction
//! from untrusted bytes goes through [`BinaryMask::from_raw`], which rejects
//! non-binary values instead of silently miscomputing downstream.
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate (column `x`, row `y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Row-major binary mask with one byte per pixel, values 0 or 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryMask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` bytes of 0/1
    pub data: Vec<u8>,
}

impl BinaryMask {
    /// All-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h],
        }
    }

    /// Build a mask from a per-pixel predicate.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut mask = Self::new(w, h);
        for y in 0..h {
            for x in 0..w {
                if f(x, y) {
                    mask.data[y * w + x] = 1;
                }
            }
        }
        mask
    }

    /// Validate raw bytes into a mask. Rejects length mismatches and any
    /// value other than 0 or 1.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self, String> {
        if data.len() != w * h {
            return Err(format!(
                "mask data length {} does not match {}x{} = {} pixels",
                data.len(),
                w,
                h,
                w * h
            ));
        }
        if let Some(pos) = data.iter().position(|&v| v > 1) {
            return Err(format!(
                "mask value {} at index {} is not binary (expected 0 or 1)",
                data[pos], pos
            ));
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        let i = self.idx(x, y);
        self.data[i] = on as u8;
    }

    /// Number of set (foreground) pixels.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Fraction of set pixels in [0, 1]; 0.0 for an empty mask.
    pub fn density(&self) -> f64 {
        if self.data.is_empty() {
            0.0
        } else {
            self.count_set() as f64 / self.data.len() as f64
        }
    }

    /// Coordinates of all set pixels in row-major order: ascending row,
    /// then ascending column within a row.
    ///
    /// This is an iteration convention, not a connectivity-derived path;
    /// consecutive points are pixel-adjacent only when the underlying
    /// structure happens to align with the scan direction.
    pub fn points(&self) -> Vec<GridPoint> {
        let mut points = Vec::with_capacity(self.count_set());
        for y in 0..self.h {
            let row = &self.data[y * self.w..y * self.w + self.w];
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    points.push(GridPoint::new(x as u32, y as u32));
                }
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_length_mismatch() {
        let err = BinaryMask::from_raw(3, 2, vec![0u8; 5]).unwrap_err();
        assert!(err.contains("length"), "unexpected message: {err}");
    }

    #[test]
    fn from_raw_rejects_non_binary_values() {
        let err = BinaryMask::from_raw(2, 2, vec![0, 1, 2, 0]).unwrap_err();
        assert!(err.contains("not binary"), "unexpected message: {err}");
    }

    #[test]
    fn points_enumerate_in_row_major_order() {
        let mut mask = BinaryMask::new(4, 3);
        mask.set(2, 0, true);
        mask.set(0, 1, true);
        mask.set(3, 1, true);
        mask.set(1, 2, true);
        assert_eq!(
            mask.points(),
            vec![
                GridPoint::new(2, 0),
                GridPoint::new(0, 1),
                GridPoint::new(3, 1),
                GridPoint::new(1, 2),
            ]
        );
    }

    #[test]
    fn density_of_empty_mask_is_zero() {
        assert_eq!(BinaryMask::new(0, 0).density(), 0.0);
        let mask = BinaryMask::from_fn(2, 2, |x, y| x == 0 && y == 0);
        assert_eq!(mask.count_set(), 1);
        assert!((mask.density() - 0.25).abs() < 1e-12);
    }
}
