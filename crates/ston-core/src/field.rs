//! FloatField - floating-point image field
//!
//! `FloatField` is a 2-D array of `f32` values, one per pixel. It carries
//! the grayscale intensity field between pipeline stages and the Sobel
//! edge magnitudes back to the caller.
//!
//! # Memory layout
//!
//! Data is stored in row-major order with no padding. The value at
//! `(row, col)` is at index `row * width + col`.

use crate::error::{CoreResult, Error};

/// Floating-point image field
///
/// # Examples
///
/// ```
/// use ston_core::FloatField;
///
/// let mut field = FloatField::new(100, 100).unwrap();
/// field.set(20, 10, 0.5).unwrap();
/// assert_eq!(field.get(20, 10), Some(0.5));
/// ```
#[derive(Debug, Clone)]
pub struct FloatField {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<f32>,
}

impl FloatField {
    /// Create a new field with all values set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(FloatField {
            width,
            height,
            data: vec![0.0f32; size],
        })
    }

    /// Create a field from raw row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<f32>) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(FloatField {
            width,
            height,
            data,
        })
    }

    /// Get the field width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the field height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the field has zero values (never true for a
    /// successfully constructed field).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[(row as usize) * (self.width as usize) + (col as usize)])
    }

    /// Set the value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the position is outside
    /// the field.
    pub fn set(&mut self, row: u32, col: u32, value: f32) -> CoreResult<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: (row as usize) * (self.width as usize) + (col as usize),
                len: self.data.len(),
            });
        }
        self.data[(row as usize) * (self.width as usize) + (col as usize)] = value;
        Ok(())
    }

    /// Get raw access to the values.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Arithmetic mean of all values.
    ///
    /// Accumulates in `f64` in row-major order. The summation order is
    /// fixed so the same field always yields bit-identical means, which
    /// in turn keeps thresholded masks deterministic.
    pub fn mean(&self) -> f64 {
        let mut sum = 0.0f64;
        for &v in &self.data {
            sum += v as f64;
        }
        sum / self.data.len() as f64
    }

    /// Minimum and maximum values over the field.
    pub fn min_max(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let field = FloatField::new(3, 2).unwrap();
        assert_eq!(field.len(), 6);
        assert!(field.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_raw_length_checked() {
        let err = FloatField::from_raw(3, 3, vec![0.0; 8]).unwrap_err();
        assert!(matches!(err, Error::DataSizeMismatch { .. }));
    }

    #[test]
    fn test_mean_fixed_order() {
        let field = FloatField::from_raw(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(field.mean(), 2.5);
    }

    #[test]
    fn test_min_max() {
        let field = FloatField::from_raw(2, 2, vec![-1.0, 5.0, 0.0, 2.0]).unwrap();
        assert_eq!(field.min_max(), (-1.0, 5.0));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut field = FloatField::new(2, 2).unwrap();
        assert!(field.set(2, 0, 1.0).is_err());
    }
}
