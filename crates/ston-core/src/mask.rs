//! BitMask - binary foreground/background mask
//!
//! Same dimensions as the intensity field it was derived from; `true`
//! marks foreground. Stored as one `bool` per pixel in row-major order
//! rather than packed words, since nothing downstream needs bit packing.

use crate::error::{CoreResult, Error};

/// Binary image mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMask {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major)
    data: Vec<bool>,
}

impl BitMask {
    /// Create a new mask with all pixels set to background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(BitMask {
            width,
            height,
            data: vec![false; size],
        })
    }

    /// Create a mask from raw row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<bool>) -> CoreResult<Self> {
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

        Ok(BitMask {
            width,
            height,
            data,
        })
    }

    /// Get the mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether the pixel at `(row, col)` is foreground.
    ///
    /// Out-of-bounds positions read as background.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        self.data[(row as usize) * (self.width as usize) + (col as usize)]
    }

    /// Set the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the position is outside
    /// the mask.
    pub fn set(&mut self, row: u32, col: u32, value: bool) -> CoreResult<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: (row as usize) * (self.width as usize) + (col as usize),
                len: self.data.len(),
            });
        }
        self.data[(row as usize) * (self.width as usize) + (col as usize)] = value;
        Ok(())
    }

    /// Get raw access to the mask data.
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Count of foreground pixels.
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_background() {
        let mask = BitMask::new(4, 3).unwrap();
        assert_eq!(mask.foreground_count(), 0);
    }

    #[test]
    fn test_set_and_count() {
        let mut mask = BitMask::new(4, 3).unwrap();
        mask.set(0, 0, true).unwrap();
        mask.set(2, 3, true).unwrap();
        assert_eq!(mask.foreground_count(), 2);
        assert!(mask.get(2, 3));
        assert!(!mask.get(1, 1));
    }

    #[test]
    fn test_out_of_bounds_reads_background() {
        let mask = BitMask::new(2, 2).unwrap();
        assert!(!mask.get(5, 5));
    }
}
