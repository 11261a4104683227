//! LabelMap - integer-labeled component image
//!
//! A `LabelMap` has the same dimensions as the mask it was derived from.
//! Value 0 denotes background; each positive value denotes one maximal
//! connected foreground component. Labels are dense, starting at 1 in
//! raster-scan discovery order. The partition is the semantic content;
//! which component received which numeric label is not.

use crate::error::{CoreResult, Error};
use crate::mask::BitMask;

/// Integer-labeled image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Number of distinct positive labels
    label_count: u32,
    /// Pixel data (row-major)
    data: Vec<u32>,
}

impl LabelMap {
    /// Create a label map from raw row-major data.
    ///
    /// `label_count` is the number of distinct positive labels; labels
    /// are expected to be dense in `1..=label_count`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, label_count: u32, data: Vec<u32>) -> CoreResult<Self> {
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

        Ok(LabelMap {
            width,
            height,
            label_count,
            data,
        })
    }

    /// Get the map width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the map height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of distinct positive labels.
    #[inline]
    pub fn label_count(&self) -> u32 {
        self.label_count
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Get the label at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[(row as usize) * (self.width as usize) + (col as usize)])
    }

    /// Get raw access to the labels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Collapse all positive labels to foreground.
    ///
    /// This is the `{0, 1}` relabeling used for aggregate black/white
    /// statistics and overlay rendering.
    pub fn binarized(&self) -> BitMask {
        let data = self.data.iter().map(|&v| v > 0).collect();
        BitMask::from_raw(self.width, self.height, data)
            .unwrap_or_else(|_| unreachable!("mask sized from a valid label map"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarized_collapses_labels() {
        let map = LabelMap::from_raw(2, 2, 2, vec![0, 1, 2, 0]).unwrap();
        let mask = map.binarized();
        assert!(!mask.get(0, 0));
        assert!(mask.get(0, 1));
        assert!(mask.get(1, 0));
        assert_eq!(mask.foreground_count(), 2);
    }

    #[test]
    fn test_from_raw_length_checked() {
        let err = LabelMap::from_raw(2, 2, 0, vec![0; 3]).unwrap_err();
        assert!(matches!(err, Error::DataSizeMismatch { .. }));
    }
}
