//! Raster - the caller-owned image buffer snapshot
//!
//! `Raster` is the entry point of the segmentation pipeline: a 2-D array
//! of unsigned 8-bit samples with 1, 3 or 4 interleaved channels. The
//! pipeline treats it as an immutable snapshot; every derived entity
//! (intensity field, mask, label map) is freshly allocated, so the caller
//! is free to crop, filter or discard its own buffer between calls.
//!
//! # Sample layout
//!
//! Samples are stored row-major and channel-interleaved with no row
//! padding. The sample for channel `ch` of the pixel at `(row, col)` is
//! at index `(row * width + col) * channels + ch`.

use crate::error::{CoreResult, Error};
use crate::field::FloatField;

/// BT.709 luma weights used for RGB to intensity conversion.
///
/// Fixed constants; everything downstream of the intensity field (mean
/// threshold, labeling, Chan-Vese) depends on this conversion being
/// stable across invocations.
pub const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Channel layout of a raster buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ChannelLayout {
    /// Single-channel grayscale
    Gray = 1,
    /// Interleaved red, green, blue
    Rgb = 3,
    /// Interleaved red, green, blue, alpha
    Rgba = 4,
}

impl ChannelLayout {
    /// Create a `ChannelLayout` from a raw samples-per-pixel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `samples` is not 1, 3 or 4.
    pub fn from_samples(samples: u32) -> CoreResult<Self> {
        match samples {
            1 => Ok(ChannelLayout::Gray),
            3 => Ok(ChannelLayout::Rgb),
            4 => Ok(ChannelLayout::Rgba),
            _ => Err(Error::InvalidChannelCount(samples)),
        }
    }

    /// Samples per pixel for this layout.
    #[inline]
    pub fn samples(self) -> u32 {
        self as u32
    }
}

/// Raster - immutable multi-channel image buffer
///
/// # Examples
///
/// ```
/// use ston_core::{ChannelLayout, Raster};
///
/// let raster = Raster::new(640, 480, ChannelLayout::Gray).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout
    channels: ChannelLayout,
    /// Interleaved row-major sample data
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: ChannelLayout) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize) * (channels.samples() as usize);
        Ok(Raster {
            width,
            height,
            channels,
            data: vec![0u8; size],
        })
    }

    /// Create a raster by taking ownership of an existing sample buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `samples` - Samples per pixel (1, 3 or 4)
    /// * `data` - Interleaved row-major sample data
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions,
    /// [`Error::InvalidChannelCount`] for an unsupported channel count,
    /// and [`Error::DataSizeMismatch`] if `data.len()` is not
    /// `width * height * samples`.
    pub fn from_raw(width: u32, height: u32, samples: u32, data: Vec<u8>) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let channels = ChannelLayout::from_samples(samples)?;

        let expected = (width as usize) * (height as usize) * (samples as usize);
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Raster {
            width,
            height,
            channels,
            data,
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> ChannelLayout {
        self.channels
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the sample data.
    ///
    /// Exposed for fixture construction and for the io layer; the
    /// pipeline itself never mutates a raster.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get all samples of the pixel at `(row, col)`.
    ///
    /// Returns `None` if the position is out of bounds.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> Option<&[u8]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let n = self.channels.samples() as usize;
        let start = ((row as usize) * (self.width as usize) + (col as usize)) * n;
        Some(&self.data[start..start + n])
    }

    /// Convert to a single-channel intensity field.
    ///
    /// Grayscale rasters pass through unchanged (as `f32`); RGB and RGBA
    /// rasters are converted with the fixed BT.709 luma weights
    /// [`LUMA_WEIGHTS`] (alpha is ignored). The output has the same
    /// height and width as the input.
    pub fn to_intensity(&self) -> FloatField {
        let n = self.channels.samples() as usize;
        let npix = self.pixel_count();
        let mut values = Vec::with_capacity(npix);

        match self.channels {
            ChannelLayout::Gray => {
                values.extend(self.data.iter().map(|&v| v as f32));
            }
            ChannelLayout::Rgb | ChannelLayout::Rgba => {
                let [rw, gw, bw] = LUMA_WEIGHTS;
                for px in self.data.chunks_exact(n) {
                    values.push(rw * px[0] as f32 + gw * px[1] as f32 + bw * px[2] as f32);
                }
            }
        }

        FloatField::from_raw(self.width, self.height, values)
            .unwrap_or_else(|_| unreachable!("intensity field sized from a valid raster"))
    }
}
