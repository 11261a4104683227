//! Raster loading
//!
//! The one seam between the pipeline and the filesystem: decode a
//! micrograph into a [`Raster`] snapshot. Decoding failures surface here,
//! before the core is ever invoked; the pipeline crates never touch the
//! filesystem themselves.

use crate::error::IoResult;
use image::DynamicImage;
use std::path::Path;
use ston_core::Raster;

/// Load an image file into a raster.
///
/// 8-bit grayscale and RGB images map directly; every other decoded
/// format is converted through 8-bit RGBA.
///
/// # Errors
///
/// Returns [`crate::IoError::Decode`] if the file cannot be decoded and
/// [`crate::IoError::Core`] if the decoded image has invalid dimensions.
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let decoded = image::open(path)?;
    raster_from_image(decoded)
}

/// Convert a decoded image into a raster.
pub fn raster_from_image(decoded: DynamicImage) -> IoResult<Raster> {
    let raster = match decoded {
        DynamicImage::ImageLuma8(gray) => {
            let (width, height) = gray.dimensions();
            Raster::from_raw(width, height, 1, gray.into_raw())?
        }
        DynamicImage::ImageRgb8(rgb) => {
            let (width, height) = rgb.dimensions();
            Raster::from_raw(width, height, 3, rgb.into_raw())?
        }
        other => {
            let rgba = other.to_rgba8();
            let (width, height) = rgba.dimensions();
            Raster::from_raw(width, height, 4, rgba.into_raw())?
        }
    };

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ston_core::ChannelLayout;

    #[test]
    fn test_luma_maps_to_gray() {
        let gray = image::GrayImage::from_pixel(4, 3, image::Luma([128]));
        let raster = raster_from_image(DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(raster.channels(), ChannelLayout::Gray);
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
    }

    #[test]
    fn test_rgb_maps_to_rgb() {
        let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]));
        let raster = raster_from_image(DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(raster.channels(), ChannelLayout::Rgb);
        assert_eq!(raster.pixel(0, 0), Some(&[10u8, 20, 30][..]));
    }

    #[test]
    fn test_other_formats_go_through_rgba() {
        let rgba16 = DynamicImage::new_rgba16(2, 2);
        let raster = raster_from_image(rgba16).unwrap();
        assert_eq!(raster.channels(), ChannelLayout::Rgba);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_raster("/nonexistent/micrograph.png").is_err());
    }
}
