//! Alternative segmentation entry points
//!
//! The two region-free operations of the pipeline: Sobel edge highlight
//! and Chan-Vese binary segmentation. Both consume the same raster
//! contract as `segment_regions` but share no intermediate state with the
//! connected-component path; per invocation the caller picks one path or
//! the other.

use crate::chanvese::{ChanVeseOptions, chan_vese};
use crate::edge::sobel_magnitude;
use crate::error::FilterResult;
use log::debug;
use ston_core::{BitMask, CoverageRatios, FloatField, Raster};

/// Compute the Sobel edge-magnitude field of an image.
///
/// Visualization only: no regions, no coverage ratios.
pub fn segment_edges(image: &Raster) -> FilterResult<FloatField> {
    debug!("segment_edges: {}x{} raster", image.width(), image.height());

    let intensity = image.to_intensity();
    Ok(sobel_magnitude(&intensity))
}

/// Segment an image into two phases with Chan-Vese and report coverage.
///
/// Returns the binary image plus black/white pixel-count ratios computed
/// the same way as the connected-component path, but without any
/// labeling, measurement or filtering.
pub fn segment_binary(
    image: &Raster,
    options: &ChanVeseOptions,
) -> FilterResult<(BitMask, CoverageRatios)> {
    debug!(
        "segment_binary: {}x{} raster, mu={}, max_iter={}",
        image.width(),
        image.height(),
        options.mu,
        options.max_iter
    );

    let intensity = image.to_intensity();
    let mask = chan_vese(&intensity, options)?;
    let ratios = CoverageRatios::from_mask(&mask);

    Ok((mask, ratios))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ston_core::ChannelLayout;

    #[test]
    fn test_edge_field_matches_raster_shape() {
        let raster = Raster::new(32, 24, ChannelLayout::Rgb).unwrap();
        let edges = segment_edges(&raster).unwrap();
        assert_eq!(edges.width(), 32);
        assert_eq!(edges.height(), 24);
    }

    #[test]
    fn test_binary_ratios_sum_close_to_one() {
        let mut raster = Raster::new(30, 30, ChannelLayout::Gray).unwrap();
        for row in 10..20u32 {
            for col in 10..20u32 {
                raster.data_mut()[(row * 30 + col) as usize] = 255;
            }
        }

        let (mask, ratios) = segment_binary(&raster, &ChanVeseOptions::default()).unwrap();
        assert_eq!(mask.pixel_count(), 900);
        assert!((ratios.black + ratios.white - 1.0).abs() <= 0.01);
    }
}
