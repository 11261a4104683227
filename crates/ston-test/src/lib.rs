//! ston-test - Synthetic fixtures for the STON test suites
//!
//! The original application's regression suite asserted against two PNG
//! fixtures: colored solid squares on a black background, and a second
//! image of nine disjoint shapes. These builders reproduce those images
//! arithmetically so the suites stay self-contained: every shape is a
//! solid axis-aligned rectangle, painted with at least a 10 pixel gap so
//! 8-connectivity cannot bridge neighbors.
//!
//! Dev-dependency only; nothing here ships in the pipeline crates.

use ston_core::{ChannelLayout, Raster};

/// Paint a solid rectangle into a raster.
///
/// `color` must supply one value per channel of the raster. Panics on
/// out-of-bounds coordinates; fixtures are fully under our control.
pub fn paint_rect(raster: &mut Raster, row0: u32, col0: u32, height: u32, width: u32, color: &[u8]) {
    let n = raster.channels().samples() as usize;
    assert_eq!(color.len(), n, "color must match the raster channel count");

    let raster_width = raster.width() as usize;
    for row in row0..row0 + height {
        for col in col0..col0 + width {
            let start = ((row as usize) * raster_width + (col as usize)) * n;
            raster.data_mut()[start..start + n].copy_from_slice(color);
        }
    }
}

/// Eight disjoint solid colored squares on a black RGB background.
///
/// Square sides 100, 90, 80, 70, 60, 56, 50 and 40 pixels, so the areas
/// are 10000, 8100, 6400, 4900, 3600, 3136, 2500 and 1600. With
/// `minimum_size = 2` all eight survive; with `minimum_size = 3000` the
/// two smallest (2500 and 1600) are dropped, leaving six. All colors
/// have luma well above the global mean of the mostly-black canvas.
pub fn eight_squares() -> Raster {
    let mut raster = Raster::new(600, 400, ChannelLayout::Rgb).unwrap();

    // (row, col, side, color)
    let squares: [(u32, u32, u32, [u8; 3]); 8] = [
        (10, 10, 100, [255, 255, 255]),
        (10, 120, 90, [255, 255, 0]),
        (10, 220, 80, [0, 255, 255]),
        (10, 310, 70, [0, 255, 0]),
        (130, 10, 60, [200, 200, 200]),
        (130, 80, 56, [255, 165, 0]),
        (130, 146, 50, [255, 192, 203]),
        (130, 206, 40, [180, 180, 180]),
    ];
    for (row, col, side, color) in squares {
        paint_rect(&mut raster, row, col, side, side, &color);
    }

    raster
}

/// Region areas of [`eight_squares`], largest first.
pub const EIGHT_SQUARE_AREAS: [u64; 8] = [10000, 8100, 6400, 4900, 3600, 3136, 2500, 1600];

/// Nine disjoint solid rectangles on a black grayscale background.
///
/// The largest rectangle is 148 x 217 (bounding-box area 32116) and the
/// smallest is 70 x 66 (bounding-box area 4620); being solid rectangles,
/// region area equals bounding-box area for every shape, so the area
/// ranking is also the bounding-box ranking.
pub fn nine_shapes() -> Raster {
    let mut raster = Raster::new(660, 400, ChannelLayout::Gray).unwrap();

    // (row, col, height, width), placed in three rows
    let shapes: [(u32, u32, u32, u32); 9] = [
        (10, 10, 148, 217),
        (10, 237, 140, 200),
        (10, 447, 130, 180),
        (168, 10, 120, 160),
        (168, 180, 100, 150),
        (168, 340, 90, 130),
        (298, 10, 80, 110),
        (298, 130, 70, 90),
        (298, 230, 70, 66),
    ];
    for (row, col, height, width) in shapes {
        paint_rect(&mut raster, row, col, height, width, &[255]);
    }

    raster
}

/// Bounding-box area of the largest [`nine_shapes`] region.
pub const NINE_SHAPES_LARGEST_BBOX: u64 = 32116;

/// Bounding-box area of the smallest (last-ranked) [`nine_shapes`] region.
pub const NINE_SHAPES_SMALLEST_BBOX: u64 = 4620;

/// A uniformly black grayscale raster.
pub fn all_black(width: u32, height: u32) -> Raster {
    Raster::new(width, height, ChannelLayout::Gray).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_squares_foreground_pixel_count() {
        let raster = eight_squares();
        let bright = raster
            .data()
            .chunks_exact(3)
            .filter(|px| px.iter().any(|&v| v > 0))
            .count() as u64;
        assert_eq!(bright, EIGHT_SQUARE_AREAS.iter().sum::<u64>());
    }

    #[test]
    fn test_nine_shapes_extremes() {
        // Largest and smallest rectangles match the published bbox areas
        assert_eq!(148u64 * 217, NINE_SHAPES_LARGEST_BBOX);
        assert_eq!(70u64 * 66, NINE_SHAPES_SMALLEST_BBOX);
    }
}
