//! Per-region morphometry
//!
//! Computes centroid, bounding box and pixel area for every labeled
//! component in a single pass over the label map. Coordinates are
//! (row, col) throughout; bounding boxes use exclusive upper bounds so
//! `bbox.area()` is directly comparable with the pixel area.

use crate::error::{RegionError, RegionResult};
use ston_core::{LabelMap, Rect};

/// Measured properties of one connected region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProps {
    /// Label of this region in the map it was measured from
    pub label: u32,
    /// Number of pixels carrying the label
    pub area: u64,
    /// Tightest axis-aligned bounding rectangle
    pub bbox: Rect,
    /// Unweighted mean of (row, col) pixel positions
    pub centroid: (f64, f64),
}

/// Per-label accumulator for the measurement pass
struct Accum {
    count: u64,
    sum_row: u64,
    sum_col: u64,
    bbox: Rect,
}

/// Measure every positive label in a label map.
///
/// Returns exactly one record per distinct positive label, ordered by
/// label; background (label 0) produces no record. Labels are dense by
/// construction of [`crate::label_components`], so the accumulators are
/// a plain vector indexed by `label - 1`.
///
/// # Errors
///
/// Returns [`RegionError::LabelOutOfRange`] if the map contains a label
/// above its declared `label_count`.
pub fn measure_regions(labels: &LabelMap) -> RegionResult<Vec<RegionProps>> {
    let width = labels.width();
    let height = labels.height();
    let count = labels.label_count() as usize;

    let mut accums: Vec<Option<Accum>> = Vec::new();
    accums.resize_with(count, || None);

    for row in 0..height {
        for col in 0..width {
            let label = labels.data()[(row as usize) * (width as usize) + (col as usize)];
            if label == 0 {
                continue;
            }
            if label as usize > count {
                return Err(RegionError::LabelOutOfRange {
                    label,
                    count: labels.label_count(),
                });
            }

            let slot = &mut accums[(label - 1) as usize];
            match slot {
                Some(acc) => {
                    acc.count += 1;
                    acc.sum_row += u64::from(row);
                    acc.sum_col += u64::from(col);
                    acc.bbox.include(row, col);
                }
                None => {
                    *slot = Some(Accum {
                        count: 1,
                        sum_row: u64::from(row),
                        sum_col: u64::from(col),
                        bbox: Rect::from_pixel(row, col),
                    });
                }
            }
        }
    }

    let regions = accums
        .into_iter()
        .enumerate()
        .filter_map(|(i, slot)| {
            slot.map(|acc| RegionProps {
                label: (i + 1) as u32,
                area: acc.count,
                bbox: acc.bbox,
                centroid: (
                    acc.sum_row as f64 / acc.count as f64,
                    acc.sum_col as f64 / acc.count as f64,
                ),
            })
        })
        .collect();

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_from_rows(count: u32, rows: &[&[u32]]) -> LabelMap {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        LabelMap::from_raw(width, height, count, data).unwrap()
    }

    #[test]
    fn test_empty_map_no_regions() {
        let labels = labels_from_rows(0, &[&[0, 0], &[0, 0]]);
        assert!(measure_regions(&labels).unwrap().is_empty());
    }

    #[test]
    fn test_solid_rectangle_area_equals_bbox() {
        let labels = labels_from_rows(1, &[
            &[0, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ]);
        let regions = measure_regions(&labels).unwrap();
        assert_eq!(regions.len(), 1);

        let r = &regions[0];
        assert_eq!(r.area, 4);
        assert_eq!(r.bbox.area(), 4);
        assert_eq!(r.bbox.min_row, 1);
        assert_eq!(r.bbox.min_col, 1);
        assert_eq!(r.bbox.max_row, 3);
        assert_eq!(r.bbox.max_col, 3);
        assert_eq!(r.centroid, (1.5, 1.5));
    }

    #[test]
    fn test_irregular_blob_area_below_bbox() {
        // L-shape: 3 pixels in a 2x2 bounding box
        let labels = labels_from_rows(1, &[
            &[1, 0],
            &[1, 1],
        ]);
        let r = &measure_regions(&labels).unwrap()[0];
        assert_eq!(r.area, 3);
        assert_eq!(r.bbox.area(), 4);
        assert!(r.area <= r.bbox.area());
    }

    #[test]
    fn test_centroid_is_unweighted_mean() {
        // Pixels at (0,0), (0,2), (1,1): centroid (1/3, 1)
        let labels = labels_from_rows(1, &[
            &[1, 0, 1],
            &[0, 1, 0],
        ]);
        let r = &measure_regions(&labels).unwrap()[0];
        assert!((r.centroid.0 - 1.0 / 3.0).abs() < 1e-12);
        assert!((r.centroid.1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_label_above_declared_count_is_an_error() {
        let labels = labels_from_rows(1, &[&[0, 5]]);
        let err = measure_regions(&labels).unwrap_err();
        assert!(matches!(
            err,
            RegionError::LabelOutOfRange { label: 5, count: 1 }
        ));
    }

    #[test]
    fn test_one_record_per_label_in_order() {
        let labels = labels_from_rows(3, &[
            &[1, 0, 2],
            &[0, 0, 2],
            &[3, 0, 0],
        ]);
        let regions = measure_regions(&labels).unwrap();
        let labels_out: Vec<u32> = regions.iter().map(|r| r.label).collect();
        assert_eq!(labels_out, vec![1, 2, 3]);
        assert_eq!(regions[1].area, 2);
    }
}
