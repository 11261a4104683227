//! Region filtering and ranking
//!
//! Drops regions at or below the minimum-size threshold and orders the
//! survivors by descending area. The filter boundary is strict
//! (`area > minimum_size`): a region whose area equals the threshold is
//! dropped. The sort is stable, so regions of equal area keep their
//! labeling (discovery) order.

use crate::measure::RegionProps;

/// Filter regions by minimum size, then rank by descending area.
///
/// # Arguments
///
/// * `regions` - Unordered region list, typically in label order
/// * `minimum_size` - Exclusive lower bound on area; survivors satisfy
///   `area > minimum_size`
///
/// An empty result is a valid outcome, not an error; aggregate coverage
/// statistics are unaffected since they derive from the full mask.
pub fn filter_and_rank(mut regions: Vec<RegionProps>, minimum_size: u64) -> Vec<RegionProps> {
    regions.retain(|r| r.area > minimum_size);
    regions.sort_by(|a, b| b.area.cmp(&a.area));
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use ston_core::Rect;

    fn region(label: u32, area: u64) -> RegionProps {
        let side = (area as f64).sqrt().ceil() as u32;
        RegionProps {
            label,
            area,
            bbox: Rect {
                min_row: 0,
                min_col: 0,
                max_row: side.max(1),
                max_col: side.max(1),
            },
            centroid: (0.0, 0.0),
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let regions = vec![region(1, 10), region(2, 11), region(3, 9)];
        let kept = filter_and_rank(regions, 10);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].label, 2);
    }

    #[test]
    fn test_ranked_by_descending_area() {
        let regions = vec![region(1, 5), region(2, 50), region(3, 20)];
        let areas: Vec<u64> = filter_and_rank(regions, 0).iter().map(|r| r.area).collect();
        assert_eq!(areas, vec![50, 20, 5]);
    }

    #[test]
    fn test_ties_keep_label_order() {
        let regions = vec![region(1, 7), region(2, 9), region(3, 7)];
        let labels: Vec<u32> = filter_and_rank(regions, 0).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![2, 1, 3]);
    }

    #[test]
    fn test_all_filtered_is_valid() {
        let regions = vec![region(1, 2), region(2, 3)];
        assert!(filter_and_rank(regions, 100).is_empty());
    }

    #[test]
    fn test_raising_threshold_never_adds_regions() {
        let regions: Vec<RegionProps> = (1..=8).map(|i| region(i, (i as u64) * 10)).collect();
        let mut previous = usize::MAX;
        for threshold in [0u64, 15, 35, 55, 75, 95] {
            let kept = filter_and_rank(regions.clone(), threshold).len();
            assert!(kept <= previous);
            previous = kept;
        }
    }
}
