//! Region catalog export
//!
//! Serializes a ranked region collection to the tab-separated text table
//! consumed by downstream catalog tooling. The header text and field
//! order are a compatibility contract and must not change:
//!
//! ```text
//! #x	y	area[pixels]	area[mm2]
//! ```
//!
//! followed by one row per region in ranked order. `x`/`y` are the
//! centroid (row, col) coordinates and `area[mm2]` is the pixel area
//! scaled by the externally supplied pixel-to-mm^2 calibration factor.

use crate::error::IoResult;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use ston_region::RegionProps;

/// Catalog header line, byte-exact.
pub const CATALOG_HEADER: &str = "#x\ty\tarea[pixels]\tarea[mm2]";

/// Format a ranked region collection as a catalog table.
///
/// # Arguments
///
/// * `regions` - Regions in ranked order, as returned by
///   `segment_regions`
/// * `conversion_factor` - Squared pixel-to-millimeter calibration;
///   `area[mm2] = area[pixels] * conversion_factor`
pub fn format_catalog(regions: &[RegionProps], conversion_factor: f64) -> String {
    let mut out = String::with_capacity(32 * (regions.len() + 1));
    out.push_str(CATALOG_HEADER);
    out.push('\n');

    for region in regions {
        let (row, col) = region.centroid;
        let area_mm2 = region.area as f64 * conversion_factor;
        // Infallible: writing to a String cannot fail
        let _ = writeln!(out, "{row}\t{col}\t{}\t{area_mm2}", region.area);
    }

    out
}

/// Write a catalog table to a file.
pub fn write_catalog<P: AsRef<Path>>(
    path: P,
    regions: &[RegionProps],
    conversion_factor: f64,
) -> IoResult<()> {
    fs::write(path, format_catalog(regions, conversion_factor))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ston_core::Rect;

    fn region(area: u64, centroid: (f64, f64)) -> RegionProps {
        RegionProps {
            label: 1,
            area,
            bbox: Rect {
                min_row: 0,
                min_col: 0,
                max_row: 1,
                max_col: area.max(1) as u32,
            },
            centroid,
        }
    }

    #[test]
    fn test_header_is_byte_exact() {
        let catalog = format_catalog(&[], 1.0);
        assert_eq!(catalog, "#x\ty\tarea[pixels]\tarea[mm2]\n");
    }

    #[test]
    fn test_row_fields_and_order() {
        let regions = vec![region(200, (10.5, 20.25)), region(50, (3.0, 4.0))];
        let catalog = format_catalog(&regions, 0.5);

        let lines: Vec<&str> = catalog.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "10.5\t20.25\t200\t100");
        assert_eq!(lines[2], "3\t4\t50\t25");
    }

    #[test]
    fn test_conversion_factor_applied() {
        let catalog = format_catalog(&[region(1000, (0.0, 0.0))], 0.0001);
        assert!(catalog.contains("\t1000\t0.1"));
    }

    #[test]
    fn test_write_round_trip() {
        let dir = std::env::temp_dir().join("ston_catalog_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.txt");

        let regions = vec![region(7, (1.0, 2.0))];
        write_catalog(&path, &regions, 2.0).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, format_catalog(&regions, 2.0));
        let _ = fs::remove_file(&path);
    }
}
