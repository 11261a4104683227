//! End-to-end pipeline regression test
//!
//! Segments a fixture through the facade and exports the catalog,
//! checking the textual contract the downstream tooling relies on.

use ston::io::{CATALOG_HEADER, format_catalog};
use ston::region::{AnalysisOptions, segment_regions};
use ston_test::eight_squares;

#[test]
fn segment_and_export_catalog() {
    let seg = segment_regions(&eight_squares(), &AnalysisOptions::new(2)).unwrap();
    assert_eq!(seg.regions.len(), 8);

    // 0.0004 mm^2 per pixel (20 um pixel pitch)
    let conversion_factor = 0.0004;
    let catalog = format_catalog(&seg.regions, conversion_factor);
    let lines: Vec<&str> = catalog.lines().collect();

    assert_eq!(lines[0], CATALOG_HEADER);
    assert_eq!(lines.len(), 9);

    // Rows follow the ranked order: pixel areas non-increasing
    let mut areas = Vec::new();
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 4);

        let pixels: u64 = fields[2].parse().unwrap();
        let mm2: f64 = fields[3].parse().unwrap();
        assert!((mm2 - pixels as f64 * conversion_factor).abs() < 1e-9);
        areas.push(pixels);
    }
    for pair in areas.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}
