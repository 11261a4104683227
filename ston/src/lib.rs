//! STON - Region segmentation and morphometry for petrographic micrographs
//!
//! This is the segmentation core of the STON thin-section viewer: a
//! deterministic image-to-region-statistics pipeline with two selectable
//! strategies over a common grayscale contract.
//!
//! # Overview
//!
//! - [`region::segment_regions`] - threshold, label, measure, filter and
//!   rank connected regions, with aggregate black/white coverage
//! - [`filter::segment_edges`] - Sobel edge-magnitude field
//! - [`filter::segment_binary`] - Chan-Vese two-phase segmentation with
//!   coverage ratios
//! - [`io::read_raster`] / [`io::write_catalog`] - the filesystem seams
//!
//! # Example
//!
//! ```
//! use ston::region::{AnalysisOptions, segment_regions};
//! use ston::{ChannelLayout, Raster};
//!
//! let mut raster = Raster::new(32, 32, ChannelLayout::Gray).unwrap();
//! for row in 8..16 {
//!     for col in 8..16 {
//!         raster.data_mut()[row * 32 + col] = 255;
//!     }
//! }
//!
//! let seg = segment_regions(&raster, &AnalysisOptions::new(2)).unwrap();
//! assert_eq!(seg.regions.len(), 1);
//! assert_eq!(seg.regions[0].area, 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ston_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ston_filter as filter;
pub use ston_io as io;
pub use ston_region as region;
