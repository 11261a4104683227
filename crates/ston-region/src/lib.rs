//! ston-region - Connected-component segmentation for STON
//!
//! This crate implements the region path of the STON pipeline:
//!
//! - **Thresholding** - Global mean-intensity binarization
//! - **Component labeling** - 4/8-connected flood-fill labeling
//! - **Morphometry** - Per-region centroid, bounding box and area
//! - **Selection** - Minimum-size filtering and area ranking
//!
//! The single entry point used by callers is [`segment_regions`]:
//!
//! ```
//! use ston_core::{ChannelLayout, Raster};
//! use ston_region::{AnalysisOptions, segment_regions};
//!
//! let mut raster = Raster::new(16, 16, ChannelLayout::Gray).unwrap();
//! for col in 4..8 {
//!     raster.data_mut()[5 * 16 + col] = 255;
//! }
//!
//! let seg = segment_regions(&raster, &AnalysisOptions::new(1)).unwrap();
//! assert_eq!(seg.regions.len(), 1);
//! assert_eq!(seg.regions[0].area, 4);
//! ```

pub mod conncomp;
pub mod error;
pub mod measure;
pub mod segment;
pub mod select;
pub mod threshold;

// Re-export core types
pub use ston_core;

pub use conncomp::{Connectivity, label_components};
pub use error::{RegionError, RegionResult};
pub use measure::{RegionProps, measure_regions};
pub use segment::{AnalysisOptions, Segmentation, segment_regions};
pub use select::filter_and_rank;
pub use threshold::{binarize, global_mean};
