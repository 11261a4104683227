//! ston-filter - Edge and level-set segmentation for STON
//!
//! This crate implements the alternative segmentation path of the STON
//! pipeline, used when region-level detail is not required:
//!
//! - **Sobel edges** - [`segment_edges`] returns a gradient-magnitude
//!   field for the edge-highlight view
//! - **Chan-Vese** - [`segment_binary`] returns a two-phase binary image
//!   plus aggregate black/white coverage ratios
//!
//! ```
//! use ston_core::{ChannelLayout, Raster};
//! use ston_filter::segment_edges;
//!
//! let raster = Raster::new(64, 64, ChannelLayout::Gray).unwrap();
//! let edges = segment_edges(&raster).unwrap();
//! assert_eq!(edges.width(), 64);
//! ```

pub mod chanvese;
pub mod edge;
pub mod error;
pub mod segment;

// Re-export core types
pub use ston_core;

pub use chanvese::{ChanVeseOptions, chan_vese};
pub use edge::sobel_magnitude;
pub use error::{FilterError, FilterResult};
pub use segment::{segment_binary, segment_edges};
