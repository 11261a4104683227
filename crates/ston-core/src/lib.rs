//! STON Core - Basic data structures for the segmentation pipeline
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the STON region-segmentation and morphometry pipeline:
//!
//! - [`Raster`] - The caller-owned image buffer snapshot (1/3/4 channel)
//! - [`FloatField`] - Floating-point intensity / edge field
//! - [`BitMask`] - Binary foreground mask
//! - [`LabelMap`] - Connected-component labeled image
//! - [`Rect`] - Bounding rectangle with exclusive upper bounds
//! - [`CoverageRatios`] - Aggregate black/white pixel-count ratios
//!
//! All derived entities are freshly allocated per pipeline invocation;
//! the core never retains references into caller storage.

pub mod error;
pub mod field;
pub mod label;
pub mod mask;
pub mod raster;
pub mod rect;
pub mod stats;

pub use error::{CoreResult, Error};
pub use field::FloatField;
pub use label::LabelMap;
pub use mask::BitMask;
pub use raster::{ChannelLayout, LUMA_WEIGHTS, Raster};
pub use rect::Rect;
pub use stats::CoverageRatios;
