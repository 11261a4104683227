//! ston-io - Raster loading and catalog export for STON
//!
//! Bridges the pure pipeline crates to the outside world:
//!
//! - [`read_raster`] decodes a micrograph file into a
//!   [`ston_core::Raster`] snapshot
//! - [`format_catalog`] / [`write_catalog`] serialize a ranked region
//!   collection to the tab-separated catalog table

pub mod catalog;
pub mod error;
pub mod read;

pub use catalog::{CATALOG_HEADER, format_catalog, write_catalog};
pub use error::{IoError, IoResult};
pub use read::{raster_from_image, read_raster};
