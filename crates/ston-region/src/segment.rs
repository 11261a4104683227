//! The connected-component segmentation pipeline
//!
//! `segment_regions` wires the stages together: grayscale conversion,
//! global mean thresholding, component labeling, per-region measurement,
//! minimum-size filtering with area ranking, and aggregate black/white
//! coverage. One invocation runs to completion on the calling thread and
//! returns an immutable [`Segmentation`] value; nothing is cached between
//! runs.

use crate::conncomp::{Connectivity, label_components};
use crate::error::RegionResult;
use crate::measure::{RegionProps, measure_regions};
use crate::select::filter_and_rank;
use crate::threshold::binarize;
use log::{debug, warn};
use ston_core::{CoverageRatios, LabelMap, Raster};

/// Parameters for a `segment_regions` run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Exclusive lower bound on region area; regions with
    /// `area > minimum_size` survive
    pub minimum_size: u64,
    /// Adjacency rule for component labeling
    pub connectivity: Connectivity,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            minimum_size: 1,
            connectivity: Connectivity::EightWay,
        }
    }
}

impl AnalysisOptions {
    /// Create options with the given minimum size and default
    /// 8-way connectivity.
    pub fn new(minimum_size: u64) -> Self {
        Self {
            minimum_size,
            connectivity: Connectivity::EightWay,
        }
    }

    /// Set the connectivity rule.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Immutable result of one `segment_regions` invocation
///
/// Owned by the caller and passed explicitly to whichever consumer needs
/// it (overlay rendering, catalog export); replaced wholesale by the next
/// run.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Component-labeled image (0 = background, labels dense from 1)
    pub labels: LabelMap,
    /// Surviving regions, ranked by descending area
    pub regions: Vec<RegionProps>,
    /// Whole-image black/white coverage of the binarized label map
    pub ratios: CoverageRatios,
}

impl Segmentation {
    /// True when the minimum-size filter removed every region.
    ///
    /// A normal, reportable condition ("0 regions found"), not a
    /// failure; the label map and ratios are still valid.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Segment an image into measured, ranked regions.
///
/// # Arguments
///
/// * `image` - Input raster (grayscale, RGB or RGBA)
/// * `options` - Minimum region size and connectivity
///
/// # Returns
///
/// A [`Segmentation`] holding the labeled image, the filtered and ranked
/// region collection, and the aggregate coverage ratios. The ratios are
/// computed from the binarized label map (all positive labels collapsed
/// to foreground), independent of the region filter.
pub fn segment_regions(image: &Raster, options: &AnalysisOptions) -> RegionResult<Segmentation> {
    debug!(
        "segment_regions: {}x{} raster, minimum_size={}, connectivity={:?}",
        image.width(),
        image.height(),
        options.minimum_size,
        options.connectivity
    );

    let intensity = image.to_intensity();
    let mask = binarize(&intensity);
    let labels = label_components(&mask, options.connectivity);
    let measured = measure_regions(&labels)?;
    let regions = filter_and_rank(measured, options.minimum_size);
    let ratios = CoverageRatios::from_mask(&labels.binarized());

    if regions.is_empty() {
        warn!(
            "segment_regions: 0 of {} regions survived minimum_size={}",
            labels.label_count(),
            options.minimum_size
        );
    } else {
        debug!(
            "segment_regions: {} of {} regions kept",
            regions.len(),
            labels.label_count()
        );
    }

    Ok(Segmentation {
        labels,
        regions,
        ratios,
    })
}
