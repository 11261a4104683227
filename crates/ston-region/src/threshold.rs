//! Global mean-intensity thresholding
//!
//! The binarization rule of the pipeline: a single scalar threshold equal
//! to the arithmetic mean of the whole intensity field, applied with a
//! strict greater-than. There is no adaptive or local variant; coarse
//! region statistics on thin-section micrographs only need the global
//! split between light grains and dark matrix.

use ston_core::{BitMask, FloatField};

/// Global threshold for a field: the arithmetic mean of all values.
///
/// Delegates to [`FloatField::mean`], which accumulates in `f64` in a
/// fixed row-major order, so the threshold is deterministic for a given
/// field.
pub fn global_mean(field: &FloatField) -> f64 {
    field.mean()
}

/// Binarize a field against its global mean.
///
/// `mask[p] = field[p] > mean(field)`; values equal to the mean are
/// background. Same input always yields the same mask bit-for-bit.
pub fn binarize(field: &FloatField) -> BitMask {
    let threshold = global_mean(field);
    let data = field.data().iter().map(|&v| (v as f64) > threshold).collect();

    BitMask::from_raw(field.width(), field.height(), data)
        .unwrap_or_else(|_| unreachable!("mask sized from a valid field"))
}
