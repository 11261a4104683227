//! Aggregate black/white coverage statistics
//!
//! Whole-image pixel-count ratios over a binarized map: `black` is the
//! background fraction, `white` the foreground fraction. Both ratio paths
//! of the pipeline (connected-component and Chan-Vese) report coverage
//! through this one type so the rounding rule stays in one place.

use crate::mask::BitMask;

/// Background/foreground pixel-count ratios
///
/// Each ratio is `count / total_pixels` rounded to 2 decimal places with
/// round-half-to-even. `black + white` is exactly 1.0 before rounding;
/// after rounding the sum may drift by up to 0.01. The drift is accepted
/// and deliberately not renormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageRatios {
    /// Fraction of pixels classified background
    pub black: f64,
    /// Fraction of pixels classified foreground
    pub white: f64,
}

impl CoverageRatios {
    /// Compute coverage ratios from a binary mask.
    pub fn from_mask(mask: &BitMask) -> Self {
        let total = mask.pixel_count() as f64;
        let white = mask.foreground_count() as f64;
        let black = total - white;

        CoverageRatios {
            black: round2(black / total),
            white: round2(white / total),
        }
    }
}

/// Round to 2 decimal places, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_background() {
        let mask = BitMask::new(10, 10).unwrap();
        let r = CoverageRatios::from_mask(&mask);
        assert_eq!(r.black, 1.0);
        assert_eq!(r.white, 0.0);
    }

    #[test]
    fn test_half_and_half() {
        let mut mask = BitMask::new(2, 2).unwrap();
        mask.set(0, 0, true).unwrap();
        mask.set(0, 1, true).unwrap();
        let r = CoverageRatios::from_mask(&mask);
        assert_eq!(r.black, 0.5);
        assert_eq!(r.white, 0.5);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 1 foreground pixel in 3x1 = 0.333... -> 0.33
        let mut mask = BitMask::new(3, 1).unwrap();
        mask.set(0, 0, true).unwrap();
        let r = CoverageRatios::from_mask(&mask);
        assert_eq!(r.white, 0.33);
        assert_eq!(r.black, 0.67);
    }

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_sum_near_one() {
        // 7 of 16 foreground: 0.4375 -> 0.44, 0.5625 -> 0.56
        let mut mask = BitMask::new(4, 4).unwrap();
        for i in 0..7u32 {
            mask.set(i / 4, i % 4, true).unwrap();
        }
        let r = CoverageRatios::from_mask(&mask);
        assert!((r.black + r.white - 1.0).abs() <= 0.01);
    }
}
