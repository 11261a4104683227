//! Sobel edge magnitude
//!
//! Gradient-magnitude edge operator over an intensity field, used for the
//! edge-highlight view. Output is a same-shaped float field for
//! visualization only; no regions or coverage statistics derive from it.

use ston_core::FloatField;

/// Apply the Sobel operator and return the gradient magnitude.
///
/// Uses the standard unnormalized 3x3 kernels and replicate-border
/// handling: indices outside the field clamp to the nearest edge pixel,
/// so flat borders produce zero response instead of spurious edges.
///
/// `magnitude = sqrt(gx^2 + gy^2)` per pixel, where `gx` responds to
/// vertical edges (intensity changing across columns) and `gy` to
/// horizontal ones.
pub fn sobel_magnitude(field: &FloatField) -> FloatField {
    let width = field.width();
    let height = field.height();
    let w = width as usize;
    let data = field.data();

    // Replicate-border sample
    let at = |row: i64, col: i64| -> f64 {
        let r = row.clamp(0, height as i64 - 1) as usize;
        let c = col.clamp(0, width as i64 - 1) as usize;
        data[r * w + c] as f64
    };

    let mut out = Vec::with_capacity(data.len());
    for row in 0..height as i64 {
        for col in 0..width as i64 {
            let gx = (at(row - 1, col + 1) + 2.0 * at(row, col + 1) + at(row + 1, col + 1))
                - (at(row - 1, col - 1) + 2.0 * at(row, col - 1) + at(row + 1, col - 1));
            let gy = (at(row + 1, col - 1) + 2.0 * at(row + 1, col) + at(row + 1, col + 1))
                - (at(row - 1, col - 1) + 2.0 * at(row - 1, col) + at(row - 1, col + 1));
            out.push((gx * gx + gy * gy).sqrt() as f32);
        }
    }

    FloatField::from_raw(width, height, out)
        .unwrap_or_else(|_| unreachable!("edge field sized from a valid input"))
}
