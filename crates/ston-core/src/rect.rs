//! Rect - axis-aligned bounding rectangle in (row, col) coordinates
//!
//! Upper bounds are exclusive: a rectangle covering the single pixel at
//! `(r, c)` is `Rect { min_row: r, min_col: c, max_row: r + 1, max_col:
//! c + 1 }`, and `area() == (max_row - min_row) * (max_col - min_col)`.
//! The core uses (row, col) throughout; any (x, y) transposition for
//! display is the rendering layer's business.

/// Axis-aligned rectangle with exclusive upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// First row covered
    pub min_row: u32,
    /// First column covered
    pub min_col: u32,
    /// One past the last row covered
    pub max_row: u32,
    /// One past the last column covered
    pub max_col: u32,
}

impl Rect {
    /// Rectangle covering exactly the pixel at `(row, col)`.
    pub fn from_pixel(row: u32, col: u32) -> Self {
        Rect {
            min_row: row,
            min_col: col,
            max_row: row + 1,
            max_col: col + 1,
        }
    }

    /// Grow the rectangle to cover the pixel at `(row, col)`.
    pub fn include(&mut self, row: u32, col: u32) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row + 1);
        self.max_col = self.max_col.max(col + 1);
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col
    }

    /// Area of the rectangle in pixels.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.height()) * u64::from(self.width())
    }
}
