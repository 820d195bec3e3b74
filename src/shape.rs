//! Grid partitioning: image count → rows × columns.
//!
//! A handful of counts get hand-tuned shapes for visual balance; every
//! other count falls through to a generic "fill up to four columns" rule.
//!
//! ```text
//!     count   shape        count   shape
//!     1       1×1          6       2×3   (tuned)
//!     2       1×2          8       2×4   (tuned)
//!     3, 4    2×2 (tuned)  12      3×4   (tuned)
//!     5       2×4          n       ⌈n / min(n,4)⌉ × min(n,4)
//! ```

use crate::error::LayoutError;

/// Upper bound on the column count for any grid.
pub const MAX_COLUMNS: usize = 4;

/// A (rows, columns) grid partition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns (never more than [`MAX_COLUMNS`]).
    pub cols: usize,
}

impl GridShape {
    /// Create a shape directly.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Choose the grid shape for `count` images.
    ///
    /// Tuned shapes are consulted first, then the generic rule.
    /// A count of zero has no shape and is rejected.
    ///
    /// ```
    /// use zengrid::GridShape;
    ///
    /// assert_eq!(GridShape::for_count(4).unwrap(), GridShape::new(2, 2));
    /// assert_eq!(GridShape::for_count(5).unwrap(), GridShape::new(2, 4));
    /// ```
    pub fn for_count(count: usize) -> Result<Self, LayoutError> {
        if count == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        Ok(tuned(count).unwrap_or_else(|| generic(count)))
    }

    /// Number of cells in the grid.
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the shape has no rows or no columns.
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Row and column of the `index`-th image in row-major order.
    ///
    /// `None` for a shape without columns.
    pub const fn cell_of(&self, index: usize) -> Option<(usize, usize)> {
        if self.cols == 0 {
            return None;
        }
        Some((index / self.cols, index % self.cols))
    }
}

/// Hand-tuned shapes. These override the generic rule where it would
/// produce an unbalanced page (e.g. four images in a single row).
fn tuned(count: usize) -> Option<GridShape> {
    match count {
        1 | 2 => Some(GridShape::new(1, count)),
        3 | 4 => Some(GridShape::new(2, 2)),
        6 => Some(GridShape::new(2, 3)),
        8 => Some(GridShape::new(2, 4)),
        12 => Some(GridShape::new(3, 4)),
        _ => None,
    }
}

fn generic(count: usize) -> GridShape {
    let cols = count.min(MAX_COLUMNS);
    GridShape::new(count.div_ceil(cols), cols)
}
