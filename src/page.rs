//! Page geometry: canvas size, margin constraints, and cell computation.

use crate::error::LayoutError;
use crate::shape::GridShape;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Page canvas and the spacing constraints for placing a grid on it.
///
/// Immutable for the duration of a run; pass it by value or reference into
/// each layout stage.
///
/// ```
/// use zengrid::{GridShape, PageSpec, Size};
///
/// let page = PageSpec::A4_LANDSCAPE;
/// let cell = page.cell_size(GridShape::new(2, 2)).unwrap();
/// assert_eq!(cell, Size::new(1514, 900));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageSpec {
    /// Page width in pixels.
    pub width: u32,
    /// Page height in pixels.
    pub height: u32,
    /// Minimum margin on the left and right edges.
    pub margin_lr: u32,
    /// Minimum margin on the top and bottom edges.
    pub margin_tb: u32,
    /// Gap between neighbouring images, both axes.
    pub margin_between: u32,
}

impl PageSpec {
    /// Landscape A4 at 300 DPI: 3508×2480, 200px side margins,
    /// 300px top/bottom margins, 80px between images.
    pub const A4_LANDSCAPE: Self = Self {
        width: 3508,
        height: 2480,
        margin_lr: 200,
        margin_tb: 300,
        margin_between: 80,
    };

    /// A page of the given size with no margins.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin_lr: 0,
            margin_tb: 0,
            margin_between: 0,
        }
    }

    /// Set the minimum edge margins (left/right, top/bottom).
    pub const fn with_margins(mut self, margin_lr: u32, margin_tb: u32) -> Self {
        self.margin_lr = margin_lr;
        self.margin_tb = margin_tb;
        self
    }

    /// Set the gap between neighbouring images.
    pub const fn with_margin_between(mut self, margin_between: u32) -> Self {
        self.margin_between = margin_between;
        self
    }

    /// Page dimensions.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Uniform cell bounds for every grid position of `shape`.
    ///
    /// Each axis is `(page − 2·edge_margin − (n−1)·between) / n`, floored.
    /// Fails with [`LayoutError::EmptyGrid`] for a shape without rows or
    /// columns, and with [`LayoutError::DegenerateCell`] when either axis is
    /// not positive.
    pub fn cell_size(&self, shape: GridShape) -> Result<Size, LayoutError> {
        if shape.is_empty() {
            return Err(LayoutError::EmptyGrid);
        }
        let width = cell_extent(self.width, self.margin_lr, self.margin_between, shape.cols);
        let height = cell_extent(self.height, self.margin_tb, self.margin_between, shape.rows);
        if width <= 0 || height <= 0 {
            return Err(LayoutError::DegenerateCell { width, height });
        }
        Ok(Size::new(width as u32, height as u32))
    }

    /// Check that `shape` leaves a positive cell on this page.
    pub fn validate_for(&self, shape: GridShape) -> Result<(), LayoutError> {
        self.cell_size(shape).map(|_| ())
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::A4_LANDSCAPE
    }
}

fn cell_extent(page: u32, edge: u32, between: u32, count: usize) -> i64 {
    let count = count as i64;
    let free = page as i64 - 2 * edge as i64 - (count - 1) * between as i64;
    free.div_euclid(count)
}

/// Space around the populated grid after centering.
///
/// Signed: content wider than the page yields negative margins, which the
/// placer honours by clipping at the canvas edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Margins {
    /// Space left of the first column.
    pub left: i64,
    /// Remainder right of the grid: `page − content − left`.
    pub right: i64,
    /// Space above the first row.
    pub top: i64,
    /// Remainder below the grid: `page − content − top`.
    pub bottom: i64,
}
