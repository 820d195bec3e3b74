//! Geometry errors shared by the layout stages.

use core::fmt;

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Zero images, or a grid shape with no rows or no columns.
    EmptyGrid,
    /// Source image has zero width or height.
    ZeroSourceDimension,
    /// Page margins leave no room for a cell of the requested shape.
    DegenerateCell {
        /// Computed cell width (may be zero or negative).
        width: i64,
        /// Computed cell height (may be zero or negative).
        height: i64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("grid has no images or no cells"),
            Self::ZeroSourceDimension => f.write_str("source image has zero width or height"),
            Self::DegenerateCell { width, height } => write!(
                f,
                "page margins leave a non-positive cell ({width}×{height}) for this grid shape"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}
