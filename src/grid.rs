//! Whole-page layout planning on dimensions alone.
//!
//! [`GridLayout::compute`] runs partition → scale → place without touching
//! pixels, so callers can inspect (or visualize) the page before decoding
//! anything at full size.

use alloc::vec::Vec;

use crate::error::LayoutError;
use crate::page::{Margins, PageSpec, Size};
use crate::place::{Placement, calculate_margins, placements};
use crate::scale::scaled_sizes;
use crate::shape::GridShape;

/// One image's journey through the layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Original dimensions.
    pub source: Size,
    /// Scaled dimensions and canvas position.
    pub placement: Placement,
}

/// Computed page layout for an ordered set of images.
///
/// # Example
///
/// ```
/// use zengrid::{GridLayout, GridShape, PageSpec, Size};
///
/// let layout = GridLayout::compute(&[Size::new(1000, 1000); 4], &PageSpec::A4_LANDSCAPE).unwrap();
/// assert_eq!(layout.shape, GridShape::new(2, 2));
/// assert_eq!(layout.cell, Size::new(1514, 900));
/// assert_eq!(layout.tiles[3].placement.x, 1794);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// Page the layout was computed for.
    pub page: PageSpec,
    /// Rows × columns chosen for the image count.
    pub shape: GridShape,
    /// Uniform cell bounds every image was fitted into.
    pub cell: Size,
    /// Centering margins around the populated grid.
    pub margins: Margins,
    /// Per-image result, in input order.
    pub tiles: Vec<Tile>,
}

impl GridLayout {
    /// Lay out images of the given source dimensions on `page`.
    pub fn compute(sources: &[Size], page: &PageSpec) -> Result<Self, LayoutError> {
        let shape = GridShape::for_count(sources.len())?;
        let cell = page.cell_size(shape)?;
        let scaled = scaled_sizes(sources, shape, page)?;
        let margins = calculate_margins(&scaled, shape, page);
        let tiles = placements(&scaled, shape, page, &margins)
            .into_iter()
            .zip(sources)
            .map(|(placement, &source)| Tile { source, placement })
            .collect();
        Ok(Self {
            page: *page,
            shape,
            cell,
            margins,
            tiles,
        })
    }

    /// Number of images laid out.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the layout holds no images. Never true for a computed layout.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Scaled dimensions in input order.
    pub fn scaled_sizes(&self) -> impl Iterator<Item = Size> + '_ {
        self.tiles.iter().map(|t| t.placement.size)
    }

    /// Whether every scaled image has the same dimensions, i.e. the
    /// centering and row-advance approximations are exact.
    pub fn is_uniform(&self) -> bool {
        let mut sizes = self.scaled_sizes();
        match sizes.next() {
            Some(first) => sizes.all(|s| s == first),
            None => true,
        }
    }

    /// Whether any placed image extends past the page edges.
    pub fn overflows_page(&self) -> bool {
        let (w, h) = (self.page.width as i64, self.page.height as i64);
        self.tiles.iter().any(|t| {
            let p = &t.placement;
            p.x < 0 || p.y < 0 || p.x + p.size.width as i64 > w || p.y + p.size.height as i64 > h
        })
    }
}
