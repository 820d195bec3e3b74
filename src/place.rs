//! Centering the grid and placing scaled images on the canvas.
//!
//! Both the centering and the row advance are approximations that are exact
//! only when every scaled image has the same dimensions (the usual case for
//! a batch of same-purpose images):
//!
//! - Row width comes from the first `cols` images; column height from the
//!   first `rows` images *in flat order*, not one image per row.
//! - Each row advances by the height of the last image placed in it, not by
//!   the tallest image in the row.
//!
//! Mixed sizes therefore drift off-center and rows may overlap or leave
//! gaps. Nothing is bounds-checked; the surface clips at its edges.

use alloc::vec::Vec;

use crate::error::LayoutError;
use crate::page::{Margins, PageSpec, Size};
use crate::raster::{Raster, Surface};
use crate::shape::GridShape;

/// Where one image lands on the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Position of the image in the input sequence.
    pub index: usize,
    /// Left edge on the canvas.
    pub x: i64,
    /// Top edge on the canvas.
    pub y: i64,
    /// Dimensions of the placed (scaled) image.
    pub size: Size,
}

/// Compute the centering margins for a grid of scaled images.
///
/// `sizes` are the scaled image dimensions in placement order.
///
/// ```
/// use zengrid::{GridShape, PageSpec, Size, place::calculate_margins};
///
/// let sizes = [Size::new(900, 900); 4];
/// let m = calculate_margins(&sizes, GridShape::new(2, 2), &PageSpec::A4_LANDSCAPE);
/// assert_eq!((m.left, m.top), (814, 300));
/// ```
pub fn calculate_margins(sizes: &[Size], shape: GridShape, page: &PageSpec) -> Margins {
    let between = page.margin_between as i64;

    let row_width: i64 = sizes
        .iter()
        .take(shape.cols)
        .map(|s| s.width as i64)
        .sum::<i64>()
        + gaps(shape.cols) * between;
    let col_height: i64 = sizes
        .iter()
        .take(shape.rows)
        .map(|s| s.height as i64)
        .sum::<i64>()
        + gaps(shape.rows) * between;

    let page_w = page.width as i64;
    let page_h = page.height as i64;
    let left = (page_w - row_width).div_euclid(2);
    let top = (page_h - col_height).div_euclid(2);
    Margins {
        left,
        right: page_w - row_width - left,
        top,
        bottom: page_h - col_height - top,
    }
}

fn gaps(n: usize) -> i64 {
    n.saturating_sub(1) as i64
}

/// Walk the grid left-to-right, top-to-bottom starting at the margins.
///
/// After every `cols` images the cursor returns to `margins.left` and moves
/// down by the last placed image's height plus the gap.
pub fn placements(
    sizes: &[Size],
    shape: GridShape,
    page: &PageSpec,
    margins: &Margins,
) -> Vec<Placement> {
    let between = page.margin_between as i64;
    let mut out = Vec::with_capacity(sizes.len());
    let (mut x, mut y) = (margins.left, margins.top);
    let mut col = 0;

    for (index, &size) in sizes.iter().enumerate() {
        out.push(Placement { index, x, y, size });
        x += size.width as i64 + between;
        col += 1;
        if col == shape.cols {
            x = margins.left;
            y += size.height as i64 + between;
            col = 0;
        }
    }
    out
}

/// Paste already-scaled images onto `canvas` in grid order.
///
/// Returns where each image was placed.
pub fn place<R, S>(
    canvas: &mut S,
    images: &[R],
    shape: GridShape,
    page: &PageSpec,
) -> Result<Vec<Placement>, LayoutError>
where
    R: Raster,
    S: Surface<R> + ?Sized,
{
    if images.is_empty() || shape.is_empty() {
        return Err(LayoutError::EmptyGrid);
    }
    let sizes: Vec<Size> = images.iter().map(Raster::dimensions).collect();
    let margins = calculate_margins(&sizes, shape, page);
    let layout = placements(&sizes, shape, page, &margins);
    for (p, img) in layout.iter().zip(images) {
        canvas.paste(img, p.x, p.y);
    }
    Ok(layout)
}
