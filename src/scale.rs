//! Scaling images to fit the uniform grid cell.

use alloc::vec::Vec;

use num_traits::Float;

use crate::error::LayoutError;
use crate::page::{PageSpec, Size};
use crate::raster::Raster;
use crate::shape::GridShape;

/// Largest scale factor that keeps `source` inside `cell` on both axes.
pub fn fit_ratio(source: Size, cell: Size) -> f64 {
    let ratio_w = cell.width as f64 / source.width as f64;
    let ratio_h = cell.height as f64 / source.height as f64;
    ratio_w.min(ratio_h)
}

/// Dimensions of `source` scaled by [`fit_ratio`], each side floored.
///
/// Flooring guarantees the result never overflows the cell. A side that
/// would floor to zero (extreme aspect ratios) is kept at one pixel.
///
/// ```
/// use zengrid::{Size, scale::fit_size};
///
/// // 1000×1000 into 1514×900: height constrains, ratio 0.9
/// assert_eq!(fit_size(Size::new(1000, 1000), Size::new(1514, 900)), Ok(Size::new(900, 900)));
/// ```
pub fn fit_size(source: Size, cell: Size) -> Result<Size, LayoutError> {
    if source.is_empty() {
        return Err(LayoutError::ZeroSourceDimension);
    }
    let ratio = fit_ratio(source, cell);
    Ok(Size::new(
        floor_scaled(source.width, ratio),
        floor_scaled(source.height, ratio),
    ))
}

fn floor_scaled(side: u32, ratio: f64) -> u32 {
    let v = Float::floor(side as f64 * ratio);
    if v < 1.0 { 1 } else { v as u32 }
}

/// Scale every image to fit the cell of `shape` on `page`.
///
/// Order and length are preserved. Each image is scaled by its own ratio
/// against the shared cell bounds, so images with different aspect ratios
/// end up with different absolute sizes. Resampling is nearest-neighbour.
pub fn scale<R: Raster>(
    images: &[R],
    shape: GridShape,
    page: &PageSpec,
) -> Result<Vec<R>, LayoutError> {
    let cell = page.cell_size(shape)?;
    images
        .iter()
        .map(|img| {
            let target = fit_size(img.dimensions(), cell)?;
            Ok(img.resize_nearest(target))
        })
        .collect()
}

/// Dimensions-only counterpart of [`scale`].
pub fn scaled_sizes(
    sources: &[Size],
    shape: GridShape,
    page: &PageSpec,
) -> Result<Vec<Size>, LayoutError> {
    let cell = page.cell_size(shape)?;
    sources.iter().map(|&s| fit_size(s, cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Clone, Debug, PartialEq)]
    struct Tile {
        id: usize,
        size: Size,
    }

    impl Raster for Tile {
        fn dimensions(&self) -> Size {
            self.size
        }

        fn resize_nearest(&self, size: Size) -> Self {
            Self { id: self.id, size }
        }
    }

    fn tiles(sizes: &[(u32, u32)]) -> Vec<Tile> {
        sizes
            .iter()
            .enumerate()
            .map(|(id, &(w, h))| Tile {
                id,
                size: Size::new(w, h),
            })
            .collect()
    }

    // ── fit_size ────────────────────────────────────────────────────────

    #[test]
    fn square_into_wide_cell() {
        assert_eq!(
            fit_size(Size::new(1000, 1000), Size::new(1514, 900)),
            Ok(Size::new(900, 900))
        );
    }

    #[test]
    fn wide_source_width_constrains() {
        // 2000×500 into 1000×900 → ratio 0.5 → 1000×250
        assert_eq!(
            fit_size(Size::new(2000, 500), Size::new(1000, 900)),
            Ok(Size::new(1000, 250))
        );
    }

    #[test]
    fn upscales_small_sources() {
        // 191×191 into 717×573 → ratio 3.0 exactly
        assert_eq!(
            fit_size(Size::new(191, 191), Size::new(717, 573)),
            Ok(Size::new(573, 573))
        );
    }

    #[test]
    fn sides_are_floored() {
        // 201×300 into 150×150 → ratio 0.5 → 100.5×150 → 100×150
        assert_eq!(
            fit_size(Size::new(201, 300), Size::new(150, 150)),
            Ok(Size::new(100, 150))
        );
    }

    #[test]
    fn sliver_keeps_one_pixel() {
        assert_eq!(
            fit_size(Size::new(10_000, 1), Size::new(100, 100)),
            Ok(Size::new(100, 1))
        );
    }

    #[test]
    fn zero_source_errors() {
        assert_eq!(
            fit_size(Size::new(0, 10), Size::new(100, 100)),
            Err(LayoutError::ZeroSourceDimension)
        );
    }

    // ── scale ───────────────────────────────────────────────────────────

    #[test]
    fn scale_preserves_order_and_length() {
        let input = tiles(&[(1000, 1000), (400, 800), (1600, 900), (50, 50)]);
        let page = PageSpec::A4_LANDSCAPE;
        let shape = GridShape::for_count(input.len()).unwrap();
        let out = scale(&input, shape, &page).unwrap();
        assert_eq!(out.len(), input.len());
        let ids: Vec<usize> = out.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn scaled_images_fit_cell_and_keep_aspect() {
        let sources = [
            (1000, 1000),
            (400, 800),
            (1600, 900),
            (50, 50),
            (3000, 17),
            (17, 3000),
            (1234, 987),
        ];
        let page = PageSpec::A4_LANDSCAPE;
        for n in 1..=sources.len() {
            let input = tiles(&sources[..n]);
            let shape = GridShape::for_count(n).unwrap();
            let cell = page.cell_size(shape).unwrap();
            let out = scale(&input, shape, &page).unwrap();
            for (src, dst) in input.iter().zip(&out) {
                let Size { width: w, height: h } = dst.size;
                assert!(w <= cell.width && h <= cell.height, "{dst:?} overflows {cell:?}");
                // One side touches the cell bound (within flooring).
                assert!(
                    w + 1 >= cell.width || h + 1 >= cell.height,
                    "{src:?} → {dst:?} does not fill {cell:?}"
                );
                // Aspect preserved within one pixel of flooring on each side:
                // |w·sh − h·sw| < max(sw, sh).
                let Size { width: sw, height: sh } = src.size;
                let cross = (w as i64 * sh as i64 - h as i64 * sw as i64).abs();
                assert!(cross < sw.max(sh) as i64, "{src:?} → {dst:?}");
            }
        }
    }

    #[test]
    fn rescaling_is_near_idempotent() {
        let page = PageSpec::A4_LANDSCAPE;
        let input = tiles(&[(1000, 1000), (400, 800), (1600, 900), (1234, 987)]);
        let shape = GridShape::for_count(input.len()).unwrap();
        let once = scale(&input, shape, &page).unwrap();
        let twice = scale(&once, shape, &page).unwrap();
        for (a, b) in once.iter().zip(&twice) {
            assert!(a.size.width.abs_diff(b.size.width) <= 1, "{a:?} vs {b:?}");
            assert!(a.size.height.abs_diff(b.size.height) <= 1, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn scale_rejects_degenerate_page() {
        let page = PageSpec::new(100, 100).with_margins(50, 0);
        let input = tiles(&[(10, 10)]);
        assert!(matches!(
            scale(&input, GridShape::new(1, 1), &page),
            Err(LayoutError::DegenerateCell { .. })
        ));
    }

    #[test]
    fn scaled_sizes_matches_scale() {
        let page = PageSpec::A4_LANDSCAPE;
        let input = tiles(&[(1000, 1000), (400, 800), (1600, 900)]);
        let shape = GridShape::for_count(3).unwrap();
        let via_rasters: Vec<Size> = scale(&input, shape, &page)
            .unwrap()
            .iter()
            .map(|t| t.size)
            .collect();
        let sizes: Vec<Size> = input.iter().map(|t| t.size).collect();
        assert_eq!(scaled_sizes(&sizes, shape, &page).unwrap(), via_rasters);
    }
}
