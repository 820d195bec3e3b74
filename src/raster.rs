//! Pixel capabilities the layout stages need from an image backend.
//!
//! The layout core never decodes, encodes, or reads pixels. It asks a
//! [`Raster`] for its dimensions and a resized copy, and asks a [`Surface`]
//! to paste a raster at an offset. The `codec` feature implements both for
//! the `image` crate; tests implement them with plain structs.

use crate::page::Size;

/// An in-memory image the layout can measure and resize.
pub trait Raster: Sized {
    /// Current dimensions.
    fn dimensions(&self) -> Size;

    /// A copy resized to exactly `size` with nearest-neighbour sampling.
    fn resize_nearest(&self, size: Size) -> Self;
}

/// A destination canvas that rasters of type `R` can be pasted onto.
pub trait Surface<R> {
    /// Canvas dimensions.
    fn dimensions(&self) -> Size;

    /// Copy `image` so its top-left corner lands at `(x, y)`.
    ///
    /// Offsets may be negative or run past the far edge; pixels that fall
    /// outside the canvas are dropped.
    fn paste(&mut self, image: &R, x: i64, y: i64);
}
