//! Grid layout of same-purpose images onto a fixed-size page canvas.
//!
//! The geometry core is pure and `no_std` compatible: pick a grid shape for
//! the image count, fit every image into a uniform cell, center the grid and
//! walk it row by row. Pixels are only touched through the [`Raster`] and
//! [`Surface`] capabilities, which the `codec` feature implements for the
//! `image` crate.
//!
//! # Modules
//!
//! - [`shape`]: image count → rows × columns
//! - [`page`]: page size, margins, cell bounds
//! - [`scale`]: aspect-preserving fit into the cell
//! - [`place`]: centering margins and row-major placement
//! - [`grid`]: the whole chain on dimensions only
//! - `codec` / `compose`: PNG in, deflate TIFF out, one page per folder
//! - `svg`: layout visualization

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod page;
pub mod place;
pub mod raster;
pub mod scale;
pub mod shape;

#[cfg(feature = "codec")]
pub mod codec;
#[cfg(feature = "codec")]
pub mod compose;
#[cfg(feature = "svg")]
pub mod svg;

pub use error::LayoutError;
pub use grid::{GridLayout, Tile};
pub use page::{Margins, PageSpec, Size};
pub use place::{Placement, calculate_margins, place, placements};
pub use raster::{Raster, Surface};
pub use scale::scale;
pub use shape::{GridShape, MAX_COLUMNS};

#[cfg(feature = "codec")]
pub use codec::{ComposeError, blank_canvas, load_png, write_tiff};
#[cfg(feature = "codec")]
pub use compose::{Composer, compose_images, find_pngs, output_file_name, plan_folder};
