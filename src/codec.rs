//! `image`-crate backend: PNG decode, RGB canvas, deflate TIFF encode.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use tiff::encoder::compression::{Deflate, DeflateLevel};
use tiff::encoder::{TiffEncoder, colortype};

use crate::error::LayoutError;
use crate::page::{PageSpec, Size};
use crate::raster::{Raster, Surface};

/// Opaque white, the canvas background.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Errors from reading folders, decoding, and writing pages.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The folder list was empty; nothing was read or written.
    #[error("no input folders given; expected one or more folders of PNG files")]
    NoInputFolders,

    /// Listing a folder or inspecting one of its entries failed.
    #[error("cannot read folder {path:?}: {source}")]
    ReadDir {
        /// Folder being listed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be opened or decoded.
    #[error("cannot decode {path:?}: {source}")]
    Decode {
        /// Input image path.
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be created or flushed.
    #[error("cannot create {path:?}: {source}")]
    Create {
        /// Output page path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TIFF encoding of the page failed.
    #[error("cannot write {path:?}: {source}")]
    Encode {
        /// Output page path.
        path: PathBuf,
        #[source]
        source: tiff::TiffError,
    },

    /// The page geometry has no valid layout.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl Raster for DynamicImage {
    fn dimensions(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    fn resize_nearest(&self, size: Size) -> Self {
        self.resize_exact(size.width, size.height, FilterType::Nearest)
    }
}

impl Surface<DynamicImage> for RgbImage {
    fn dimensions(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Alpha is discarded by the RGB conversion, not composited.
    fn paste(&mut self, image: &DynamicImage, x: i64, y: i64) {
        imageops::replace(self, &image.to_rgb8(), x, y);
    }
}

/// A page-sized opaque white RGB canvas.
pub fn blank_canvas(page: &PageSpec) -> RgbImage {
    RgbImage::from_pixel(page.width, page.height, WHITE)
}

/// Decode one PNG file. The file handle is closed before returning.
pub fn load_png(path: &Path) -> Result<DynamicImage, ComposeError> {
    let decode = || -> Result<DynamicImage, image::ImageError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        reader.decode()
    };
    decode().map_err(|source| ComposeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `canvas` as a deflate-compressed RGB TIFF.
pub fn write_tiff(canvas: &RgbImage, path: &Path) -> Result<(), ComposeError> {
    let encode_err = |source| ComposeError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let create_err = |source| ComposeError::Create {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(create_err)?);
    {
        let mut encoder = TiffEncoder::new(&mut writer).map_err(encode_err)?;
        encoder
            .write_image_with_compression::<colortype::RGB8, _>(
                canvas.width(),
                canvas.height(),
                Deflate::with_level(DeflateLevel::Balanced),
                canvas.as_raw(),
            )
            .map_err(encode_err)?;
    }
    writer.flush().map_err(create_err)?;
    Ok(())
}
