//! Folder-to-page orchestration.
//!
//! Each input folder becomes one page: its PNG files are decoded in file
//! name order, laid out on a fresh canvas, and written as
//! `Result<n>.tiff`, where `n` is the folder's 1-based position in the
//! input list. Folders are processed one at a time; the first error aborts
//! the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use tracing::{debug, info, warn};

use crate::codec::{ComposeError, blank_canvas, load_png, write_tiff};
use crate::grid::GridLayout;
use crate::page::{PageSpec, Size};
use crate::place::place;
use crate::scale::scale;
use crate::shape::GridShape;

/// File name suffix that selects input images (case-sensitive).
pub const PNG_SUFFIX: &str = ".png";

/// Output file name for the `index`-th folder (1-based).
pub fn output_file_name(index: usize) -> String {
    format!("Result{index}.tiff")
}

/// List the PNG files directly inside `dir`, sorted by file name.
///
/// Not recursive. Only files whose name ends in `.png` are kept; symbolic
/// links are followed, so a link to a PNG file counts and a link to a
/// directory does not.
pub fn find_pngs(dir: &Path) -> Result<Vec<PathBuf>, ComposeError> {
    let read_err = |source| ComposeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(PNG_SUFFIX) {
            continue;
        }
        let path = entry.path();
        if !fs::metadata(&path).map_err(read_err)?.is_file() {
            continue;
        }
        found.push((name, path));
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Lay out already-decoded images on a new page canvas.
///
/// Returns `None` for an empty image list.
pub fn compose_images(
    images: &[DynamicImage],
    page: &PageSpec,
) -> Result<Option<RgbImage>, ComposeError> {
    if images.is_empty() {
        return Ok(None);
    }
    let shape = GridShape::for_count(images.len())?;
    page.validate_for(shape)?;
    debug!(count = images.len(), rows = shape.rows, cols = shape.cols, "grid shape");

    let scaled = scale(images, shape, page)?;
    let mut canvas = blank_canvas(page);
    let placed = place(&mut canvas, &scaled, shape, page)?;
    for p in &placed {
        debug!(
            index = p.index,
            x = p.x,
            y = p.y,
            width = p.size.width,
            height = p.size.height,
            "placed"
        );
    }
    Ok(Some(canvas))
}

/// Turns folders of PNG files into one TIFF page each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composer {
    /// Page geometry shared by every output.
    pub page: PageSpec,
    /// Directory the `Result<n>.tiff` files are written to.
    pub output_dir: PathBuf,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            page: PageSpec::A4_LANDSCAPE,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Composer {
    /// A composer for `page` writing into `output_dir`.
    pub fn new(page: PageSpec, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            page,
            output_dir: output_dir.into(),
        }
    }

    /// Decode every PNG in `dir` and compose them into one page.
    ///
    /// Returns `None` when the folder holds no PNG files.
    pub fn compose_folder(&self, dir: &Path) -> Result<Option<RgbImage>, ComposeError> {
        let files = find_pngs(dir)?;
        if files.is_empty() {
            return Ok(None);
        }
        let mut images = Vec::with_capacity(files.len());
        for path in &files {
            let img = load_png(path)?;
            debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded");
            images.push(img);
        }
        compose_images(&images, &self.page)
    }

    /// Process every folder in order and return the paths written.
    ///
    /// Folders without PNG files are skipped but still use up their
    /// output index.
    pub fn run<P: AsRef<Path>>(&self, folders: &[P]) -> Result<Vec<PathBuf>, ComposeError> {
        if folders.is_empty() {
            return Err(ComposeError::NoInputFolders);
        }
        let mut written = Vec::new();
        for (i, folder) in folders.iter().enumerate() {
            let folder = folder.as_ref();
            let index = i + 1;
            let Some(canvas) = self.compose_folder(folder)? else {
                warn!(folder = %folder.display(), "no PNG files, skipping");
                continue;
            };
            let out = self.output_dir.join(output_file_name(index));
            write_tiff(&canvas, &out)?;
            info!(folder = %folder.display(), output = %out.display(), "page written");
            written.push(out);
        }
        Ok(written)
    }
}

/// Compute the page layout for `dir` from image headers alone.
///
/// Returns `None` when the folder holds no PNG files.
pub fn plan_folder(dir: &Path, page: &PageSpec) -> Result<Option<GridLayout>, ComposeError> {
    let files = find_pngs(dir)?;
    if files.is_empty() {
        return Ok(None);
    }
    let mut sources = Vec::with_capacity(files.len());
    for path in &files {
        let (w, h) = image::image_dimensions(path).map_err(|source| ComposeError::Decode {
            path: path.clone(),
            source,
        })?;
        sources.push(Size::new(w, h));
    }
    Ok(Some(GridLayout::compute(&sources, page)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn output_names_are_one_based() {
        assert_eq!(output_file_name(1), "Result1.tiff");
        assert_eq!(output_file_name(12), "Result12.tiff");
    }

    #[test]
    fn find_pngs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.png", "10.png", "2.png", "notes.txt", "upper.PNG", "x.png.bak"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("sub.png")).unwrap();
        touch(&dir.path().join("sub.png"), "nested.png");

        let names: Vec<String> = find_pngs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["10.png", "2.png", "a.png", "b.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn find_pngs_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let root = tempfile::tempdir().unwrap();
        let store = root.path().join("store");
        let dir = root.path().join("in");
        fs::create_dir(&store).unwrap();
        fs::create_dir(&dir).unwrap();
        fs::create_dir(store.join("nested")).unwrap();
        touch(&store, "real.png");
        touch(&dir, "a.png");
        symlink(store.join("real.png"), dir.join("b.png")).unwrap();
        symlink(store.join("nested"), dir.join("c.png")).unwrap();

        let found = find_pngs(&dir).unwrap();
        assert_eq!(found, [dir.join("a.png"), dir.join("b.png")]);
    }

    #[test]
    fn find_pngs_missing_folder_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = find_pngs(&missing).unwrap_err();
        assert!(matches!(err, ComposeError::ReadDir { .. }));
    }

    #[test]
    fn compose_images_empty_is_none() {
        assert!(
            compose_images(&[], &PageSpec::A4_LANDSCAPE)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn compose_images_rejects_degenerate_page() {
        let page = PageSpec::new(100, 100).with_margins(50, 50);
        let images = vec![DynamicImage::new_rgb8(10, 10)];
        assert!(matches!(
            compose_images(&images, &page),
            Err(ComposeError::Layout(crate::LayoutError::DegenerateCell { .. }))
        ));
    }

    #[test]
    fn run_rejects_empty_folder_list() {
        let out = tempfile::tempdir().unwrap();
        let composer = Composer::new(PageSpec::A4_LANDSCAPE, out.path());
        let folders: [&Path; 0] = [];
        assert!(matches!(
            composer.run(&folders),
            Err(ComposeError::NoInputFolders)
        ));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn plan_folder_reads_headers() {
        let dir = tempfile::tempdir().unwrap();
        DynamicImage::new_rgb8(30, 40)
            .save(dir.path().join("a.png"))
            .unwrap();
        DynamicImage::new_rgba8(50, 60)
            .save(dir.path().join("b.png"))
            .unwrap();
        let layout = plan_folder(dir.path(), &PageSpec::A4_LANDSCAPE)
            .unwrap()
            .unwrap();
        assert_eq!(layout.shape, GridShape::new(1, 2));
        let sources: Vec<Size> = layout.tiles.iter().map(|t| t.source).collect();
        assert_eq!(sources, [Size::new(30, 40), Size::new(50, 60)]);
    }

    #[test]
    fn plan_folder_empty_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(
            plan_folder(dir.path(), &PageSpec::A4_LANDSCAPE)
                .unwrap()
                .is_none()
        );
    }
}
