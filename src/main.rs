//! `zengrid`: lay out each folder of PNG images on one TIFF page.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zengrid::{Composer, PageSpec};

const A4: PageSpec = PageSpec::A4_LANDSCAPE;

/// Arrange every folder's PNG files into a grid and write one
/// `Result<n>.tiff` page per folder.
#[derive(Debug, Parser)]
#[command(name = "zengrid", version, about)]
struct Args {
    /// Folders of PNG files, one output page each.
    folders: Vec<PathBuf>,

    /// Directory for the `Result<n>.tiff` files.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Page width in pixels.
    #[arg(long, default_value_t = A4.width)]
    page_width: u32,

    /// Page height in pixels.
    #[arg(long, default_value_t = A4.height)]
    page_height: u32,

    /// Minimum left/right margin in pixels.
    #[arg(long, default_value_t = A4.margin_lr)]
    margin_lr: u32,

    /// Minimum top/bottom margin in pixels.
    #[arg(long, default_value_t = A4.margin_tb)]
    margin_tb: u32,

    /// Gap between neighbouring images in pixels.
    #[arg(long, default_value_t = A4.margin_between)]
    margin_between: u32,

    /// Also write a `Result<n>.svg` layout preview per folder into this directory.
    #[cfg(feature = "svg")]
    #[arg(long)]
    layout_svg: Option<PathBuf>,

    /// Log per-image decode and placement details.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn page(&self) -> PageSpec {
        PageSpec::new(self.page_width, self.page_height)
            .with_margins(self.margin_lr, self.margin_tb)
            .with_margin_between(self.margin_between)
    }
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "zengrid=debug" } else { "zengrid=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "svg")]
fn write_layout_svgs(args: &Args, page: &PageSpec) -> Result<()> {
    let Some(dir) = &args.layout_svg else {
        return Ok(());
    };
    for (i, folder) in args.folders.iter().enumerate() {
        let Some(layout) = zengrid::plan_folder(folder, page)? else {
            continue;
        };
        let path = dir.join(format!("Result{}.svg", i + 1));
        std::fs::write(&path, zengrid::svg::render_grid_svg(&layout))
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(output = %path.display(), "layout preview written");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let page = args.page();
    tracing::debug!(?page, "page spec");

    #[cfg(feature = "svg")]
    write_layout_svgs(&args, &page)?;

    let composer = Composer::new(page, &args.output_dir);
    let written = composer
        .run(&args.folders)
        .context("composing pages failed")?;
    tracing::info!(pages = written.len(), "done");
    Ok(())
}
