//! Launcher icon generation.
//!
//! A run resolves the source image from an ordered candidate list, decodes it
//! once into RGBA8, then writes one square PNG per density table entry. The
//! first failure aborts the run; icons already written stay on disk.

mod source;

pub use source::{load_source, resolve_source};

use std::path::{Path, PathBuf};

use iconforge_common::{Error, IconSize, Result, SizeEntry};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::config::GeneratorConfig;
use crate::report::Reporter;

/// Resampling filter for every icon. Lanczos3 keeps downscaled edges free of
/// aliasing.
const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// An icon written during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub label: String,
    pub size: IconSize,
    pub path: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The candidate that was used as the source.
    pub source: PathBuf,
    /// Source dimensions as `(width, height)`.
    pub original_size: (u32, u32),
    /// Written icons in table order.
    pub icons: Vec<GeneratedIcon>,
}

/// Generate every icon described by `config`.
///
/// # Errors
///
/// * [`Error::SourceNotFound`] if no candidate exists; nothing is written.
/// * [`Error::Read`] / [`Error::Decode`] if the source cannot be loaded.
/// * [`Error::Write`] for the first entry whose icon cannot be written.
///   Entries before it have already been written.
pub fn generate(config: &GeneratorConfig, reporter: &mut dyn Reporter) -> Result<GenerationReport> {
    let source = match resolve_source(&config.candidates) {
        Ok(path) => path,
        Err(e) => {
            reporter.source_missing(&config.candidates);
            return Err(e);
        }
    };
    reporter.source_found(&source);

    let img = load_source(&source)?;
    let original_size = img.dimensions();
    reporter.original_size(original_size.0, original_size.1);

    let mut icons = Vec::with_capacity(config.sizes.len());
    for entry in &config.sizes {
        let path = config.output_path(&entry.label);
        let icon = emit_icon(&img, entry, &path)?;
        reporter.icon_written(&icon);
        icons.push(icon);
    }

    let report = GenerationReport {
        source,
        original_size,
        icons,
    };
    reporter.finished(&report);
    Ok(report)
}

/// Resize `img` to the entry's square size and write it to `path` as PNG.
///
/// The source aspect ratio is not preserved. The parent directory of `path`
/// must already exist; an existing file is overwritten.
pub fn emit_icon(img: &RgbaImage, entry: &SizeEntry, path: &Path) -> Result<GeneratedIcon> {
    let px = entry.size.get();
    tracing::debug!("Resizing to {} for {}", entry.size, entry.label);

    let resized = imageops::resize(img, px, px, RESIZE_FILTER);
    resized
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Write {
            label: entry.label.clone(),
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Wrote {} icon to {:?}", entry.label, path);

    Ok(GeneratedIcon {
        label: entry.label.clone(),
        size: entry.size,
        path: path.to_path_buf(),
    })
}
