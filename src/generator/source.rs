use std::path::{Path, PathBuf};

use iconforge_common::{Error, Result};
use image::{ImageReader, RgbaImage};

/// Pick the first candidate that exists on disk.
pub fn resolve_source(candidates: &[PathBuf]) -> Result<PathBuf> {
    for candidate in candidates {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
        tracing::debug!("Source candidate not present: {:?}", candidate);
    }

    Err(Error::SourceNotFound {
        candidates: candidates.to_vec(),
    })
}

/// Decode the image at `path` and normalize it to RGBA8.
///
/// The format is sniffed from the file contents, falling back to the
/// extension, so a PNG saved with a `.jpg` name still loads.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Decoded {:?} as {:?} ({}x{})",
        path,
        img.color(),
        img.width(),
        img.height()
    );

    Ok(img.into_rgba8())
}
