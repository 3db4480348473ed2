//! Path utilities for detecting image files by extension.

use std::path::Path;

/// Image file extensions the decoder is built to handle.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a path has an image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use iconforge_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("logo.PNG")));
/// assert!(is_image_file(Path::new("assets/photo.jpg")));
/// assert!(!is_image_file(Path::new("notes.txt")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path has a `.png` extension.
pub fn is_png_file(path: &Path) -> bool {
    extension_lowercase(path).as_deref() == Some("png")
}
