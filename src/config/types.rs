use iconforge_common::{IconSize, SizeEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the generator needs for one run.
///
/// The defaults are the Android launcher icon layout for the Kagri app; a
/// TOML file may override any field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Source image candidates, checked in order. The first that exists wins.
    pub candidates: Vec<PathBuf>,

    /// Density table, processed in order.
    pub sizes: Vec<SizeEntry>,

    /// Directory holding one subdirectory per density label.
    pub output_base: PathBuf,

    /// File name written inside each density directory.
    pub output_file_name: String,

    /// Reminder lines printed after a successful run for platforms this
    /// tool does not cover.
    pub manual_steps: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            sizes: default_sizes(),
            output_base: PathBuf::from("android/app/src/main/res"),
            output_file_name: "ic_launcher.png".to_string(),
            manual_steps: vec![
                "ios/Runner/Assets.xcassets/AppIcon.appiconset/".to_string(),
                "(Use XCode or App Icon Maker tool)".to_string(),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Destination path for one density label.
    pub fn output_path(&self, label: &str) -> PathBuf {
        self.output_base.join(label).join(&self.output_file_name)
    }
}

fn default_candidates() -> Vec<PathBuf> {
    [
        "assets/475878905_122213763782224521_6121706232536862414_n.jpg",
        "assets/kagri_logo.png",
        "assets/kagri_logo.jpg",
        "./kagri_logo.png",
        "../kagri_logo.png",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

const DEFAULT_SIZES: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

fn default_sizes() -> Vec<SizeEntry> {
    DEFAULT_SIZES
        .iter()
        .filter_map(|&(label, px)| IconSize::new(px).map(|size| SizeEntry::new(label, size)))
        .collect()
}
