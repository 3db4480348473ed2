mod types;

pub use types::*;

use anyhow::{Context, Result};
use iconforge_common::paths::{is_image_file, is_png_file};
use iconforge_common::Error;
use std::collections::HashSet;
use std::path::Path;

/// Config files picked up from the working directory when none is given.
const DEFAULT_CONFIG_PATHS: &[&str] = &["./iconforge.toml", "./.iconforge.toml"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: GeneratorConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}

/// Load config from default locations or return the built-in Android layout
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<GeneratorConfig> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    for path_str in DEFAULT_CONFIG_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(GeneratorConfig::default())
}

/// Validate configuration
pub fn validate_config(config: &GeneratorConfig) -> iconforge_common::Result<()> {
    if config.candidates.is_empty() {
        return Err(Error::invalid_config("at least one source candidate is required"));
    }

    if config.sizes.is_empty() {
        return Err(Error::invalid_config("at least one size entry is required"));
    }

    if config.output_file_name.is_empty() {
        return Err(Error::invalid_config("output file name cannot be empty"));
    }

    if !is_png_file(Path::new(&config.output_file_name)) {
        return Err(Error::invalid_config(format!(
            "output file name '{}' must end in .png",
            config.output_file_name
        )));
    }

    let mut seen = HashSet::new();
    for entry in &config.sizes {
        if entry.label.is_empty() {
            return Err(Error::invalid_config("size entry label cannot be empty"));
        }
        if entry.label.contains(['/', '\\']) || entry.label == "." || entry.label == ".." {
            return Err(Error::invalid_config(format!(
                "size entry label '{}' must be a single directory name",
                entry.label
            )));
        }
        if !seen.insert(entry.label.as_str()) {
            return Err(Error::invalid_config(format!(
                "duplicate size entry label '{}'",
                entry.label
            )));
        }
    }

    for candidate in &config.candidates {
        if !is_image_file(candidate) {
            tracing::warn!("Source candidate has no image extension: {:?}", candidate);
        }
    }

    Ok(())
}
