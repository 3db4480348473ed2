//! Core type definitions for the icon size table.
//!
//! A density table is an ordered list of [`SizeEntry`] rows. Each row pairs a
//! density label, which doubles as the output subdirectory name, with the
//! edge length of the square icon written there.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// Edge length of a square icon in pixels. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IconSize(u32);

impl IconSize {
    /// Create a new `IconSize`, returning `None` for zero.
    pub const fn new(px: u32) -> Option<Self> {
        if px == 0 {
            None
        } else {
            Some(Self(px))
        }
    }

    /// Returns the size in pixels.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for IconSize {
    type Error = Error;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        Self::new(px).ok_or_else(|| Error::invalid_config("icon size must be greater than zero"))
    }
}

impl From<IconSize> for u32 {
    fn from(size: IconSize) -> Self {
        size.0
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// One row of the density table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    /// Density label, e.g. `mipmap-xhdpi`. Used as the output subdirectory.
    pub label: String,
    /// Square edge length of the generated icon.
    pub size: IconSize,
}

impl SizeEntry {
    pub fn new(label: impl Into<String>, size: IconSize) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_size_rejects_zero() {
        assert!(IconSize::new(0).is_none());
        assert!(IconSize::try_from(0).is_err());
        assert_eq!(IconSize::new(48).map(IconSize::get), Some(48));
    }

    #[test]
    fn test_icon_size_display() {
        let size = IconSize::new(144).unwrap();
        assert_eq!(size.to_string(), "144x144");
    }

    #[test]
    fn test_size_entry_deserialize() {
        let entry: SizeEntry = toml::from_str("label = \"mipmap-hdpi\"\nsize = 72").unwrap();
        assert_eq!(entry.label, "mipmap-hdpi");
        assert_eq!(entry.size.get(), 72);
    }

    #[test]
    fn test_size_entry_deserialize_zero_fails() {
        let result: Result<SizeEntry, _> = toml::from_str("label = \"mipmap-hdpi\"\nsize = 0");
        assert!(result.is_err());
    }
}
