//! Iconforge-Common: Shared types, errors, and utilities.
//!
//! This crate provides common functionality used across iconforge:
//!
//! - **Core Types**: [`IconSize`] and [`SizeEntry`], the rows of a density table
//! - **Path Utilities**: Functions to detect image files by extension
//! - **Error Handling**: The typed [`Error`] enum and [`Result`] alias
//!
//! # Examples
//!
//! ```
//! use iconforge_common::{IconSize, SizeEntry};
//! use iconforge_common::paths::is_image_file;
//! use std::path::Path;
//!
//! let entry = SizeEntry::new("mipmap-mdpi", IconSize::new(48).unwrap());
//! assert_eq!(entry.size.get(), 48);
//!
//! assert!(is_image_file(Path::new("assets/logo.png")));
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
