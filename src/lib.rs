//! Iconforge - Android launcher icon generator
//!
//! This library crate exposes the generator, its configuration and the
//! reporting interface for integration testing.

pub mod config;
pub mod generator;
pub mod report;
