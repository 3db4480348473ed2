//! Progress and diagnostic reporting.
//!
//! The generator never prints directly. It hands events to a [`Reporter`],
//! leaving message formatting to the caller.

mod console;

pub use console::ConsoleReporter;

use std::path::{Path, PathBuf};

use crate::generator::{GeneratedIcon, GenerationReport};

/// Receiver for generator progress events.
///
/// All methods default to no-ops so implementations only override what they
/// care about.
pub trait Reporter {
    /// A source candidate exists and will be used.
    fn source_found(&mut self, _path: &Path) {}

    /// No candidate exists. `candidates` is the full list that was checked.
    fn source_missing(&mut self, _candidates: &[PathBuf]) {}

    /// Dimensions of the decoded source before resizing.
    fn original_size(&mut self, _width: u32, _height: u32) {}

    /// One icon has been written.
    fn icon_written(&mut self, _icon: &GeneratedIcon) {}

    /// Every icon in the table has been written.
    fn finished(&mut self, _report: &GenerationReport) {}
}

/// Reporter that discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}
