use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Reporter;
use crate::generator::{GeneratedIcon, GenerationReport};

/// Prints human-readable progress lines.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    manual_steps: Vec<String>,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout(manual_steps: Vec<String>) -> Self {
        Self::new(io::stdout(), manual_steps)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, manual_steps: Vec<String>) -> Self {
        Self { out, manual_steps }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl AsRef<str>) {
        // Console output is best effort; a closed pipe must not abort the run.
        if let Err(e) = writeln!(self.out, "{}", text.as_ref()) {
            tracing::debug!("Failed to write report line: {}", e);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn source_found(&mut self, path: &Path) {
        tracing::info!("Using source image {:?}", path);
        self.line(format!("✅ Found logo at: {}", path.display()));
    }

    fn source_missing(&mut self, candidates: &[PathBuf]) {
        tracing::error!("No source image among {} candidates", candidates.len());
        self.line("❌ Logo not found!");
        self.line("Please place the logo in one of these locations:");
        for candidate in candidates {
            self.line(format!("  - {}", candidate.display()));
        }
    }

    fn original_size(&mut self, width: u32, height: u32) {
        self.line(format!("📦 Original size: ({}, {})", width, height));
    }

    fn icon_written(&mut self, icon: &GeneratedIcon) {
        self.line(format!(
            "✅ Created {} ({}): {}",
            icon.label,
            icon.size,
            icon.path.display()
        ));
    }

    fn finished(&mut self, report: &GenerationReport) {
        tracing::info!("Generated {} icons", report.icons.len());
        self.line("");
        self.line("✅ All Android icons created successfully!");

        if !self.manual_steps.is_empty() {
            self.line("");
            self.line("📱 For iOS, you need to manually update:");
            let steps: Vec<String> = self
                .manual_steps
                .iter()
                .map(|step| format!("  {}", step))
                .collect();
            for step in steps {
                self.line(step);
            }
        }
    }
}
