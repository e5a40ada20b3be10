//! Asset embedder pipeline
//!
//! For each configured asset, in order:
//! 1. Read the asset bytes
//! 2. Render the array definition and the matching declaration
//! 3. Write the source file, then the header file
//!
//! The run is fail-fast: the first error stops the pipeline and later
//! entries are never touched. Files already written stay on disk.

pub mod paths;

use std::path::{Path, PathBuf};

pub use paths::AssetPaths;

use crate::config::{AssetEntry, EmbedConfig};
use crate::error::{Result, fs};
use crate::render::{self, AssetBytes, GeneratedHeader, GeneratedSource};
use crate::ui::ProgressReporter;

/// Totals for a completed `run`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub bytes: usize,
}

/// Result of comparing rendered output with the files on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub entries: usize,
    /// Generated files that are missing or differ, in pipeline order
    pub stale: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Maps each configured asset to its generated source and header
pub struct AssetEmbedder<'a> {
    config: &'a EmbedConfig,
    base_dir: PathBuf,
}

impl<'a> AssetEmbedder<'a> {
    pub fn new(config: &'a EmbedConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Configured assets, in processing order
    pub fn list_entries(&self) -> &'a [AssetEntry] {
        &self.config.assets
    }

    /// Input and output paths for `entry`
    pub fn paths(&self, entry: &AssetEntry) -> AssetPaths {
        AssetPaths::for_entry(&self.base_dir, entry, &self.config.extensions)
    }

    /// Read the whole asset file for `entry`
    pub fn load_bytes(&self, entry: &AssetEntry) -> Result<AssetBytes> {
        let path = self.paths(entry).input;
        let bytes = std::fs::read(&path)
            .map_err(|e| fs::input_read_failed(path.display().to_string(), e.to_string()))?;
        Ok(AssetBytes::new(bytes))
    }

    /// Write the source file, then the header file
    ///
    /// A failed header write leaves the already written source in place.
    pub fn write_outputs(
        &self,
        entry: &AssetEntry,
        source: &GeneratedSource,
        header: &GeneratedHeader,
    ) -> Result<AssetPaths> {
        let paths = self.paths(entry);
        write_file(&paths.source, source.as_bytes())?;
        write_file(&paths.header, header.as_bytes())?;
        Ok(paths)
    }

    /// Run the full pipeline over every entry
    pub fn run(&self, reporter: &mut dyn ProgressReporter) -> Result<RunSummary> {
        match self.run_entries(reporter) {
            Ok(summary) => {
                reporter.finish();
                Ok(summary)
            }
            Err(e) => {
                reporter.abandon();
                Err(e)
            }
        }
    }

    fn run_entries(&self, reporter: &mut dyn ProgressReporter) -> Result<RunSummary> {
        let entries = self.list_entries();
        let mut summary = RunSummary::default();

        for (i, entry) in entries.iter().enumerate() {
            let paths = self.paths(entry);
            reporter.start_entry(entry, &paths.input, i + 1, entries.len());

            let bytes = self.load_bytes(entry)?;
            reporter.loaded(&paths.input, bytes.len());

            let source = render::render_source(entry, &bytes);
            let header = render::render_header(entry, &bytes);

            let paths = self.write_outputs(entry, &source, &header)?;
            reporter.written(&paths.source);
            reporter.written(&paths.header);
            reporter.entry_done();

            summary.entries += 1;
            summary.bytes += bytes.len();
        }

        Ok(summary)
    }

    /// Render every entry and compare against the files on disk
    ///
    /// Nothing is written. Unreadable assets still fail the check immediately.
    pub fn check(&self, reporter: &mut dyn ProgressReporter) -> Result<CheckReport> {
        let entries = self.list_entries();
        let mut report = CheckReport::default();

        for (i, entry) in entries.iter().enumerate() {
            let paths = self.paths(entry);
            reporter.start_entry(entry, &paths.input, i + 1, entries.len());

            let bytes = match self.load_bytes(entry) {
                Ok(bytes) => bytes,
                Err(e) => {
                    reporter.abandon();
                    return Err(e);
                }
            };
            reporter.loaded(&paths.input, bytes.len());

            let source = render::render_source(entry, &bytes);
            let header = render::render_header(entry, &bytes);

            for (path, expected) in [
                (paths.source, source.as_bytes()),
                (paths.header, header.as_bytes()),
            ] {
                if !matches_on_disk(&path, expected) {
                    report.stale.push(path);
                }
            }

            reporter.entry_done();
            report.entries += 1;
        }

        reporter.finish();
        Ok(report)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents)
        .map_err(|e| fs::output_write_failed(path.display().to_string(), e.to_string()))
}

// Missing or unreadable files count as stale.
fn matches_on_disk(path: &Path, expected: &[u8]) -> bool {
    std::fs::read(path).is_ok_and(|actual| actual == expected)
}
