//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting around asset loads and generated file writes
//! - Interactive progress bars using indicatif
//! - Verbose per-file lines and silent mode
//! - Listing configured assets ([`display`])
//!
//! All progress reporting goes through the ProgressReporter trait, so the
//! pipeline never decides how (or whether) it is shown.

pub mod display;

use std::path::Path;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::AssetEntry;

/// Progress reporter trait for the embed pipeline
///
/// Hooks fire in pipeline order for each entry: `start_entry`, `loaded`,
/// `written` once per generated file, then `entry_done`.
pub trait ProgressReporter {
    /// An entry is about to be processed, reading its asset from `input`
    fn start_entry(&mut self, entry: &AssetEntry, input: &Path, current: usize, total: usize);

    /// Asset bytes were read from `path`
    fn loaded(&mut self, path: &Path, len: usize);

    /// A generated file was written to `path`
    fn written(&mut self, path: &Path);

    /// The current entry completed
    fn entry_done(&mut self);

    /// All entries processed
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Pick a reporter for the global `--verbose`/`--quiet` flags
pub fn reporter_for(verbose: bool, quiet: bool, total: usize) -> Box<dyn ProgressReporter> {
    if quiet {
        Box::new(SilentProgressReporter)
    } else if verbose {
        Box::new(VerboseProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new(total as u64))
    }
}

/// Interactive progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    pb: ProgressBar,
}

impl InteractiveProgressReporter {
    /// Create a new interactive progress reporter with total entry count
    pub fn new(total: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(total);
        pb.set_style(style);

        Self { pb }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_entry(&mut self, entry: &AssetEntry, _input: &Path, current: usize, total: usize) {
        self.pb
            .set_message(format!("({}/{}) {}", current, total, entry.stem));
    }

    fn loaded(&mut self, _path: &Path, _len: usize) {}

    fn written(&mut self, path: &Path) {
        if let Some(name) = path.file_name() {
            self.pb.set_message(name.to_string_lossy().into_owned());
        }
    }

    fn entry_done(&mut self) {
        self.pb.inc(1);
    }

    fn finish(&mut self) {
        self.pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.pb.abandon();
    }
}

/// Verbose reporter printing one line per file touched
#[derive(Default)]
pub struct VerboseProgressReporter;

impl ProgressReporter for VerboseProgressReporter {
    fn start_entry(&mut self, _entry: &AssetEntry, input: &Path, _current: usize, _total: usize) {
        println!(
            "{} {}",
            Style::new().bold().cyan().apply_to("Processing"),
            input.display()
        );
    }

    fn loaded(&mut self, _path: &Path, len: usize) {
        println!("  {len} bytes");
    }

    fn written(&mut self, path: &Path) {
        println!(
            "{} {}",
            Style::new().bold().green().apply_to("Written"),
            path.display()
        );
    }

    fn entry_done(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Silent progress reporter
///
/// No-op implementation used with `--quiet`.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_entry(
        &mut self,
        _entry: &AssetEntry,
        _input: &Path,
        _current: usize,
        _total: usize,
    ) {
    }

    fn loaded(&mut self, _path: &Path, _len: usize) {}

    fn written(&mut self, _path: &Path) {}

    fn entry_done(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
