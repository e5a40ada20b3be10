//! Check command implementation
//!
//! Renders every asset in memory and fails if any generated file on disk
//! is missing or differs. Nothing is written.

use console::Style;

use super::helpers;
use crate::cli::{CheckArgs, GlobalOptions};
use crate::error::{Result, fs};
use crate::ui;

/// Run check command
pub fn run(globals: &GlobalOptions, _args: CheckArgs) -> Result<()> {
    let config = helpers::load_config(globals)?;
    let embedder = helpers::embedder(globals, &config)?;

    let mut reporter = ui::reporter_for(
        globals.verbose,
        globals.quiet,
        embedder.list_entries().len(),
    );
    let report = embedder.check(reporter.as_mut())?;

    if !report.is_up_to_date() {
        let stale: Vec<_> = report.stale.iter().map(std::path::PathBuf::as_path).collect();
        return Err(fs::outputs_stale(&stale));
    }

    if !globals.quiet {
        println!(
            "{} {} asset(s) up to date",
            Style::new().bold().green().apply_to("OK"),
            report.entries
        );
    }

    Ok(())
}
