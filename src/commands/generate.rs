//! Generate command implementation
//!
//! Runs the embed pipeline over every configured asset and prints a summary.

use console::Style;

use super::helpers;
use crate::cli::{GenerateArgs, GlobalOptions};
use crate::error::Result;
use crate::ui;

/// Run generate command
pub fn run(globals: &GlobalOptions, _args: GenerateArgs) -> Result<()> {
    let config = helpers::load_config(globals)?;
    let embedder = helpers::embedder(globals, &config)?;

    let mut reporter = ui::reporter_for(
        globals.verbose,
        globals.quiet,
        embedder.list_entries().len(),
    );
    let summary = embedder.run(reporter.as_mut())?;

    if !globals.quiet {
        println!(
            "{} {} asset(s), {} bytes",
            Style::new().bold().green().apply_to("Embedded"),
            summary.entries,
            summary.bytes
        );
    }

    Ok(())
}
