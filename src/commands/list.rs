//! List command implementation
//!
//! This command lists every configured asset with the symbol it is exported
//! under and the paths it is read from and written to.

use super::helpers;
use crate::cli::{GlobalOptions, ListArgs};
use crate::error::Result;
use crate::ui::display;

/// Run list command
pub fn run(globals: &GlobalOptions, args: ListArgs) -> Result<()> {
    let config = helpers::load_config(globals)?;
    let embedder = helpers::embedder(globals, &config)?;

    let listed = display::listed_assets(&embedder);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
    } else {
        display::print_assets(&listed);
    }

    Ok(())
}
