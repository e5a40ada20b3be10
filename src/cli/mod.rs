//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - check: Check command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod generate;
pub mod list;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use list::ListArgs;

/// embedgen - embed binary assets as C arrays
///
/// Turns each configured asset into `<stem>.c` holding the byte array and
/// `<stem>.h` holding its extern declaration.
#[derive(Parser, Debug)]
#[command(
    name = "embedgen",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Embed binary assets (fonts, images, ...) as C byte arrays",
    long_about = "embedgen converts binary assets into a C array definition and a matching \
                  extern \"C\" declaration, so a program can link the bytes in instead of \
                  reading the file at runtime. Runs 'generate' when no command is given.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  embedgen                          \x1b[90m# Generate built-in assets in current directory\x1b[0m\n   \
                  embedgen -d assets/fonts generate \x1b[90m# Generate from another directory\x1b[0m\n   \
                  embedgen -m embed.yaml check      \x1b[90m# Verify generated files are current\x1b[0m\n   \
                  embedgen list                     \x1b[90m# Show configured assets\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Directory holding the assets and generated files (defaults to current directory)
    #[arg(long, short = 'd', global = true)]
    pub dir: Option<PathBuf>,

    /// YAML manifest listing assets (defaults to the built-in list)
    #[arg(long, short = 'm', global = true)]
    pub manifest: Option<PathBuf>,

    /// Print each file as it is read and written
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress and summary output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate source and header files for every asset
    Generate(GenerateArgs),

    /// Check that generated files match the assets, without writing
    Check(CheckArgs),

    /// List configured assets and their paths
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub dir: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl Cli {
    /// Split the parsed CLI into global options and the command to run
    pub fn into_parts(self) -> (GlobalOptions, Commands) {
        let globals = GlobalOptions {
            dir: self.dir,
            manifest: self.manifest,
            verbose: self.verbose,
            quiet: self.quiet,
        };
        let command = self
            .command
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()));
        (globals, command)
    }
}
