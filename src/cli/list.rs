use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List built-in assets:\n    embedgen list\n\n\
                  List assets from a manifest:\n    embedgen -m embed.yaml list\n\n\
                  Machine-readable output:\n    embedgen list --json")]
pub struct ListArgs {
    /// Print entries and derived paths as JSON
    #[arg(long)]
    pub json: bool,
}
