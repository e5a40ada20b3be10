use clap::Parser;

/// Arguments for the generate command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Embed built-in assets from the current directory:\n    embedgen generate\n\n\
                  Embed assets in another directory:\n    embedgen -d assets/fonts generate\n\n\
                  Embed assets listed in a manifest, printing each file:\n    embedgen -m embed.yaml -v generate")]
pub struct GenerateArgs {}
