use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Verify generated files are current (e.g. in CI):\n    embedgen check\n\n\
                  Verify against a manifest:\n    embedgen -m embed.yaml check")]
pub struct CheckArgs {}
