//! Version command implementation

use crate::config::EmbedConfig;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_text());
    Ok(())
}

fn version_text() -> String {
    let builtin = EmbedConfig::builtin();
    let ext = &builtin.extensions;
    format!(
        "embedgen {}\n\nBuild info:\n  Rust version: {}\n  Profile: {}\n  Built-in assets: {}\n  Extensions: .{} -> .{} + .{}\n",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_RUST_VERSION"),
        build_profile(),
        builtin.assets.len(),
        ext.input,
        ext.source,
        ext.header,
    )
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
