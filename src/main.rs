//! embedgen - binary asset embedder
//!
//! Converts binary assets (fonts, images, ...) into a C array definition and a
//! matching `extern "C"` declaration, so a program can link the bytes in
//! instead of reading the file at runtime.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod embedder;
mod error;
mod render;
mod ui;

use cli::{Cli, Commands};
use error::EmbedError;

fn report(err: &EmbedError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let (globals, command) = Cli::parse().into_parts();

    let result = match command {
        Commands::Generate(args) => commands::generate::run(&globals, args),
        Commands::Check(args) => commands::check::run(&globals, args),
        Commands::List(args) => commands::list::run(&globals, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}
