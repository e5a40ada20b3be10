//! Command implementations for embedgen CLI

pub mod check;
pub mod completions;
pub mod generate;
pub mod helpers;
pub mod list;
pub mod version;
