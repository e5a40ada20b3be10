//! Configuration handling for embedgen
//!
//! This module contains data structures for:
//! - [`AssetEntry`] - One asset to embed
//! - [`EmbedConfig`] - The ordered asset list, either built in or read from a YAML manifest

pub mod entry;
pub mod manifest;

// Re-export commonly used types
pub use entry::AssetEntry;
pub use manifest::{EmbedConfig, Extensions};
