//! Path derivation for an asset and its generated siblings

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{AssetEntry, Extensions};

/// Input and output locations for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetPaths {
    pub input: PathBuf,
    pub source: PathBuf,
    pub header: PathBuf,
}

impl AssetPaths {
    /// `<base>/<stem>.<ext>` for each of the three extensions
    pub fn for_entry(base_dir: &Path, entry: &AssetEntry, extensions: &Extensions) -> Self {
        let sibling = |ext: &str| base_dir.join(format!("{}.{}", entry.stem, ext));
        Self {
            input: sibling(&extensions.input),
            source: sibling(&extensions.source),
            header: sibling(&extensions.header),
        }
    }
}
