//! Command helper utilities

use std::path::PathBuf;

use crate::cli::GlobalOptions;
use crate::config::EmbedConfig;
use crate::embedder::AssetEmbedder;
use crate::error::{Result, fs};

/// Resolve the base directory from optional argument
///
/// If a directory is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_base_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Load the run's configuration once, before any asset is touched
pub fn load_config(globals: &GlobalOptions) -> Result<EmbedConfig> {
    EmbedConfig::resolve(globals.manifest.as_deref())
}

/// Build an embedder over `config` rooted at the resolved base directory
pub fn embedder<'a>(globals: &GlobalOptions, config: &'a EmbedConfig) -> Result<AssetEmbedder<'a>> {
    let base_dir = resolve_base_dir(globals.dir.clone())?;
    Ok(AssetEmbedder::new(config, base_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_dir_explicit() {
        let dir = resolve_base_dir(Some(PathBuf::from("assets"))).unwrap();
        assert_eq!(dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_resolve_base_dir_defaults_to_cwd() {
        let dir = resolve_base_dir(None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_load_config_without_manifest_is_builtin() {
        let config = load_config(&GlobalOptions::default()).unwrap();
        assert_eq!(config, EmbedConfig::builtin());
    }
}
