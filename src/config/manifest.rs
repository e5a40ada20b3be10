//! Embed manifest: the ordered asset list plus file extensions

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::entry::AssetEntry;
use crate::error::{Result, config};

/// Built-in assets used when no manifest is given
const BUILTIN_ASSETS: &[(&str, &str)] = &[("JetBrainsMono-Regular", "JET_BRAINS_MONO_FONT")];

/// File extensions for the asset and the two generated files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Extensions {
    /// Extension of the binary asset
    pub input: String,
    /// Extension of the generated array definition
    pub source: String,
    /// Extension of the generated declaration
    pub header: String,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            input: "ttf".to_string(),
            source: "c".to_string(),
            header: "h".to_string(),
        }
    }
}

impl Extensions {
    fn validate(&self) -> Result<()> {
        for (role, ext) in [
            ("input", &self.input),
            ("source", &self.source),
            ("header", &self.header),
        ] {
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                return Err(config::invalid(format!(
                    "{role} extension '{ext}' must be non-empty and contain no '.' or path separators"
                )));
            }
        }
        if self.source == self.header || self.source == self.input || self.header == self.input {
            return Err(config::invalid(
                "input, source and header extensions must all differ",
            ));
        }
        Ok(())
    }
}

/// Immutable embed configuration, loaded once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedConfig {
    #[serde(default)]
    pub extensions: Extensions,

    /// Assets in processing order
    pub assets: Vec<AssetEntry>,
}

impl EmbedConfig {
    /// The compiled-in configuration
    pub fn builtin() -> Self {
        Self {
            extensions: Extensions::default(),
            assets: BUILTIN_ASSETS
                .iter()
                .map(|(stem, symbol)| AssetEntry::new(*stem, *symbol))
                .collect(),
        }
    }

    /// Parse and validate manifest text read from `origin`
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| config::parse_failed(origin.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content, path)
    }

    /// Load `manifest` if given, otherwise use the built-in list
    pub fn resolve(manifest: Option<&Path>) -> Result<Self> {
        match manifest {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Validate entries and extensions
    pub fn validate(&self) -> Result<()> {
        self.extensions.validate()?;

        let mut stems = HashSet::new();
        let mut symbols = HashSet::new();
        for entry in &self.assets {
            entry.validate()?;
            if !stems.insert(entry.stem.as_str()) {
                return Err(config::invalid(format!("duplicate asset stem '{}'", entry.stem)));
            }
            if !symbols.insert(entry.symbol_name.as_str()) {
                return Err(config::invalid(format!(
                    "duplicate symbol '{}'",
                    entry.symbol_name
                )));
            }
        }

        Ok(())
    }
}
