//! Display functions for configured assets

use console::Style;
use serde::Serialize;

use crate::embedder::{AssetEmbedder, AssetPaths};

/// One asset as shown by `embedgen list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedAsset {
    pub stem: String,
    pub symbol: String,
    #[serde(flatten)]
    pub paths: AssetPaths,
}

/// Collect every configured asset with its derived paths, in order
pub fn listed_assets(embedder: &AssetEmbedder<'_>) -> Vec<ListedAsset> {
    embedder
        .list_entries()
        .iter()
        .map(|entry| ListedAsset {
            stem: entry.stem.clone(),
            symbol: entry.symbol_name.clone(),
            paths: embedder.paths(entry),
        })
        .collect()
}

/// Print assets in human-readable form
pub fn print_assets(assets: &[ListedAsset]) {
    if assets.is_empty() {
        println!("No assets configured.");
        return;
    }

    println!("Configured assets ({}):", assets.len());
    println!();

    for asset in assets {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&asset.stem),
            Style::new().dim().apply_to(format!("-> {}", asset.symbol))
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Input: "),
            asset.paths.input.display()
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Source:"),
            asset.paths.source.display()
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Header:"),
            asset.paths.header.display()
        );
        println!();
    }
}
