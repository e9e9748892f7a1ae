pub mod check;
pub mod config;
pub mod list;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flowpitch_core::{AppConfig, Deck};
use tracing::info;

/// Deck from the command line, then the configured default, then the built-in demo
pub fn resolve_deck(config: &AppConfig, cli_deck: Option<PathBuf>) -> Result<Deck> {
    match cli_deck.or_else(|| config.deck_path()) {
        Some(path) => load_deck(&path),
        None => {
            info!("No deck given, using the built-in demo");
            Ok(Deck::demo()?)
        }
    }
}

pub fn load_deck(path: &Path) -> Result<Deck> {
    Deck::load(path).with_context(|| format!("Failed to load deck {}", path.display()))
}
