use std::path::Path;

use tracing::{debug, info};

use super::models::Deck;
use crate::{Error, Result};

/// Built-in demo pitch
pub const DEMO_DECK: &str = include_str!("../../assets/demo.toml");

impl Deck {
    /// The built-in FlowPitch demo deck
    pub fn demo() -> Result<Self> {
        Self::from_toml(DEMO_DECK)
    }

    /// Load and validate a deck from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading deck from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let deck = Self::from_toml(&content)?;
        info!("Loaded deck '{}' with {} slides", deck.display_title(), deck.len());
        Ok(deck)
    }

    /// Parse and validate a deck from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let deck: Deck = toml::from_str(content)?;
        deck.validate()?;
        Ok(deck)
    }

    /// A deck needs at least one slide and every slide needs a title
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(Error::EmptyDeck);
        }
        for (index, slide) in self.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(Error::InvalidSlide {
                    index,
                    reason: "title is empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
