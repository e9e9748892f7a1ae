use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck parsing error: {0}")]
    DeckParse(#[from] toml::de::Error),

    #[error("Deck has no slides")]
    EmptyDeck,

    #[error("Invalid slide {index}: {reason}")]
    InvalidSlide { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
