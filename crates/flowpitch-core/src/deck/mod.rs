mod loader;
mod models;

pub use loader::DEMO_DECK;
pub use models::{Deck, Metric, Slide, SlideBody, SlideLayout};
