pub mod carousel;
pub mod config;
pub mod deck;
pub mod error;
pub mod notice;

pub use carousel::{Carousel, Navigation, PointerTarget};
pub use config::{AppConfig, CarouselConfig, SpringConfig};
pub use deck::{Deck, Metric, Slide, SlideBody, SlideLayout};
pub use error::{Error, Result};
pub use notice::Notice;
