//! Slide carousel: navigation state, drag tracking and spring settling
//!
//! # Layers
//!
//! ## Atomic
//! - `spring` - Pure damped-spring integration step
//! - `drag` - Pointer drag session, edge resistance and velocity sampling
//!
//! ## Molecular
//! - `controller` - [`Carousel`], owning the slide index and animated offset
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use flowpitch_core::{Carousel, CarouselConfig};
//!
//! let mut carousel = Carousel::new(7, 120.0, CarouselConfig::default());
//!
//! if let Some(nav) = carousel.next() {
//!     println!("{}", nav.message()); // "Slide 2/7"
//! }
//!
//! // Once per frame
//! carousel.tick(Instant::now());
//! let x = carousel.offset();
//! ```

// Atomic
pub mod drag;
pub mod spring;

// Molecular
mod controller;

pub use controller::{Carousel, Navigation};
pub use drag::{DragSession, PointerId, PointerTarget};
