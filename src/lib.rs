//! Auto-advancing slide carousel.
//!
//! The [`Carousel`] controller owns the slide index and drives the
//! advance-and-wrap cycle. Rendering stays behind the [`Track`] trait so any
//! presentation surface can host it; the `carousel` binary hosts it in a
//! raylib window.

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod offset;
pub mod slide;
pub mod state;
pub mod timer;
pub mod track;

pub use config::CarouselConfig;
pub use controller::{Carousel, Readout};
pub use error::{CarouselError, Result};
pub use offset::Percent;
pub use slide::{Slide, SlideDeck, Text, TextColor};
pub use state::{CarouselState, Phase};
pub use track::Track;
