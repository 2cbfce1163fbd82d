//! UI Components for Forge Preview.

pub mod cards;
mod carousel;

pub use cards::FlipCard;
pub use carousel::CardCarousel;
