//! Product card components

mod flip_card;

pub use flip_card::FlipCard;
