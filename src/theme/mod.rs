//! Visual theme for Forge Preview.

mod styles;

pub use styles::GLOBAL_STYLES;
