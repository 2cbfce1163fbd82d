//! Page components for Forge Preview.

mod forge;
mod not_found;

pub use forge::Forge;
pub use not_found::NotFound;
