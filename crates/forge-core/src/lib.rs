//! Forge Preview Core Library
//!
//! Framework-independent logic behind the forged-cards preview page.
//!
//! ## Overview
//!
//! The preview page shows a carousel of flippable product cards. Visitors
//! arriving from a campaign carry UTM parameters; those are captured once
//! per page load and merged into every card's call-to-action link so the
//! destination can attribute the click.
//!
//! - **Attribution capture**: [`capture_attribution`] copies recognised
//!   tracking keys from the query string into an [`AttributionStore`]
//! - **Outbound links**: [`build_outbound_link`] merges stored values and
//!   the card id into a destination without overwriting anything
//! - **Flip state**: [`FlipState`] is the per-card front/back state machine
//! - **Carousel**: [`CarouselState`] decides which slide to bring into view
//!
//! ## Quick Start
//!
//! ```
//! use forge_core::{build_outbound_link, capture_attribution, MemoryStore};
//!
//! let store = MemoryStore::new();
//! capture_attribution(Some("?utm_source=newsletter"), &store);
//!
//! let link = build_outbound_link(
//!     "https://your-short.link/frostcore",
//!     Some("frostcore-02"),
//!     Some("https://pcforge.pages.dev"),
//!     &store,
//! );
//! assert_eq!(
//!     link,
//!     "https://your-short.link/frostcore?utm_source=newsletter&ref_card=frostcore-02"
//! );
//! ```

pub mod attribution;
pub mod card;
pub mod carousel;
pub mod config;
pub mod error;
pub mod flip;
pub mod link;
pub mod store;
pub mod tracking;

// Re-exports
pub use attribution::{capture_attribution, tracked_params, CaptureReport};
pub use card::{CardDeck, CardRecord};
pub use carousel::{wheel_intent, CarouselOptions, CarouselState, ScrollDirection, SlideAlign};
pub use config::{OgImage, OpenGraph, SiteConfig};
pub use error::{ForgeError, ForgeResult};
pub use flip::{Face, FlipState, FlipTransition};
pub use link::build_outbound_link;
pub use store::{AttributionStore, MemoryStore};
pub use tracking::{TrackedParam, TrackingKey, REF_CARD_PARAM};
