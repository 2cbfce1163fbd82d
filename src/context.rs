//! Site context provider for Forge Preview.
//!
//! Provides the site configuration, the card deck and the attribution
//! capability to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| site);
//! use_context_provider(|| Attribution::browser());
//!
//! // In child components
//! let attribution = use_attribution();
//! let href = attribution.link_for(&card);
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use forge_core::{
    build_outbound_link, capture_attribution, AttributionStore, CaptureReport, CardDeck,
    CardRecord, SiteConfig,
};

use crate::browser::{page_origin, page_query, BrowserStore};

/// Build-time site data shared by every page.
#[derive(Clone, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub deck: CardDeck,
}

impl Site {
    /// Load the bundled configuration and deck.
    ///
    /// Invalid bundled data is logged and replaced by defaults (an empty
    /// deck) so the page still renders.
    pub fn bundled() -> Self {
        let config = SiteConfig::bundled().unwrap_or_else(|e| {
            tracing::error!("Bundled site config is invalid, using defaults: {}", e);
            SiteConfig::default()
        });
        let deck = CardDeck::bundled().unwrap_or_else(|e| {
            tracing::error!("Bundled card deck is invalid: {}", e);
            CardDeck::default()
        });
        Self { config, deck }
    }
}

/// Where captured attribution lives and how relative links resolve.
#[derive(Clone)]
pub struct Attribution {
    store: Rc<dyn AttributionStore>,
    origin: Option<String>,
}

impl Attribution {
    pub fn new(store: Rc<dyn AttributionStore>, origin: Option<String>) -> Self {
        Self { store, origin }
    }

    /// Attribution backed by localStorage and the current page origin.
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStore), page_origin())
    }

    /// Copy tracking parameters from the current page URL into the store.
    pub fn capture_from_page(&self) -> CaptureReport {
        capture_attribution(page_query().as_deref(), self.store.as_ref())
    }

    /// Outbound link for a card's call-to-action.
    pub fn link_for(&self, card: &CardRecord) -> String {
        build_outbound_link(
            &card.destination_link,
            Some(card.id.as_str()),
            self.origin.as_deref(),
            self.store.as_ref(),
        )
    }
}

/// Hook to access the site configuration and deck.
pub fn use_site() -> Site {
    use_context::<Site>()
}

/// Hook to access the attribution capability.
pub fn use_attribution() -> Attribution {
    use_context::<Attribution>()
}
