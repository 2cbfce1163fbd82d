//! Outbound link construction.
//!
//! A card's call-to-action carries the visitor's captured attribution and
//! the id of the card that was clicked. Merging is additive: whatever the
//! destination already specifies wins over stored values.

use std::collections::HashSet;

use url::Url;

use crate::store::AttributionStore;
use crate::tracking::{TrackingKey, REF_CARD_PARAM};

/// Build the attribution-preserving link for a card.
///
/// `origin` is the page origin used to resolve relative destinations. The
/// destination is returned unchanged when there is no usable origin or
/// when it does not parse as a valid URL (any URL validation error counts,
/// e.g. unescaped spaces or a second `#`). Store read failures are treated
/// as missing values.
///
/// Validation is stricter than what browsers will follow. Destinations
/// with unescaped characters such as `https://x.example/go?q={x}` or
/// `https://x.example/a|b` open fine in a browser but are returned without
/// attribution; percent-encode them (`%7B`, `%7D`, `%7C`) to get merging.
///
/// The result is idempotent: feeding it back in yields the same string.
pub fn build_outbound_link(
    destination: &str,
    card_id: Option<&str>,
    origin: Option<&str>,
    store: &dyn AttributionStore,
) -> String {
    let Some(base) = origin.and_then(|o| Url::parse(o).ok()) else {
        return destination.to_string();
    };
    let Some(mut url) = parse_strict(destination, &base) else {
        tracing::debug!("Leaving malformed destination as-is: {}", destination);
        return destination.to_string();
    };

    let present: HashSet<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    let mut additions: Vec<(&str, String)> = Vec::new();

    for key in TrackingKey::ALL {
        if present.contains(key.as_str()) {
            continue;
        }
        match store.tracked(key) {
            Ok(Some(value)) => additions.push((key.as_str(), value)),
            Ok(None) => {}
            Err(e) => tracing::debug!("Could not read {}: {}", key, e),
        }
    }

    if let Some(id) = card_id.filter(|id| !id.is_empty()) {
        if !present.contains(REF_CARD_PARAM) {
            additions.push((REF_CARD_PARAM, id.to_string()));
        }
    }

    // query_pairs_mut() would leave a bare '?' behind when nothing is added
    if !additions.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(additions.iter().map(|(k, v)| (*k, v.as_str())));
    }

    url.into()
}

/// Parse `input` against `base`, rejecting anything the URL standard flags
/// as a validation error.
fn parse_strict(input: &str, base: &Url) -> Option<Url> {
    let violated = std::cell::Cell::new(false);
    let parsed = Url::options()
        .base_url(Some(base))
        .syntax_violation_callback(Some(&|_| violated.set(true)))
        .parse(input);

    match parsed {
        Ok(url) if !violated.get() => Some(url),
        _ => None,
    }
}
