//! Property-based tests for attribution capture and link merging
//!
//! Uses proptest to verify the merge never overwrites and is idempotent.

use proptest::prelude::*;
use forge_core::{
    build_outbound_link, capture_attribution, AttributionStore, MemoryStore, TrackedParam,
    TrackingKey,
};
use url::form_urlencoded;

const ORIGIN: Option<&str> = Some("https://pcforge.pages.dev");

// ============================================================================
// Strategy Generators
// ============================================================================

fn tracking_key_strategy() -> impl Strategy<Value = TrackingKey> {
    prop::sample::select(TrackingKey::ALL.to_vec())
}

/// Parameter values, including characters that need encoding
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 &=+%_.-]{1,20}").expect("valid regex")
}

fn card_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9-]{1,16}").expect("valid regex")
}

/// Query pairs mixing tracking keys with unrelated ones
fn query_pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    let key = prop_oneof![
        tracking_key_strategy().prop_map(|k| k.as_str().to_string()),
        Just("ref_card".to_string()),
        prop::string::string_regex("[a-z]{1,8}").expect("valid regex"),
    ];
    prop::collection::vec((key, value_strategy()), 0..6)
}

/// Well-formed destinations, absolute or relative
fn destination_strategy() -> impl Strategy<Value = String> {
    let base = prop::sample::select(vec![
        "https://your-short.link/emberstrike",
        "https://x.example/go",
        "/builds/frostcore",
        "https://shop.example.com/p/value#specs",
    ]);
    (base, query_pairs_strategy()).prop_map(|(base, pairs)| {
        if pairs.is_empty() {
            return base.to_string();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter())
            .finish();
        match base.split_once('#') {
            Some((path, fragment)) => format!("{}?{}#{}", path, query, fragment),
            None => format!("{}?{}", base, query),
        }
    })
}

fn stored_params_strategy() -> impl Strategy<Value = Vec<TrackedParam>> {
    prop::collection::vec(
        (tracking_key_strategy(), value_strategy()).prop_map(|(k, v)| TrackedParam::new(k, v)),
        0..5,
    )
}

fn first_values(url: &str) -> Vec<(String, String)> {
    let query = url
        .split_once('?')
        .map(|(_, rest)| rest.split('#').next().unwrap_or(""))
        .unwrap_or("");
    let mut seen: Vec<(String, String)> = Vec::new();
    for (k, v) in form_urlencoded::parse(query.as_bytes()).into_owned() {
        if !seen.iter().any(|(sk, _)| *sk == k) {
            seen.push((k, v));
        }
    }
    seen
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Merging the output again changes nothing
    #[test]
    fn merge_is_idempotent(
        destination in destination_strategy(),
        params in stored_params_strategy(),
        card_id in prop::option::of(card_id_strategy()),
    ) {
        let store = MemoryStore::with_params(params);
        let once = build_outbound_link(&destination, card_id.as_deref(), ORIGIN, &store);
        let twice = build_outbound_link(&once, card_id.as_deref(), ORIGIN, &store);
        prop_assert_eq!(once, twice);
    }

    /// Parameters already on the destination keep their values
    #[test]
    fn merge_never_overwrites(
        destination in destination_strategy(),
        params in stored_params_strategy(),
        card_id in card_id_strategy(),
    ) {
        let store = MemoryStore::with_params(params);
        let merged = build_outbound_link(&destination, Some(card_id.as_str()), ORIGIN, &store);

        let before = first_values(&destination);
        let after = first_values(&merged);
        for (key, value) in &before {
            let kept = after.iter().find(|(k, _)| k == key).map(|(_, v)| v);
            prop_assert_eq!(kept, Some(value), "key {} changed", key);
        }
    }

    /// Every stored tracking value ends up on the link unless already present
    #[test]
    fn merge_adds_missing_stored_values(
        params in stored_params_strategy(),
        card_id in card_id_strategy(),
    ) {
        let store = MemoryStore::with_params(params);
        let merged = build_outbound_link("https://x.example/go", Some(card_id.as_str()), ORIGIN, &store);
        let after = first_values(&merged);

        for key in TrackingKey::ALL {
            let expected = store.tracked(key).unwrap();
            let actual = after.iter().find(|(k, _)| k == key.as_str()).map(|(_, v)| v.clone());
            prop_assert_eq!(actual, expected);
        }
        prop_assert!(after.iter().any(|(k, v)| k == "ref_card" && *v == card_id));
    }

    /// Destinations with unescaped spaces are returned untouched
    #[test]
    fn malformed_destination_is_unchanged(
        left in "[a-z]{1,8}",
        right in "[a-z#]{0,8}",
        params in stored_params_strategy(),
    ) {
        let destination = format!("{} {}", left, right);
        let store = MemoryStore::with_params(params);
        let merged = build_outbound_link(&destination, Some("card1"), ORIGIN, &store);
        prop_assert_eq!(merged, destination);
    }

    /// Capture stores exactly the present, non-empty tracking values
    #[test]
    fn capture_stores_present_values(pairs in query_pairs_strategy()) {
        let store = MemoryStore::new();
        store.set("theme", "dark").unwrap();

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter())
            .finish();
        capture_attribution(Some(query.as_str()), &store);

        for key in TrackingKey::ALL {
            let expected = pairs
                .iter()
                .find(|(k, _)| k == key.as_str())
                .map(|(_, v)| v.clone())
                .filter(|v| !v.is_empty());
            prop_assert_eq!(store.get(key.as_str()).unwrap(), expected);
        }
        prop_assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }
}
