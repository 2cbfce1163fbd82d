//! Attribution capture.
//!
//! Runs once per page load: every recognised tracking key present on the
//! incoming query string is copied into the store. Capture is best-effort;
//! a store that refuses writes is logged and otherwise ignored.

use url::form_urlencoded;

use crate::store::AttributionStore;
use crate::tracking::{TrackedParam, TrackingKey};

/// Outcome of one capture pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureReport {
    /// Parameters written to the store
    pub stored: Vec<TrackedParam>,
    /// Writes the store rejected
    pub failed: usize,
}

impl CaptureReport {
    pub fn is_empty(&self) -> bool {
        self.stored.is_empty() && self.failed == 0
    }
}

/// Extract the recognised tracking parameters from a query string.
///
/// A leading `?` is accepted. Empty values are skipped and, when a key
/// repeats, its first occurrence wins. The result follows
/// [`TrackingKey::ALL`] order.
pub fn tracked_params(query: &str) -> Vec<TrackedParam> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    TrackingKey::ALL
        .into_iter()
        .filter_map(|key| {
            pairs
                .iter()
                .find(|(k, _)| k == key.as_str())
                .filter(|(_, v)| !v.is_empty())
                .map(|(_, v)| TrackedParam::new(key, v.clone()))
        })
        .collect()
}

/// Persist the tracking parameters found on `query` into `store`.
///
/// `None` means there is no page URL to read (e.g. not running in a
/// browser) and nothing happens. Keys absent from the query are left
/// untouched in the store.
pub fn capture_attribution(query: Option<&str>, store: &dyn AttributionStore) -> CaptureReport {
    let mut report = CaptureReport::default();
    let Some(query) = query else {
        return report;
    };

    for param in tracked_params(query) {
        match store.set(param.key.as_str(), &param.value) {
            Ok(()) => report.stored.push(param),
            Err(e) => {
                tracing::debug!("Skipping {} capture: {}", param.key, e);
                report.failed += 1;
            }
        }
    }

    if !report.stored.is_empty() {
        tracing::info!("Captured {} attribution parameter(s)", report.stored.len());
    }
    report
}
