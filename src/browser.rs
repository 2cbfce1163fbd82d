//! Browser environment access.
//!
//! Page location, element scrolling and `window.localStorage`. Every accessor degrades to
//! `None` or an error when the environment does not provide it (storage
//! disabled by privacy settings, no window during prerendering).

use dioxus::prelude::MountedData;
use forge_core::{AttributionStore, ForgeError, ForgeResult};

/// Query string of the current page, including the leading `?`.
pub fn page_query() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

/// Origin of the current page, e.g. `https://pcforge.pages.dev`.
pub fn page_origin() -> Option<String> {
    web_sys::window()?
        .location()
        .origin()
        .ok()
        .filter(|origin| !origin.is_empty())
}

/// Scroll a mounted element horizontally to `left` pixels without moving
/// the page. Returns `false` when the element is not a DOM element.
pub fn scroll_element_to(element: &MountedData, left: f64) -> bool {
    match element.downcast::<web_sys::Element>() {
        Some(element) => {
            element.scroll_to_with_x_and_y(left, 0.0);
            true
        }
        None => false,
    }
}

/// Attribution store backed by `window.localStorage`.
///
/// Values are stored as plain strings under their query key.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> ForgeResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(ForgeError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(ForgeError::StorageUnavailable),
            // Accessing localStorage throws when it is blocked
            Err(e) => Err(ForgeError::Storage(format!("{:?}", e))),
        }
    }
}

impl AttributionStore for BrowserStore {
    fn get(&self, key: &str) -> ForgeResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ForgeError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> ForgeResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ForgeError::Storage(format!("{:?}", e)))
    }
}
