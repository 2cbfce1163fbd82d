use dioxus::prelude::*;

use crate::app::Route;

/// Fallback for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        main { class: "forge forge--missing",
            h1 { class: "page-title", "Nothing forged here" }
            p { class: "tagline", "/{path}" }
            Link { class: "btn-back", to: Route::Forge {}, "Back to the preview" }
        }
    }
}
