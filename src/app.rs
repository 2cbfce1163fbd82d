use dioxus::prelude::*;

use crate::context::{use_site, Attribution, Site};
use crate::pages::{Forge, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Redirects to the preview (temporary, the page may move)
/// - `/forge` - Forged cards carousel
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Forge {})]
    #[route("/forge")]
    Forge {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, site data, attribution context and routing.
#[component]
pub fn App() -> Element {
    let site = use_context_provider(Site::bundled);
    let attribution = use_context_provider(Attribution::browser);

    // Capture before the router runs: the redirect from `/` drops the query
    use_hook(move || {
        let report = attribution.capture_from_page();
        if report.failed > 0 {
            tracing::debug!("{} attribution write(s) skipped", report.failed);
        }
    });

    tracing::debug!("Rendering {} card(s)", site.deck.len());

    rsx! {
        SiteHead {}
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Document title plus description, Open Graph and Twitter metadata.
#[component]
fn SiteHead() -> Element {
    let config = use_site().config;
    let og_image = config.og_image_url();
    let image_size = config
        .open_graph
        .image
        .as_ref()
        .map(|image| (image.width.to_string(), image.height.to_string()));

    rsx! {
        document::Title { "{config.title}" }
        document::Meta { name: "description", content: config.description.clone() }
        document::Meta { property: "og:title", content: config.open_graph.title.clone() }
        document::Meta { property: "og:description", content: config.open_graph.description.clone() }
        if let Some(url) = og_image {
            document::Meta { property: "og:image", content: url }
        }
        if let Some((width, height)) = image_size {
            document::Meta { property: "og:image:width", content: width }
            document::Meta { property: "og:image:height", content: height }
        }
        document::Meta { name: "twitter:card", content: config.twitter_card.clone() }
    }
}
