//! Forge page - the forged cards preview.
//!
//! "Swipe. Flip. Tell us what you think."

use dioxus::prelude::*;

use crate::components::CardCarousel;
use crate::context::use_site;

/// Preview page component.
#[component]
pub fn Forge() -> Element {
    let site = use_site();
    let config = site.config;
    let cards = site.deck.cards().to_vec();

    rsx! {
        main { class: "forge",
            header { class: "forge-header",
                h1 { class: "page-title", "{config.heading}" }
                p { class: "tagline", "{config.tagline}" }
            }

            section {
                class: "forge-section",
                "aria-label": "{config.carousel_label} carousel",
                CardCarousel {
                    cards: cards,
                    options: config.carousel.clone(),
                    label: config.carousel_label.clone(),
                }
            }

            footer { class: "forge-footer", "{config.footer}" }
        }
    }
}
