//! Flip Card Component
//!
//! Two-faced product card. The front shows the build, the back carries the
//! call-to-action link with the visitor's attribution merged in.

use dioxus::prelude::*;
use forge_core::{CardRecord, Face, FlipState, FlipTransition};

use crate::context::use_attribution;

/// CSS class for the rotating inner element.
fn inner_class(state: FlipState) -> &'static str {
    if state.is_flipped() {
        "flip-card__inner flip-card__inner--flipped"
    } else {
        "flip-card__inner"
    }
}

/// Only the visible back face exposes its link to keyboard focus.
fn link_tabindex(state: FlipState) -> &'static str {
    if state.is_flipped() {
        "0"
    } else {
        "-1"
    }
}

/// Flippable product card
///
/// Click, Space or Enter flips the card; Escape returns to the front.
/// Activating the back-face link never flips the card; Escape pressed on
/// the link still returns it to the front.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     FlipCard {
///         card: deck.cards()[0].clone(),
///     }
/// }
/// ```
#[component]
pub fn FlipCard(
    /// Card data
    card: CardRecord,
    /// Start on the back face
    #[props(default = false)]
    initially_flipped: bool,
) -> Element {
    let mut state = use_signal(|| FlipState::from_flipped(initially_flipped));
    let attribution = use_attribution();

    // Read at render time so values captured on this page load are included
    let href = attribution.link_for(&card);
    let flip = state();
    let instructions_id = format!("{}-instructions", card.id);

    let card_id = card.id.clone();
    let apply = use_callback(move |transition: FlipTransition| {
        if state.write().apply(transition) {
            tracing::debug!("Card {} now showing {}", card_id, state.peek().face().as_str());
        }
    });

    let on_keydown = move |evt: KeyboardEvent| {
        let transition = FlipTransition::for_key(&evt.key().to_string());
        if transition != FlipTransition::None {
            // Space would otherwise scroll the page
            evt.prevent_default();
            apply.call(transition);
        }
    };

    // The link handles its own keys so Enter opens it without flipping
    let on_link_keydown = move |evt: KeyboardEvent| {
        evt.stop_propagation();
        apply.call(FlipTransition::for_link_key(&evt.key().to_string()));
    };

    rsx! {
        div {
            class: "flip-card",
            role: "button",
            tabindex: "0",
            "aria-pressed": "{flip.is_flipped()}",
            "aria-label": "{flip.aria_label(&card.title)}",
            "aria-describedby": "{instructions_id}",
            onclick: move |_| apply.call(FlipTransition::for_click()),
            onkeydown: on_keydown,

            div { class: inner_class(flip),
                // Front face
                div {
                    class: "flip-card__face flip-card__face--front",
                    "aria-hidden": "{flip.is_hidden(Face::Front)}",
                    img {
                        class: "flip-card__img",
                        src: "{card.front_image}",
                        alt: "{card.title} front",
                        loading: "eager",
                    }
                    div { class: "flip-card__shade" }
                    div { class: "flip-card__caption",
                        div { class: "flip-card__tier", "{card.tier}" }
                        div { class: "flip-card__title", "{card.title}" }
                        div { class: "flip-card__price", "{card.price}" }
                        if !card.tags.is_empty() {
                            div { class: "flip-card__tags",
                                for tag in card.tags.iter() {
                                    span { key: "{tag}", class: "flip-card__tag", "{tag}" }
                                }
                            }
                        }
                    }
                }

                // Back face
                div {
                    class: "flip-card__face flip-card__face--back",
                    "aria-hidden": "{flip.is_hidden(Face::Back)}",
                    img {
                        class: "flip-card__img",
                        src: "{card.back_image}",
                        alt: "{card.title} back",
                        loading: "lazy",
                    }
                    div { class: "flip-card__shade flip-card__shade--deep" }
                    div { class: "flip-card__actions",
                        a {
                            class: "flip-card__link",
                            href: "{href}",
                            target: "_blank",
                            rel: "noreferrer",
                            tabindex: link_tabindex(flip),
                            onclick: move |evt| {
                                evt.stop_propagation();
                                apply.call(FlipTransition::for_link_click());
                            },
                            onkeydown: on_link_keydown,
                            "Open Build"
                        }
                        span { class: "flip-card__hint", "flip to front \u{21BB}" }
                    }
                }
            }

            span { id: "{instructions_id}", class: "sr-only", "{flip.instruction()}" }
            div { class: "flip-card__ring" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_class_follows_face() {
        assert_eq!(inner_class(FlipState::new(Face::Front)), "flip-card__inner");
        assert_eq!(
            inner_class(FlipState::new(Face::Back)),
            "flip-card__inner flip-card__inner--flipped"
        );
    }

    #[test]
    fn link_focusable_only_on_back() {
        assert_eq!(link_tabindex(FlipState::new(Face::Front)), "-1");
        assert_eq!(link_tabindex(FlipState::new(Face::Back)), "0");
    }
}
