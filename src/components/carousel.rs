//! Card Carousel Component
//!
//! Horizontal, scroll-snapped strip of flip cards. Dragging and swiping are
//! native browser scrolling; vertical wheel gestures, the arrow buttons and
//! the position dots step between slides. The active dot follows the
//! scroll position, however it got there.

use std::rc::Rc;

use dioxus::prelude::*;
use forge_core::{wheel_intent, CardRecord, CarouselOptions, CarouselState, ScrollDirection};

use super::FlipCard;
use crate::browser::scroll_element_to;

/// Inline style for the scrolling viewport.
fn viewport_style(options: &CarouselOptions) -> String {
    format!("scroll-snap-type: {};", options.snap_type())
}

/// Inline style for each slide.
fn slide_style(options: &CarouselOptions) -> String {
    format!("scroll-snap-align: {};", options.align.css())
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "carousel__dot carousel__dot--active"
    } else {
        "carousel__dot"
    }
}

/// Scrollable carousel of flip cards
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardCarousel {
///         cards: deck.cards().to_vec(),
///         options: CarouselOptions::default(),
///         label: "Forged cards".to_string(),
///     }
/// }
/// ```
#[component]
pub fn CardCarousel(
    /// Cards in display order
    cards: Vec<CardRecord>,
    /// Loop, alignment and wheel behaviour
    #[props(default)]
    options: CarouselOptions,
    /// Accessible name of the carousel region
    label: String,
) -> Element {
    let carousel = CarouselState::new(cards.len(), options.clone());
    let mut viewport: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut first_slide: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut current = use_signal(|| 0usize);
    // Scroll events arriving while a measurement is in flight
    let mut measuring = use_signal(|| false);
    let mut rescroll = use_signal(|| false);

    let show_carousel = carousel.clone();
    let show = use_callback(move |index: usize| {
        let carousel = show_carousel.clone();
        let viewport = viewport.peek().clone();
        let first = first_slide.peek().clone();
        spawn(async move {
            let Some(geometry) = measure(viewport.clone(), first).await else {
                return;
            };
            let left = carousel.snap_offset(index, geometry.slide_width, geometry.viewport_width);
            // Scroll the strip itself; scrolling the slide into view also moves the page
            if viewport.is_some_and(|viewport| scroll_element_to(&viewport, left)) {
                current.set(index);
            } else {
                tracing::debug!("Could not scroll to slide {}", index);
            }
        });
    });

    let step_carousel = carousel.clone();
    let step = use_callback(move |direction: ScrollDirection| {
        let carousel = step_carousel.clone();
        let fallback = *current.peek();
        let viewport = viewport.peek().clone();
        let first = first_slide.peek().clone();
        spawn(async move {
            // The visitor may have swiped since the last step
            let from = match measure(viewport, first).await {
                Some(g) => carousel.nearest_index(g.scroll_left, g.slide_width, g.viewport_width),
                None => fallback,
            };
            show.call(carousel.step(from, direction));
        });
    });

    let settle_carousel = carousel.clone();
    let on_scroll = move |_: ScrollEvent| {
        if *measuring.peek() {
            rescroll.set(true);
            return;
        }
        measuring.set(true);
        let carousel = settle_carousel.clone();
        spawn(async move {
            loop {
                rescroll.set(false);
                let viewport = viewport.peek().clone();
                let first = first_slide.peek().clone();
                if let Some(g) = measure(viewport, first).await {
                    let active = *current.peek();
                    if let Some(index) =
                        carousel.settle(active, g.scroll_left, g.slide_width, g.viewport_width)
                    {
                        current.set(index);
                    }
                }
                if !*rescroll.peek() {
                    break;
                }
            }
            measuring.set(false);
        });
    };

    let wheel_navigation = options.wheel_navigation;
    let on_wheel = move |evt: WheelEvent| {
        if !wheel_navigation {
            return;
        }
        let delta = evt.delta().strip_units();
        if let Some(direction) = wheel_intent(delta.x, delta.y) {
            evt.prevent_default();
            step.call(direction);
        }
    };

    let slide_css = slide_style(&options);
    let active = current();

    rsx! {
        div {
            class: "carousel",
            role: "region",
            "aria-roledescription": "carousel",
            "aria-label": "{label}",

            div {
                class: "carousel__viewport",
                style: viewport_style(&options),
                onmounted: move |evt| viewport.set(Some(evt.data())),
                onwheel: on_wheel,
                onscroll: on_scroll,

                div { class: "carousel__track",
                    for (index, card) in cards.iter().enumerate() {
                        div {
                            key: "{card.id}",
                            class: "carousel__slide",
                            style: "{slide_css}",
                            role: "group",
                            "aria-roledescription": "slide",
                            "aria-label": "{index + 1} of {carousel.len()}",
                            onmounted: move |evt| {
                                if index == 0 {
                                    first_slide.set(Some(evt.data()));
                                }
                            },
                            FlipCard { card: card.clone() }
                        }
                    }
                }
            }

            if carousel.len() > 1 {
                div { class: "carousel__controls",
                    button {
                        class: "carousel__arrow",
                        r#type: "button",
                        "aria-label": "Previous card",
                        onclick: move |_| step.call(ScrollDirection::Previous),
                        "\u{2039}"
                    }
                    div { class: "carousel__dots",
                        for index in 0..carousel.len() {
                            button {
                                key: "{index}",
                                class: dot_class(index == active),
                                r#type: "button",
                                "aria-label": "Go to card {index + 1}",
                                "aria-current": "{index == active}",
                                onclick: move |_| show.call(index),
                            }
                        }
                    }
                    button {
                        class: "carousel__arrow",
                        r#type: "button",
                        "aria-label": "Next card",
                        onclick: move |_| step.call(ScrollDirection::Next),
                        "\u{203A}"
                    }
                }
            }
        }
    }
}

/// Live scroll position and widths of the viewport.
#[derive(Clone, Copy, Debug)]
struct Geometry {
    scroll_left: f64,
    slide_width: f64,
    viewport_width: f64,
}

/// Measure the viewport against its first slide. `None` until both are
/// mounted or when the renderer cannot report geometry.
async fn measure(
    viewport: Option<Rc<MountedData>>,
    first_slide: Option<Rc<MountedData>>,
) -> Option<Geometry> {
    let (viewport, first_slide) = (viewport?, first_slide?);
    let offset = viewport.get_scroll_offset().await.ok()?;
    let viewport_rect = viewport.get_client_rect().await.ok()?;
    let slide_rect = first_slide.get_client_rect().await.ok()?;
    Some(Geometry {
        scroll_left: offset.x,
        slide_width: slide_rect.width(),
        viewport_width: viewport_rect.width(),
    })
}
