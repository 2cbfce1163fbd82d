//! Carousel navigation.
//!
//! Drag and snap physics are left to the browser (CSS scroll snapping).
//! This module only decides which slide a wheel gesture or button press
//! should bring into view.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of the active slide within the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideAlign {
    Start,
    #[default]
    Center,
    End,
}

impl SlideAlign {
    /// Value for the CSS `scroll-snap-align` property.
    pub fn css(&self) -> &'static str {
        match self {
            SlideAlign::Start => "start",
            SlideAlign::Center => "center",
            SlideAlign::End => "end",
        }
    }
}

/// Carousel behaviour options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    /// Wrap from the last slide to the first and back
    pub loop_slides: bool,
    pub align: SlideAlign,
    /// Free scrolling that settles near a slide instead of always snapping
    pub drag_free: bool,
    /// Translate vertical wheel gestures into slide navigation
    pub wheel_navigation: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            loop_slides: true,
            align: SlideAlign::Center,
            drag_free: true,
            wheel_navigation: true,
        }
    }
}

impl CarouselOptions {
    /// Value for the CSS `scroll-snap-type` property on the viewport.
    pub fn snap_type(&self) -> &'static str {
        if self.drag_free {
            "x proximity"
        } else {
            "x mandatory"
        }
    }
}

/// Direction of a navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Previous,
    Next,
}

/// Interpret a wheel gesture.
///
/// Predominantly vertical gestures become slide steps; horizontal or empty
/// gestures return `None` so the browser scrolls natively.
pub fn wheel_intent(delta_x: f64, delta_y: f64) -> Option<ScrollDirection> {
    if delta_y.abs() <= delta_x.abs() {
        return None;
    }
    if delta_y > 0.0 {
        Some(ScrollDirection::Next)
    } else {
        Some(ScrollDirection::Previous)
    }
}

/// Slide navigation over a fixed number of slides.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    len: usize,
    options: CarouselOptions,
}

impl CarouselState {
    pub fn new(len: usize, options: CarouselOptions) -> Self {
        Self { len, options }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Index reached by stepping once from `current`.
    pub fn step(&self, current: usize, direction: ScrollDirection) -> usize {
        if self.len == 0 {
            return 0;
        }
        let last = self.len - 1;
        let current = current.min(last);
        match direction {
            ScrollDirection::Next if current == last => {
                if self.options.loop_slides {
                    0
                } else {
                    last
                }
            }
            ScrollDirection::Next => current + 1,
            ScrollDirection::Previous if current == 0 => {
                if self.options.loop_slides {
                    last
                } else {
                    0
                }
            }
            ScrollDirection::Previous => current - 1,
        }
    }

    /// Scroll offset at which slide `index` is snapped into place.
    ///
    /// Offsets are clamped at zero since the viewport cannot scroll before
    /// its first slide.
    pub fn snap_offset(&self, index: usize, slide_width: f64, viewport_width: f64) -> f64 {
        let slack = (viewport_width - slide_width).max(0.0);
        let start = index as f64 * slide_width;
        let offset = match self.options.align {
            SlideAlign::Start => start,
            SlideAlign::Center => start - slack / 2.0,
            SlideAlign::End => start - slack,
        };
        offset.max(0.0)
    }

    /// Slide whose snap offset is closest to `scroll_offset`; ties go to
    /// the earlier slide.
    pub fn nearest_index(&self, scroll_offset: f64, slide_width: f64, viewport_width: f64) -> usize {
        if self.len == 0
            || slide_width.is_nan()
            || slide_width <= 0.0
            || !scroll_offset.is_finite()
            || !viewport_width.is_finite()
        {
            return 0;
        }
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for index in 0..self.len {
            let distance = (self.snap_offset(index, slide_width, viewport_width) - scroll_offset).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }

    /// Slide to mark active once the viewport rests at `scroll_offset`, or
    /// `None` when `current` is still the one snapped into place.
    pub fn settle(
        &self,
        current: usize,
        scroll_offset: f64,
        slide_width: f64,
        viewport_width: f64,
    ) -> Option<usize> {
        let nearest = self.nearest_index(scroll_offset, slide_width, viewport_width);
        (nearest != current).then_some(nearest)
    }
}
