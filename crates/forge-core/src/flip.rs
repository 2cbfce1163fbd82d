//! Two-faced card state machine.
//!
//! Each card owns one [`FlipState`]. Pointer clicks and Space/Enter toggle
//! it, Escape only ever returns to the front, and every other key is
//! ignored. Input on the back-face link follows its own mapping: the link
//! keeps its activation keys and clicks, Escape still reaches the card.

use serde::{Deserialize, Serialize};

/// Which face of a card is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn flipped(&self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
        }
    }
}

/// A named state change requested by user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipTransition {
    /// Flip to the opposite face
    Toggle,
    /// Show the front face, whatever is showing now
    ForceFront,
    /// Leave the card as it is
    None,
}

impl FlipTransition {
    /// Map a keyboard key name (as in `KeyboardEvent.key`) to a transition.
    pub fn for_key(key: &str) -> FlipTransition {
        match key {
            " " | "Spacebar" | "Enter" => FlipTransition::Toggle,
            "Escape" | "Esc" => FlipTransition::ForceFront,
            _ => FlipTransition::None,
        }
    }

    /// Transition triggered by a pointer click on the card surface.
    pub fn for_click() -> FlipTransition {
        FlipTransition::Toggle
    }

    /// Transition for a click on the back-face link. Following the link
    /// never flips the card.
    pub fn for_link_click() -> FlipTransition {
        FlipTransition::None
    }

    /// Transition for a key pressed while the back-face link has focus.
    ///
    /// Space and Enter activate the link instead of flipping; Escape still
    /// returns the card to its front.
    pub fn for_link_key(key: &str) -> FlipTransition {
        match FlipTransition::for_key(key) {
            FlipTransition::Toggle => FlipTransition::None,
            other => other,
        }
    }
}

/// Flip state of a single card instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    face: Face,
}

impl FlipState {
    /// Create a card state showing `face`.
    pub fn new(face: Face) -> Self {
        Self { face }
    }

    /// Create from a boolean "flipped" flag.
    pub fn from_flipped(flipped: bool) -> Self {
        Self::new(if flipped { Face::Back } else { Face::Front })
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == Face::Back
    }

    /// Apply a transition, returning whether the face changed.
    pub fn apply(&mut self, transition: FlipTransition) -> bool {
        let next = match transition {
            FlipTransition::Toggle => self.face.flipped(),
            FlipTransition::ForceFront => Face::Front,
            FlipTransition::None => self.face,
        };
        let changed = next != self.face;
        self.face = next;
        changed
    }

    pub fn toggle(&mut self) {
        self.apply(FlipTransition::Toggle);
    }

    pub fn force_front(&mut self) {
        self.apply(FlipTransition::ForceFront);
    }

    /// Whether `face` should be hidden from assistive technology.
    pub fn is_hidden(&self, face: Face) -> bool {
        self.face != face
    }

    /// Accessible name for the card surface.
    pub fn aria_label(&self, title: &str) -> String {
        format!("{} card, showing {}", title, self.face.as_str())
    }

    /// Usage hint announced alongside the card.
    pub fn instruction(&self) -> &'static str {
        match self.face {
            Face::Front => "Press Enter or Space to flip to the back.",
            Face::Back => "Press Enter or Space to flip to the front, or Escape to return to the front.",
        }
    }
}
