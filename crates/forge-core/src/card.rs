//! Card dataset.
//!
//! Cards are defined at build time in JSON and never change at runtime.
//! A [`CardDeck`] is the ordered set rendered by one carousel; card ids
//! must be unique within it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, ForgeResult};

const BUNDLED_CARDS: &str = include_str!("../data/cards.json");

/// Static description of one product card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub title: String,
    pub tier: String,
    pub price: String,
    pub front_image: String,
    pub back_image: String,
    /// Call-to-action destination, merged with attribution when rendered
    #[serde(alias = "qrHref")]
    pub destination_link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Ordered cards with unique ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardDeck {
    cards: Vec<CardRecord>,
}

impl CardDeck {
    /// Build a deck, rejecting empty or repeated ids.
    pub fn new(cards: Vec<CardRecord>) -> ForgeResult<Self> {
        let mut seen = HashSet::new();
        for (position, card) in cards.iter().enumerate() {
            if card.id.is_empty() {
                return Err(ForgeError::EmptyCardId(position));
            }
            if !seen.insert(card.id.as_str()) {
                return Err(ForgeError::DuplicateCardId(card.id.clone()));
            }
        }
        Ok(Self { cards })
    }

    /// Parse a JSON array of cards.
    pub fn from_json(json: &str) -> ForgeResult<Self> {
        let cards: Vec<CardRecord> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// The deck shipped with the site.
    pub fn bundled() -> ForgeResult<Self> {
        Self::from_json(BUNDLED_CARDS)
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a CardDeck {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
