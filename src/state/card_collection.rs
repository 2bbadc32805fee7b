//! Accumulated cards and the loading flag.

use crate::model::Card;
use serde::{Deserialize, Serialize};

/// Cards fetched so far, in arrival order.
///
/// `items` is append-only except for [`CardCollection::clear`]. Each clear
/// starts a new generation; replies to requests issued in an earlier
/// generation must not be appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    items: Vec<Card>,
    fetching: bool,
    in_flight: usize,
    generation: u64,
}

impl CardCollection {
    /// Empty collection, not fetching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in display order.
    pub fn items(&self) -> &[Card] {
        &self.items
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no cards are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a request is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Requests started but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Number of clears so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Set the loading flag directly.
    pub fn set_fetching(&mut self, fetching: bool) {
        self.fetching = fetching;
    }

    /// `items := items ++ cards`. No reordering, no deduplication.
    pub fn append_cards(&mut self, cards: Vec<Card>) {
        self.items.extend(cards);
    }

    /// `items := []` and start a new generation.
    pub fn clear(&mut self) {
        self.items.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Record the start of a request; the flag goes up.
    pub fn begin_request(&mut self) {
        self.in_flight += 1;
        self.set_fetching(true);
    }

    /// Record the resolution of a request, whatever its outcome. The flag
    /// drops once nothing is outstanding.
    pub fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.set_fetching(false);
        }
    }
}
