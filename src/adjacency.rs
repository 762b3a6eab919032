//! Slot adjacency rules: conflicts and idle windows.
//!
//! Two pure predicates over a pair of time slots and two configured
//! minute thresholds. Both order the pair internally, so they are
//! symmetric in their arguments.

use crate::model::TimeSlot;
use serde::{Deserialize, Serialize};

/// Minute thresholds for the two adjacency predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyRules {
    /// Minimum break between consecutive slots; anything tighter is a
    /// conflict — the entity cannot physically attend both.
    pub min_break_min: i64,
    /// Minimum idle gap that counts as a scheduling window.
    pub min_window_min: i64,
}

impl Default for AdjacencyRules {
    fn default() -> Self {
        Self {
            min_break_min: 10,
            min_window_min: 60,
        }
    }
}

impl AdjacencyRules {
    /// True when the two slots are identical, or so close together that
    /// attending both is impossible.
    pub fn is_conflict(&self, a: &TimeSlot, b: &TimeSlot) -> bool {
        if a == b {
            return true;
        }
        let (first, second) = ordered(a, b);
        first.gap_minutes(second) < self.min_break_min
    }

    /// True when the gap between two distinct slots is long enough to be
    /// an idle window. Identical slots are never a window.
    pub fn is_window(&self, a: &TimeSlot, b: &TimeSlot) -> bool {
        if a == b {
            return false;
        }
        let (first, second) = ordered(a, b);
        first.gap_minutes(second) >= self.min_window_min
    }
}

fn ordered<'a>(a: &'a TimeSlot, b: &'a TimeSlot) -> (&'a TimeSlot, &'a TimeSlot) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
