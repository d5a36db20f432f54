//! Deterministic scheduling of carrier positions.
//!
//! Embedding and extraction have to agree on where every payload bit lives. Both sides
//! derive the positions from the same [`LcgParams`] and the carrier capacity, so the
//! positions themselves never need to be transmitted.

mod index_file;
mod recurrence;

use std::collections::BTreeMap;
use std::ops::Deref;

pub use index_file::{read_index_file, write_index_file};
pub use recurrence::{LcgParams, Recurrence};

/// Position where the ascending order of an [`IndexSequence`] breaks
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct OrderViolation {
    pub position: usize,
    pub index: u64,
    pub previous: u64,
}

/// Ordered carrier positions, one per payload bit.
///
/// Positions may repeat and may decrease after a wrap, nothing here enforces an order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct IndexSequence(Vec<u64>);

impl IndexSequence {
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }

    /// finds the first position `i` where `index[i] <= index[i - 1]`
    pub fn first_order_violation(&self) -> Option<OrderViolation> {
        self.0
            .windows(2)
            .position(|w| w[1] <= w[0])
            .map(|i| OrderViolation {
                position: i + 1,
                index: self.0[i + 1],
                previous: self.0[i],
            })
    }

    /// all positions that are scheduled more than once, with their number of occurrences
    pub fn collisions(&self) -> BTreeMap<u64, usize> {
        let mut seen = BTreeMap::new();
        for i in self.0.iter() {
            *seen.entry(*i).or_insert(0_usize) += 1;
        }
        seen.retain(|_, n| *n > 1);
        seen
    }
}

impl Deref for IndexSequence {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u64>> for IndexSequence {
    fn from(indices: Vec<u64>) -> Self {
        Self(indices)
    }
}

impl FromIterator<u64> for IndexSequence {
    fn from_iter<T: IntoIterator<Item = u64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
