//! core::cell
//!
//! A single cell and its connector table.
//!
//! # Architecture
//!
//! A cell never holds another cell. Each neighbor slot stores a
//! [`CellKey`] that is resolved through the owning
//! [`Tissue`](super::tissue::Tissue), so the cyclic neighbor graph needs no
//! shared ownership.
//!
//! Slots are only written by the tissue's connection protocol; this module
//! exposes read access publicly and slot mutation to the crate.

use std::collections::BTreeMap;

use super::types::{CellKey, Dimension, Direction};

/// The pair of neighbor slots a cell has in one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Connectors {
    positive: Option<CellKey>,
    negative: Option<CellKey>,
}

impl Connectors {
    /// The neighbor in `direction`, if any.
    pub fn get(&self, direction: Direction) -> Option<CellKey> {
        match direction {
            Direction::Positive => self.positive,
            Direction::Negative => self.negative,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, neighbor: Option<CellKey>) {
        match direction {
            Direction::Positive => self.positive = neighbor,
            Direction::Negative => self.negative = neighbor,
        }
    }

    /// True when both slots are empty.
    pub fn is_empty(&self) -> bool {
        self.positive.is_none() && self.negative.is_none()
    }
}

/// A node holding a value and its per-dimension neighbors.
///
/// Cells are created only by a [`Tissue`](super::tissue::Tissue) and
/// handed out by reference; the key is fixed for the cell's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<V> {
    key: CellKey,
    value: V,
    connectors: BTreeMap<Dimension, Connectors>,
}

impl<V> Cell<V> {
    pub(crate) fn new(key: CellKey, value: V) -> Self {
        Self {
            key,
            value,
            connectors: BTreeMap::new(),
        }
    }

    /// The cell's key.
    pub fn key(&self) -> CellKey {
        self.key
    }

    /// The cell's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The neighbor in (`dimension`, `direction`), or `None`.
    ///
    /// A dimension the cell has never been linked in has no neighbors.
    pub fn next_step(&self, dimension: &Dimension, direction: Direction) -> Option<CellKey> {
        self.connectors
            .get(dimension)
            .and_then(|slots| slots.get(direction))
    }

    /// The connector pair for `dimension`, if the cell has one.
    pub fn connectors(&self, dimension: &Dimension) -> Option<&Connectors> {
        self.connectors.get(dimension)
    }

    /// Dimensions the cell has taken part in, in sorted order.
    ///
    /// A dimension stays listed after its links are severed; its slots
    /// are simply empty.
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.connectors.keys()
    }

    /// Iterate every (dimension, connectors) entry in sorted order.
    pub fn iter_connectors(&self) -> impl Iterator<Item = (&Dimension, &Connectors)> {
        self.connectors.iter()
    }

    /// Ensure the cell has a connector entry for `dimension`.
    ///
    /// New entries start with both slots empty.
    pub(crate) fn ensure_dimension(&mut self, dimension: &Dimension) -> &mut Connectors {
        self.connectors.entry(dimension.clone()).or_default()
    }

    /// Write one slot of an existing dimension entry.
    ///
    /// Callers run [`Cell::ensure_dimension`] first. Without an entry the
    /// cell is left unchanged.
    pub(crate) fn set_slot(
        &mut self,
        dimension: &Dimension,
        direction: Direction,
        neighbor: Option<CellKey>,
    ) {
        match self.connectors.get_mut(dimension) {
            Some(slots) => slots.set(direction, neighbor),
            None => tracing::debug!(key = %self.key, %dimension, "slot write without entry"),
        }
    }

    /// Clear one slot if the cell has the dimension at all.
    pub(crate) fn clear_slot(&mut self, dimension: &Dimension, direction: Direction) {
        self.set_slot(dimension, direction, None);
    }

    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Cell<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
