//! core::tissue
//!
//! The registry that owns every cell and enforces the connection protocol.
//!
//! # Architecture
//!
//! A tissue is an arena: cells live in a key-ordered map and refer to one
//! another by [`CellKey`]. The tissue is the only way to create a cell
//! ([`Tissue::start`], [`Tissue::add`]) or destroy one ([`Tissue::delete`]),
//! and every slot write goes through [`Tissue::connect`] or
//! [`Tissue::disconnect`].
//!
//! # Invariants
//!
//! - Symmetry: if cell C's (D, Dir) neighbor is N, then N's (D, Dir.other())
//!   neighbor is C
//! - No dangling links: every neighbor key names a registered cell
//! - Keys are unique and never reused, including after deletion
//! - A failed operation leaves every slot unchanged
//!
//! # Example
//!
//! ```
//! use zigzag::core::tissue::Tissue;
//! use zigzag::core::types::{Dimension, Direction};
//!
//! let x = Dimension::new("x").unwrap();
//! let mut tissue = Tissue::new();
//!
//! let a = tissue.start("a");
//! let b = tissue.add(a, &x, "b", Direction::Positive).unwrap();
//! let c = tissue.add(b, &x, "c", Direction::Positive).unwrap();
//!
//! tissue.delete(b).unwrap();
//! assert_eq!(tissue.next_step(a, &x, Direction::Positive).unwrap(), Some(c));
//! assert_eq!(tissue.next_step(c, &x, Direction::Negative).unwrap(), Some(a));
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use super::cell::Cell;
use super::types::{CellKey, Dimension, Direction};

/// Errors from tissue operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TissueError {
    #[error("unknown cell key: {0}")]
    UnknownKey(CellKey),

    #[error("connection already exists: {key} {dimension}/{direction} is occupied by {occupant}")]
    ConnectionExists {
        key: CellKey,
        dimension: Dimension,
        direction: Direction,
        occupant: CellKey,
    },

    #[error("dangling link: {key} {dimension}/{direction} points at unregistered {missing}")]
    DanglingLink {
        key: CellKey,
        dimension: Dimension,
        direction: Direction,
        missing: CellKey,
    },
}

/// One dimension's repair around a deleted cell: (dimension, negative, positive).
type Splice = (Dimension, Option<CellKey>, Option<CellKey>);

/// The registry of cells.
///
/// `V` is the payload type; the tissue never inspects it.
#[derive(Debug, Clone)]
pub struct Tissue<V> {
    cells: BTreeMap<CellKey, Cell<V>>,
    next_key: u64,
}

impl<V> Default for Tissue<V> {
    fn default() -> Self {
        Self {
            cells: BTreeMap::new(),
            next_key: 0,
        }
    }
}

impl<V> Tissue<V> {
    /// Create an empty tissue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unconnected root cell holding `value`.
    pub fn start(&mut self, value: V) -> CellKey {
        let key = self.allocate(value);
        tracing::debug!(%key, "started cell");
        key
    }

    /// Create a cell holding `value` linked to `key` in (`dimension`, `direction`).
    ///
    /// The new cell becomes `key`'s `direction` neighbor. A new cell never
    /// displaces an existing link.
    ///
    /// # Errors
    ///
    /// - `TissueError::UnknownKey` if `key` is not registered
    /// - `TissueError::ConnectionExists` if `key` already has a neighbor in
    ///   that slot; no key is allocated in that case
    pub fn add(
        &mut self,
        key: CellKey,
        dimension: &Dimension,
        value: V,
        direction: Direction,
    ) -> Result<CellKey, TissueError> {
        if let Some(occupant) = self.get(key)?.next_step(dimension, direction) {
            return Err(TissueError::ConnectionExists {
                key,
                dimension: dimension.clone(),
                direction,
                occupant,
            });
        }

        let new_key = self.allocate(value);
        self.connect(key, new_key, dimension, direction, false)?;
        tracing::debug!(from = %key, key = %new_key, %dimension, %direction, "added cell");
        Ok(new_key)
    }

    /// Remove a cell and splice every dimension chain it sat in.
    ///
    /// In each dimension, the removed cell's Negative neighbor N is linked
    /// straight to its Positive neighbor P. If only one of them exists its
    /// link to the removed cell is severed. Returns the removed value.
    ///
    /// # Errors
    ///
    /// - `TissueError::UnknownKey` if `key` is not registered
    /// - `TissueError::DanglingLink` if a neighbor of `key` is not registered;
    ///   nothing is changed in that case
    pub fn delete(&mut self, key: CellKey) -> Result<V, TissueError> {
        let splices = self.plan_cross_connect(key)?;

        for (dimension, negative, positive) in &splices {
            self.cross_connect(key, dimension, *negative, *positive)?;
        }

        let Some(cell) = self.cells.remove(&key) else {
            return Err(TissueError::UnknownKey(key));
        };
        tracing::debug!(%key, dimensions = splices.len(), "deleted cell");
        Ok(cell.into_value())
    }

    /// Link `from` to `to` so that `to` is `from`'s `direction` neighbor.
    ///
    /// Four slots are involved: `from`'s (`dimension`, `direction`) slot,
    /// `to`'s (`dimension`, `direction.other()`) slot, and the reciprocal
    /// slots of whichever cells currently occupy those two. With `replace`
    /// set, each displaced occupant has its reciprocal slot cleared so it
    /// is left cleanly unlinked rather than pointing at a cell that no
    /// longer points back.
    ///
    /// Every check runs before any slot is written.
    ///
    /// # Errors
    ///
    /// - `TissueError::UnknownKey` if either key is not registered
    /// - `TissueError::ConnectionExists` if `replace` is false and either
    ///   slot already holds a different cell
    /// - `TissueError::DanglingLink` if a displaced occupant is not registered
    pub fn connect(
        &mut self,
        from: CellKey,
        to: CellKey,
        dimension: &Dimension,
        direction: Direction,
        replace: bool,
    ) -> Result<(), TissueError> {
        let forward = self
            .get(from)?
            .next_step(dimension, direction)
            .filter(|&occupant| occupant != to);
        let backward = self
            .get(to)?
            .next_step(dimension, direction.other())
            .filter(|&occupant| occupant != from);

        for (key, slot, displaced) in [
            (from, direction, forward),
            (to, direction.other(), backward),
        ] {
            let Some(occupant) = displaced else {
                continue;
            };
            if !replace {
                return Err(TissueError::ConnectionExists {
                    key,
                    dimension: dimension.clone(),
                    direction: slot,
                    occupant,
                });
            }
            if !self.cells.contains_key(&occupant) {
                return Err(TissueError::DanglingLink {
                    key,
                    dimension: dimension.clone(),
                    direction: slot,
                    missing: occupant,
                });
            }
        }

        if let Some(occupant) = forward {
            self.cell_mut(occupant)?
                .clear_slot(dimension, direction.other());
            tracing::debug!(key = %occupant, %dimension, "severed displaced neighbor");
        }
        if let Some(occupant) = backward {
            self.cell_mut(occupant)?.clear_slot(dimension, direction);
            tracing::debug!(key = %occupant, %dimension, "severed displaced neighbor");
        }

        for key in [from, to] {
            self.cell_mut(key)?.ensure_dimension(dimension);
        }
        for (key, slot, neighbor) in [(from, direction, to), (to, direction.other(), from)] {
            let cell = self.cell_mut(key)?;
            cell.set_slot(dimension, slot, Some(neighbor));
        }

        tracing::debug!(%from, %to, %dimension, %direction, "connected cells");
        Ok(())
    }

    /// Sever `key`'s link in (`dimension`, `direction`) on both ends.
    ///
    /// Returns the former neighbor, or `None` if the slot was empty.
    ///
    /// # Errors
    ///
    /// - `TissueError::UnknownKey` if `key` is not registered
    /// - `TissueError::DanglingLink` if the neighbor is not registered
    pub fn disconnect(
        &mut self,
        key: CellKey,
        dimension: &Dimension,
        direction: Direction,
    ) -> Result<Option<CellKey>, TissueError> {
        let Some(neighbor) = self.get(key)?.next_step(dimension, direction) else {
            return Ok(None);
        };
        if !self.cells.contains_key(&neighbor) {
            return Err(TissueError::DanglingLink {
                key,
                dimension: dimension.clone(),
                direction,
                missing: neighbor,
            });
        }

        self.cell_mut(key)?.clear_slot(dimension, direction);
        self.cell_mut(neighbor)?
            .clear_slot(dimension, direction.other());

        tracing::debug!(%key, %neighbor, %dimension, %direction, "disconnected cells");
        Ok(Some(neighbor))
    }

    /// The neighbor of `key` in (`dimension`, `direction`).
    ///
    /// # Errors
    ///
    /// Returns `TissueError::UnknownKey` if `key` is not registered.
    pub fn next_step(
        &self,
        key: CellKey,
        dimension: &Dimension,
        direction: Direction,
    ) -> Result<Option<CellKey>, TissueError> {
        Ok(self.get(key)?.next_step(dimension, direction))
    }

    /// Look up a cell.
    ///
    /// # Errors
    ///
    /// Returns `TissueError::UnknownKey` if `key` was never registered or
    /// has been deleted.
    pub fn get(&self, key: CellKey) -> Result<&Cell<V>, TissueError> {
        self.cells.get(&key).ok_or(TissueError::UnknownKey(key))
    }

    /// The value held by `key`.
    ///
    /// # Errors
    ///
    /// Returns `TissueError::UnknownKey` if `key` is not registered.
    pub fn value(&self, key: CellKey) -> Result<&V, TissueError> {
        self.get(key).map(Cell::value)
    }

    /// Check if `key` is registered.
    pub fn contains(&self, key: CellKey) -> bool {
        self.cells.contains_key(&key)
    }

    /// Number of registered cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the tissue has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Registered keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.cells.keys().copied()
    }

    /// Registered cells in ascending key order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<V>> {
        self.cells.values()
    }

    fn allocate(&mut self, value: V) -> CellKey {
        let key = CellKey::new(self.next_key);
        self.next_key += 1;
        self.cells.insert(key, Cell::new(key, value));
        key
    }

    fn cell_mut(&mut self, key: CellKey) -> Result<&mut Cell<V>, TissueError> {
        self.cells.get_mut(&key).ok_or(TissueError::UnknownKey(key))
    }

    /// Raw slot access for corrupting a tissue in tests.
    #[cfg(test)]
    pub(crate) fn cell_for_test(&mut self, key: CellKey) -> &mut Cell<V> {
        self.cells.get_mut(&key).expect("cell should be registered")
    }

    /// Collect (dimension, negative, positive) for every dimension of `key`.
    ///
    /// Self-loops are reported as absent. Fails before anything is written
    /// if a neighbor is missing.
    fn plan_cross_connect(&self, key: CellKey) -> Result<Vec<Splice>, TissueError> {
        let cell = self.get(key)?;
        let mut splices = Vec::new();

        for (dimension, slots) in cell.iter_connectors() {
            let neighbor = |direction| slots.get(direction).filter(|&n| n != key);
            for direction in Direction::ALL {
                let Some(other) = neighbor(direction) else {
                    continue;
                };
                if !self.cells.contains_key(&other) {
                    return Err(TissueError::DanglingLink {
                        key,
                        dimension: dimension.clone(),
                        direction,
                        missing: other,
                    });
                }
            }

            let negative = neighbor(Direction::Negative);
            let positive = neighbor(Direction::Positive);
            if negative.is_some() || positive.is_some() {
                splices.push((dimension.clone(), negative, positive));
            }
        }

        Ok(splices)
    }

    /// Repair one dimension around `key` before it is removed.
    ///
    /// `key` is still registered here, so relinking N to P with replace
    /// clears `key`'s own slots through the ordinary displacement path.
    fn cross_connect(
        &mut self,
        key: CellKey,
        dimension: &Dimension,
        negative: Option<CellKey>,
        positive: Option<CellKey>,
    ) -> Result<(), TissueError> {
        match (negative, positive) {
            (Some(negative), Some(positive)) => {
                self.connect(negative, positive, dimension, Direction::Positive, true)
            }
            (Some(_), None) => {
                self.disconnect(key, dimension, Direction::Negative)?;
                Ok(())
            }
            (None, Some(_)) => {
                self.disconnect(key, dimension, Direction::Positive)?;
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }
}
