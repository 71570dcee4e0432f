//! core::rank
//!
//! Walking a dimension.
//!
//! A rank is the chain of cells reachable from one cell by repeatedly
//! stepping in one dimension. A rank either ends (a cell with no neighbor
//! in the walking direction) or closes back on its starting cell (a ring).
//!
//! # Example
//!
//! ```
//! use zigzag::core::tissue::Tissue;
//! use zigzag::core::types::{Dimension, Direction};
//!
//! let sibling = Dimension::new("sibling").unwrap();
//! let mut tissue = Tissue::new();
//! let ann = tissue.start("Ann");
//! let andrew = tissue.add(ann, &sibling, "Andrew", Direction::Positive).unwrap();
//! let edward = tissue.add(andrew, &sibling, "Edward", Direction::Positive).unwrap();
//!
//! let rank: Vec<_> = tissue.rank(ann, &sibling, Direction::Positive).unwrap().collect();
//! assert_eq!(rank, vec![ann, andrew, edward]);
//! assert_eq!(tissue.head(edward, &sibling).unwrap(), ann);
//! assert!(!tissue.is_ring(ann, &sibling).unwrap());
//! ```

use super::tissue::{Tissue, TissueError};
use super::types::{CellKey, Dimension, Direction};

/// Iterator over the keys of a rank, starting cell first.
///
/// Stops at the end of the chain, on returning to the starting cell, or
/// after visiting as many cells as the tissue holds.
#[derive(Debug)]
pub struct Rank<'a, V> {
    tissue: &'a Tissue<V>,
    dimension: &'a Dimension,
    direction: Direction,
    start: CellKey,
    next: Option<CellKey>,
    remaining: usize,
    closed: bool,
}

impl<V> Rank<'_, V> {
    /// True once the walk has stepped back onto its starting cell.
    ///
    /// Only meaningful after the iterator is exhausted.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<V> Iterator for Rank<'_, V> {
    type Item = CellKey;

    fn next(&mut self) -> Option<CellKey> {
        let current = self.next.take()?;

        if self.remaining == 0 {
            tracing::warn!(
                start = %self.start,
                dimension = %self.dimension,
                "rank walk visited every cell without ending, truncating"
            );
            return None;
        }
        self.remaining -= 1;

        let step = match self.tissue.get(current) {
            Ok(cell) => cell.next_step(self.dimension, self.direction),
            Err(err) => {
                tracing::warn!(%current, %err, "rank walk reached an unregistered cell");
                None
            }
        };

        match step {
            Some(key) if key == self.start => self.closed = true,
            other => self.next = other,
        }

        Some(current)
    }
}

impl<V> Tissue<V> {
    /// Walk from `start` in (`dimension`, `direction`).
    ///
    /// The first item is always `start` itself.
    ///
    /// # Errors
    ///
    /// Returns `TissueError::UnknownKey` if `start` is not registered.
    pub fn rank<'a>(
        &'a self,
        start: CellKey,
        dimension: &'a Dimension,
        direction: Direction,
    ) -> Result<Rank<'a, V>, TissueError> {
        self.get(start)?;
        Ok(Rank {
            tissue: self,
            dimension,
            direction,
            start,
            next: Some(start),
            remaining: self.len(),
            closed: false,
        })
    }

    /// The first cell of `start`'s rank in `dimension`.
    ///
    /// Walks Negative to the end of the chain. For a ring there is no
    /// first cell, so `start` is returned.
    ///
    /// # Errors
    ///
    /// Returns `TissueError::UnknownKey` if `start` is not registered.
    pub fn head(&self, start: CellKey, dimension: &Dimension) -> Result<CellKey, TissueError> {
        self.end(start, dimension, Direction::Negative)
    }

    /// The last cell reached walking from `start` in `direction`.
    ///
    /// Returns `start` for a ring.
    ///
    /// # Errors
    ///
    /// Returns `TissueError::UnknownKey` if `start` is not registered.
    pub fn end(
        &self,
        start: CellKey,
        dimension: &Dimension,
        direction: Direction,
    ) -> Result<CellKey, TissueError> {
        let mut rank = self.rank(start, dimension, direction)?;
        let last = rank.by_ref().last().unwrap_or(start);
        if rank.is_closed() {
            Ok(start)
        } else {
            Ok(last)
        }
    }

    /// Check if `start`'s rank in `dimension` closes into a ring.
    ///
    /// # Errors
    ///
    /// Returns `TissueError::UnknownKey` if `start` is not registered.
    pub fn is_ring(&self, start: CellKey, dimension: &Dimension) -> Result<bool, TissueError> {
        let mut rank = self.rank(start, dimension, Direction::Positive)?;
        rank.by_ref().for_each(drop);
        Ok(rank.is_closed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction::{Negative, Positive};

    fn dim(name: &str) -> Dimension {
        Dimension::new(name).unwrap()
    }

    fn chain(len: usize) -> (Tissue<usize>, Vec<CellKey>) {
        let x = dim("x");
        let mut tissue = Tissue::new();
        let mut keys = vec![tissue.start(0)];
        for i in 1..len {
            let last = keys[i - 1];
            keys.push(tissue.add(last, &x, i, Positive).unwrap());
        }
        (tissue, keys)
    }

    fn walk<V>(tissue: &Tissue<V>, start: CellKey, direction: Direction) -> Vec<CellKey> {
        let x = dim("x");
        tissue.rank(start, &x, direction).unwrap().collect()
    }

    #[test]
    fn single_cell_rank() {
        let (tissue, keys) = chain(1);
        assert_eq!(walk(&tissue, keys[0], Positive), vec![keys[0]]);
    }

    #[test]
    fn rank_follows_direction() {
        let (tissue, keys) = chain(4);

        let forward = walk(&tissue, keys[1], Positive);
        assert_eq!(forward, vec![keys[1], keys[2], keys[3]]);

        let backward = walk(&tissue, keys[2], Negative);
        assert_eq!(backward, vec![keys[2], keys[1], keys[0]]);
    }

    #[test]
    fn rank_in_unused_dimension_is_just_start() {
        let (tissue, keys) = chain(3);
        let y = dim("y");
        let rank: Vec<_> = tissue.rank(keys[1], &y, Positive).unwrap().collect();
        assert_eq!(rank, vec![keys[1]]);
    }

    #[test]
    fn rank_of_unknown_key_fails() {
        let x = dim("x");
        let (tissue, _) = chain(1);
        assert!(matches!(
            tissue.rank(CellKey::new(99), &x, Positive),
            Err(TissueError::UnknownKey(_))
        ));
    }

    #[test]
    fn ring_visits_each_cell_once() {
        let x = dim("x");
        let (mut tissue, keys) = chain(3);
        tissue
            .connect(keys[2], keys[0], &x, Positive, false)
            .unwrap();

        let rank = walk(&tissue, keys[1], Positive);
        assert_eq!(rank, vec![keys[1], keys[2], keys[0]]);
        assert!(tissue.is_ring(keys[1], &x).unwrap());
    }

    #[test]
    fn ring_walk_reports_closed() {
        let x = dim("x");
        let (mut tissue, keys) = chain(2);
        tissue
            .connect(keys[1], keys[0], &x, Positive, false)
            .unwrap();

        let mut rank = tissue.rank(keys[0], &x, Negative).unwrap();
        assert!(!rank.is_closed());
        assert_eq!(rank.by_ref().count(), 2);
        assert!(rank.is_closed());
    }

    #[test]
    fn head_of_chain() {
        let x = dim("x");
        let (tissue, keys) = chain(4);
        assert_eq!(tissue.head(keys[3], &x).unwrap(), keys[0]);
        assert_eq!(tissue.head(keys[0], &x).unwrap(), keys[0]);
    }

    #[test]
    fn end_of_chain() {
        let x = dim("x");
        let (tissue, keys) = chain(4);
        assert_eq!(tissue.end(keys[1], &x, Positive).unwrap(), keys[3]);
        assert_eq!(tissue.end(keys[1], &x, Negative).unwrap(), keys[0]);
    }

    #[test]
    fn head_of_ring_is_start() {
        let x = dim("x");
        let (mut tissue, keys) = chain(3);
        tissue
            .connect(keys[2], keys[0], &x, Positive, false)
            .unwrap();
        assert_eq!(tissue.head(keys[1], &x).unwrap(), keys[1]);
    }

    #[test]
    fn chain_is_not_ring() {
        let x = dim("x");
        let (tissue, keys) = chain(3);
        assert!(!tissue.is_ring(keys[0], &x).unwrap());
    }

    #[test]
    fn self_ring() {
        let x = dim("x");
        let (mut tissue, keys) = chain(1);
        tissue
            .connect(keys[0], keys[0], &x, Positive, false)
            .unwrap();
        assert!(tissue.is_ring(keys[0], &x).unwrap());
        assert_eq!(walk(&tissue, keys[0], Negative), vec![keys[0]]);
    }
}
