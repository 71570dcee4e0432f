//! Zigzag - multi-dimensional doubly-linked cell structures
//!
//! A zigzag structure, after Ted Nelson's hypertext model, is a set of cells
//! where every cell can sit in any number of independent chains at once.
//! Each chain runs along a named dimension, and a cell has at most one
//! Positive and one Negative neighbor per dimension.
//!
//! # Architecture
//!
//! - [`core`] - Cells, the tissue registry, traversal, verification, config
//! - [`cli`] - Command-line interface for the `zz` binary
//! - [`ui`] - Console output helpers
//!
//! # Correctness Invariants
//!
//! The tissue maintains the following invariants:
//!
//! 1. Links are symmetric: if A is B's Positive neighbor, B is A's Negative
//!    neighbor in the same dimension
//! 2. No cell references a deleted cell
//! 3. Keys are never reused
//! 4. A failed operation changes nothing

pub mod cli;
pub mod core;
pub mod ui;
