//! core
//!
//! Core domain types and the zigzag structure itself.
//!
//! # Modules
//!
//! - [`types`] - Strong types: CellKey, Dimension, Direction
//! - [`cell`] - A cell and its per-dimension connector table
//! - [`tissue`] - The registry that owns cells and the connection protocol
//! - [`rank`] - Walking a chain of cells along one dimension
//! - [`verify`] - Fast verification of tissue invariants
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Cells refer to each other by key, never by reference
//! - Every mutation either completes or leaves the tissue untouched

pub mod cell;
pub mod config;
pub mod rank;
pub mod tissue;
pub mod types;
pub mod verify;
