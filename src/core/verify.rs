//! core::verify
//!
//! Fast verification of tissue invariants.
//!
//! # Checks
//!
//! - Every neighbor key names a registered cell
//! - Every link is symmetric: if C's (D, Dir) neighbor is N, N's
//!   (D, Dir.other()) neighbor is C
//!
//! # Invariants
//!
//! - Never mutates the tissue
//! - Must be deterministic (cells in key order, dimensions sorted)

use super::tissue::Tissue;
use super::types::{CellKey, Dimension, Direction};
use serde::Serialize;
use thiserror::Error;

/// Errors from verification.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum VerifyError {
    #[error("{key} {dimension}/{direction} points at unregistered cell {missing}")]
    DanglingLink {
        key: CellKey,
        dimension: Dimension,
        direction: Direction,
        missing: CellKey,
    },

    #[error("{key} {dimension}/{direction} points at {neighbor}, which points back at {back:?}")]
    Asymmetric {
        key: CellKey,
        dimension: Dimension,
        direction: Direction,
        neighbor: CellKey,
        back: Option<CellKey>,
    },
}

/// Result of fast verification.
#[derive(Debug, Serialize)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Errors found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }
}

/// Check every slot of every cell.
pub fn fast_verify<V>(tissue: &Tissue<V>) -> VerifyResult {
    let mut errors = Vec::new();

    for cell in tissue.cells() {
        for (dimension, slots) in cell.iter_connectors() {
            for direction in Direction::ALL {
                let Some(neighbor) = slots.get(direction) else {
                    continue;
                };

                match tissue.get(neighbor) {
                    Err(_) => errors.push(VerifyError::DanglingLink {
                        key: cell.key(),
                        dimension: dimension.clone(),
                        direction,
                        missing: neighbor,
                    }),
                    Ok(other) => {
                        let back = other.next_step(dimension, direction.other());
                        if back != Some(cell.key()) {
                            errors.push(VerifyError::Asymmetric {
                                key: cell.key(),
                                dimension: dimension.clone(),
                                direction,
                                neighbor,
                                back,
                            });
                        }
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(name: &str) -> Dimension {
        Dimension::new(name).unwrap()
    }

    #[test]
    fn empty_tissue_passes() {
        let tissue: Tissue<()> = Tissue::new();
        let result = fast_verify(&tissue);
        assert!(result.ok);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn built_structure_passes() {
        let x = dim("x");
        let y = dim("y");
        let mut tissue = Tissue::new();
        let a = tissue.start("a");
        let b = tissue.add(a, &x, "b", Direction::Positive).unwrap();
        let c = tissue.add(b, &y, "c", Direction::Negative).unwrap();
        tissue.connect(c, a, &x, Direction::Negative, true).unwrap();
        tissue.delete(b).unwrap();

        assert!(fast_verify(&tissue).ok);
    }

    #[test]
    fn detects_asymmetric_link() {
        let x = dim("x");
        let mut tissue = Tissue::new();
        let a = tissue.start("a");
        let b = tissue.add(a, &x, "b", Direction::Positive).unwrap();
        // Break the reciprocal slot directly.
        let mut broken = tissue.clone();
        broken.cell_for_test(b).clear_slot(&x, Direction::Negative);

        let result = fast_verify(&broken);
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec![VerifyError::Asymmetric {
                key: a,
                dimension: x,
                direction: Direction::Positive,
                neighbor: b,
                back: None,
            }]
        );
    }

    #[test]
    fn detects_dangling_link() {
        let x = dim("x");
        let mut tissue = Tissue::new();
        let a = tissue.start("a");
        let cell = tissue.cell_for_test(a);
        cell.ensure_dimension(&x);
        cell.set_slot(&x, Direction::Positive, Some(CellKey::new(77)));

        let result = fast_verify(&tissue);
        assert_eq!(
            result.errors,
            vec![VerifyError::DanglingLink {
                key: a,
                dimension: x,
                direction: Direction::Positive,
                missing: CellKey::new(77),
            }]
        );
    }
}
