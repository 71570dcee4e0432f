//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CellKey`] - Registry-assigned cell identity
//! - [`Dimension`] - Validated dimension name
//! - [`Direction`] - Positive or Negative end of a dimension
//!
//! # Validation
//!
//! Dimension names are validated at construction time. An invalid name
//! cannot be represented, so every connector table is keyed by a name
//! that prints and compares cleanly.
//!
//! # Examples
//!
//! ```
//! use zigzag::core::types::{Dimension, Direction};
//!
//! let sibling = Dimension::new("sibling").unwrap();
//! assert_eq!(sibling.as_str(), "sibling");
//! assert_eq!(Direction::Positive.other(), Direction::Negative);
//!
//! assert!(Dimension::new("").is_err());
//! assert!(Dimension::new("has\ttab").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid dimension name: {0}")]
    InvalidDimension(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),
}

/// Identity of a cell within one tissue.
///
/// Keys are allocated by the tissue from a monotonically increasing
/// counter. A key is never reused, even after its cell is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellKey(u64);

impl CellKey {
    /// Wrap a raw key value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw key value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated dimension name.
///
/// Dimensions are open-ended: any name passing validation may be used,
/// and a cell acquires a dimension the first time it is linked in it.
///
/// Names must:
/// - Not be empty
/// - Not start or end with whitespace
/// - Not contain ASCII control characters
///
/// # Example
///
/// ```
/// use zigzag::core::types::Dimension;
///
/// let generation = Dimension::new("generation").unwrap();
/// assert_eq!(generation.to_string(), "generation");
///
/// assert!(Dimension::new(" padded").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dimension(String);

impl Dimension {
    /// Create a new validated dimension name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDimension` if the name is empty, padded
    /// with whitespace, or contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidDimension(
                "dimension name cannot be empty".into(),
            ));
        }

        if name.trim() != name {
            return Err(TypeError::InvalidDimension(format!(
                "dimension name cannot start or end with whitespace: {name:?}"
            )));
        }

        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidDimension(
                "dimension name cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the dimension name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Dimension {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Dimension {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl FromStr for Dimension {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Dimension> for String {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}

impl AsRef<str> for Dimension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two ends of a dimension.
///
/// If A is the Positive neighbor of B in some dimension, B is the
/// Negative neighbor of A in that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Positive,
    Negative,
}

impl Direction {
    /// Both directions, Positive first.
    pub const ALL: [Direction; 2] = [Direction::Positive, Direction::Negative];

    /// The opposite direction.
    ///
    /// ```
    /// use zigzag::core::types::Direction;
    ///
    /// for d in Direction::ALL {
    ///     assert_eq!(d.other().other(), d);
    /// }
    /// ```
    pub fn other(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }

    /// Lowercase name, as used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Positive => "positive",
            Direction::Negative => "negative",
        }
    }
}

impl FromStr for Direction {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" | "pos" | "+" => Ok(Direction::Positive),
            "negative" | "neg" | "-" => Ok(Direction::Negative),
            _ => Err(TypeError::InvalidDirection(format!(
                "expected 'positive' or 'negative', got '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod dimension {
        use super::*;

        #[test]
        fn valid_names() {
            assert!(Dimension::new("generation").is_ok());
            assert!(Dimension::new("d.clone").is_ok());
            assert!(Dimension::new("two words").is_ok());
            assert!(Dimension::new("世代").is_ok());
        }

        #[test]
        fn rejects_empty() {
            assert_eq!(
                Dimension::new(""),
                Err(TypeError::InvalidDimension(
                    "dimension name cannot be empty".into(),
                ))
            );
        }

        #[test]
        fn rejects_padding() {
            assert!(Dimension::new(" sibling").is_err());
            assert!(Dimension::new("sibling ").is_err());
        }

        #[test]
        fn rejects_control_chars() {
            assert!(Dimension::new("a\nb").is_err());
            assert!(Dimension::new("a\u{7f}b").is_err());
        }

        #[test]
        fn serde_rejects_invalid() {
            let parsed: Result<Dimension, _> = serde_json::from_str("\"\"");
            assert!(parsed.is_err());

            let parsed: Dimension = serde_json::from_str("\"sibling\"").unwrap();
            assert_eq!(parsed.as_str(), "sibling");
        }

        #[test]
        fn parse_from_str() {
            let d: Dimension = "generation".parse().unwrap();
            assert_eq!(d, Dimension::new("generation").unwrap());
        }
    }

    mod direction {
        use super::*;

        #[test]
        fn other_is_involution() {
            assert_eq!(Direction::Positive.other().other(), Direction::Positive);
            assert_eq!(Direction::Negative.other().other(), Direction::Negative);
        }

        #[test]
        fn other_flips() {
            assert_eq!(Direction::Positive.other(), Direction::Negative);
            assert_eq!(Direction::Negative.other(), Direction::Positive);
        }

        #[test]
        fn default_is_positive() {
            assert_eq!(Direction::default(), Direction::Positive);
        }

        #[test]
        fn parse_aliases() {
            assert_eq!("Positive".parse::<Direction>(), Ok(Direction::Positive));
            assert_eq!("neg".parse::<Direction>(), Ok(Direction::Negative));
            assert_eq!("+".parse::<Direction>(), Ok(Direction::Positive));
            assert!("sideways".parse::<Direction>().is_err());
        }

        #[test]
        fn parse_error_echoes_input() {
            let err = "SideWays".parse::<Direction>().unwrap_err();
            assert!(err.to_string().contains("got 'SideWays'"));
        }

        #[test]
        fn serde_lowercase() {
            let json = serde_json::to_string(&Direction::Negative).unwrap();
            assert_eq!(json, "\"negative\"");
        }
    }

    #[test]
    fn cell_key_display() {
        assert_eq!(CellKey::new(7).to_string(), "#7");
        assert_eq!(CellKey::new(7).get(), 7);
    }
}
