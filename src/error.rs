//! Error types for type-effectiveness queries.
//!
//! All errors that can occur in the engine are caller errors and are
//! represented by the `TypeError` enum.

use crate::type_id::Type;
use thiserror::Error;

/// Errors that can occur while resolving type matchups or loading a chart.
///
/// # Examples
///
/// ```rust
/// use typechart::TypeError;
///
/// let err = TypeError::InvalidType(String::from("sound"));
/// println!("{}", err); // "Unknown type: sound"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeError {
    /// A type identifier is not one of the eighteen recognized types.
    #[error("Unknown type: {0}")]
    InvalidType(String),

    /// A defending type set was empty or otherwise malformed.
    ///
    /// Every Pokémon has at least one type, so an empty set is always
    /// a caller bug.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A chart entry was negative or not a finite number.
    #[error("Invalid multiplier {value} for {attacking} -> {defending}")]
    InvalidMultiplier {
        attacking: Type,
        defending: Type,
        value: f64,
    },

    /// Chart configuration or PokeAPI data could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TypeError {
    fn from(err: serde_json::Error) -> Self {
        TypeError::Parse(err.to_string())
    }
}
