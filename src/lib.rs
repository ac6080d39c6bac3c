//! # typechart - Deterministic Pokémon Type-Effectiveness Engine
//!
//! A stateless engine for the eighteen elemental types that provides:
//! - **Lookups** against an 18×18 effectiveness table (absent entries are neutral)
//! - **Resolution** of one attacking type against a one- or two-type defender
//! - **Aggregation** into defensive profiles and team-wide summaries
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! Data flows one way:
//!
//! ```text
//! [TypeChart] → [effectiveness] → [defensive_profile / roster_coverage / roster_weaknesses]
//! ```
//!
//! 1. **TypeChart** holds one multiplier per (attacking, defending) pair
//! 2. **effectiveness** multiplies the lookups for each defending type
//! 3. **Aggregators** classify or summarize those multipliers
//!
//! Nothing holds state between calls, so every function is pure and the
//! standard chart can be shared freely across threads.
//!
//! ## Example
//!
//! ```rust
//! use typechart::*;
//!
//! // Ice vs Grass/Dragon
//! let m = effectiveness(Type::Ice, &[Type::Grass, Type::Dragon]).unwrap();
//! assert_eq!(m, Multiplier::QUADRUPLE);
//!
//! // Type names from an upstream API are validated at the boundary
//! let lapras = TypeSet::from_names(["water", "ice"]).unwrap();
//! let profile = defensive_profile(&lapras).unwrap();
//! assert!(profile.weaknesses.contains(&Type::Fighting));
//!
//! // Team-wide summaries
//! let team = [lapras, TypeSet::single(Type::Fire)];
//! let weaknesses = roster_weaknesses(&team);
//! assert_eq!(weaknesses.get(&Type::Rock), Some(&2));
//! ```
//!
//! ## Modules
//!
//! - [`type_id`] - The `Type` enum and name parsing
//! - [`type_set`] - One Pokémon's typing and the PokeAPI boundary
//! - [`multiplier`] - Damage multipliers and their classification
//! - [`numeric`] - Multiplier numeric backend
//! - [`chart`] - The effectiveness table
//! - [`resolver`] - Combined multipliers against multi-type defenders
//! - [`profile`] - Defensive profiles
//! - [`coverage`] - Roster coverage and weakness counts
//! - [`error`] - Error types

pub mod chart;
pub mod coverage;
pub mod error;
pub mod multiplier;
pub mod numeric;
pub mod profile;
pub mod resolver;
pub mod type_id;
pub mod type_set;

use std::collections::BTreeMap;

// Re-export main types for convenience
pub use chart::{OffensiveMatchups, TypeChart};
pub use coverage::TeamAnalysis;
pub use error::TypeError;
pub use multiplier::{Effect, Multiplier};
pub use profile::DefensiveProfile;
pub use type_id::Type;
pub use type_set::{ApiNamedResource, ApiTypeSlot, Roster, TypeSet};

// Re-export numeric types
#[cfg(feature = "fixed-point")]
pub use numeric::FixedPoint;
pub use numeric::{EffectNumeric, MultiplierValue};

/// Multiplier for one attacking type against one defending type, using
/// the standard chart.
pub fn lookup(attacking: Type, defending: Type) -> Multiplier {
    TypeChart::standard().lookup(attacking, defending)
}

/// [`lookup`] for type names. Unknown names fail with
/// [`TypeError::InvalidType`].
///
/// ```rust
/// use typechart::{lookup_names, Multiplier, TypeError};
///
/// assert_eq!(lookup_names("fire", "grass"), Ok(Multiplier::DOUBLE));
/// assert!(matches!(lookup_names("fire", "wood"), Err(TypeError::InvalidType(_))));
/// ```
pub fn lookup_names(attacking: &str, defending: &str) -> Result<Multiplier, TypeError> {
    TypeChart::standard().lookup_names(attacking, defending)
}

/// Combined multiplier against a defender, using the standard chart.
///
/// See [`TypeChart::effectiveness`].
pub fn effectiveness(attacking: Type, defending: &[Type]) -> Result<Multiplier, TypeError> {
    TypeChart::standard().effectiveness(attacking, defending)
}

/// [`effectiveness`] for type names. See [`TypeChart::effectiveness_by_name`].
pub fn effectiveness_by_name<S: AsRef<str>>(
    attacking: &str,
    defending: &[S],
) -> Result<Multiplier, TypeError> {
    TypeChart::standard().effectiveness_by_name(attacking, defending)
}

/// Defensive profile of a defender, using the standard chart.
pub fn defensive_profile(defending: &[Type]) -> Result<DefensiveProfile, TypeError> {
    TypeChart::standard().defensive_profile(defending)
}

/// Every attacking type's multiplier against a defender, strongest first.
pub fn damage_multipliers(defending: &[Type]) -> Result<Vec<(Type, Multiplier)>, TypeError> {
    TypeChart::standard().damage_multipliers(defending)
}

/// What one attacking type does to every defending type.
pub fn offensive_matchups(attacking: Type) -> OffensiveMatchups {
    TypeChart::standard().offensive_matchups(attacking)
}

/// Best super-effective multiplier per defending type across a roster.
pub fn roster_coverage(roster: &Roster) -> BTreeMap<Type, Multiplier> {
    TypeChart::standard().roster_coverage(roster)
}

/// Number of roster members weak to each attacking type.
pub fn roster_weaknesses(roster: &Roster) -> BTreeMap<Type, usize> {
    TypeChart::standard().roster_weaknesses(roster)
}

/// Number of roster members carrying each type.
pub fn type_distribution(roster: &Roster) -> BTreeMap<Type, usize> {
    TypeChart::standard().type_distribution(roster)
}

/// Coverage, weaknesses and distribution in one record.
pub fn team_analysis(roster: &Roster) -> TeamAnalysis {
    TypeChart::standard().team_analysis(roster)
}
