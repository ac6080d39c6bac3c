//! Type identifier module.
//!
//! Provides the `Type` enum, the closed set of eighteen elemental types.
//! Each type has a dense index (0-17) used to address the effectiveness
//! table, and a lowercase name matching the PokeAPI spelling.

use crate::error::TypeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the eighteen elemental types.
///
/// Variants are declared in canonical order, which is also the order of
/// [`Type::ALL`] and of [`Type::index`].
///
/// # Examples
///
/// ```rust
/// use typechart::Type;
///
/// let fire: Type = "fire".parse().unwrap();
/// assert_eq!(fire, Type::Fire);
/// assert_eq!(fire.as_str(), "fire");
///
/// // Names coming from user input are matched case-insensitively
/// let water: Type = " Water ".parse().unwrap();
/// assert_eq!(water, Type::Water);
///
/// assert!("sound".parse::<Type>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// Number of types.
    pub const COUNT: usize = 18;

    /// All types in canonical order.
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Dense index of this type, in `0..Type::COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typechart::Type;
    ///
    /// assert_eq!(Type::Normal.index(), 0);
    /// assert_eq!(Type::Fairy.index(), 17);
    /// ```
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a type up by its dense index.
    pub fn from_index(index: usize) -> Option<Type> {
        Type::ALL.get(index).copied()
    }

    /// Get the lowercase name of this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Parse a type name.
    ///
    /// Surrounding whitespace is ignored and matching is
    /// case-insensitive. Unknown names fail with
    /// [`TypeError::InvalidType`] carrying the original string.
    pub fn from_name(name: &str) -> Result<Type, TypeError> {
        let trimmed = name.trim();
        Type::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                tracing::debug!(type_name = name, "rejected unknown type name");
                TypeError::InvalidType(name.to_string())
            })
    }
}

impl FromStr for Type {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_name(s)
    }
}

impl TryFrom<&str> for Type {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Type::from_name(s)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Type::from_name(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, ty) in Type::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
            assert_eq!(Type::from_index(i), Some(*ty));
        }
        assert_eq!(Type::from_index(Type::COUNT), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for ty in Type::ALL {
            assert_eq!(Type::from_name(ty.as_str()), Ok(ty));
            assert_eq!(ty.to_string(), ty.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("GHOST".parse::<Type>(), Ok(Type::Ghost));
        assert_eq!("  Dragon\n".parse::<Type>(), Ok(Type::Dragon));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            Type::from_name("???"),
            Err(TypeError::InvalidType(String::from("???")))
        );
        assert!(Type::from_name("").is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Type::Electric).unwrap();
        assert_eq!(json, "\"electric\"");

        let ty: Type = serde_json::from_str("\"fairy\"").unwrap();
        assert_eq!(ty, Type::Fairy);

        assert!(serde_json::from_str::<Type>("\"shadow\"").is_err());
    }

    #[test]
    fn test_type_ordering() {
        assert!(Type::Normal < Type::Fire);
        assert!(Type::Steel < Type::Fairy);
    }
}
