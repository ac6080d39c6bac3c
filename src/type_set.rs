//! Defending type sets and the PokeAPI conversion boundary.
//!
//! A `TypeSet` is the one-or-two-type typing of a single Pokémon. Rosters
//! are plain slices of `TypeSet`s; the engine never stores them.

use crate::error::TypeError;
use crate::type_id::Type;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// The typing of one Pokémon: one or two types, in the order given.
///
/// Order does not change any computed multiplier. A set holding the same
/// type twice is accepted and simply applies that type's multiplier twice.
///
/// # Examples
///
/// ```rust
/// use typechart::{Type, TypeSet};
///
/// let charizard = TypeSet::dual(Type::Fire, Type::Flying);
/// assert_eq!(charizard.as_slice(), &[Type::Fire, Type::Flying]);
///
/// let pikachu = TypeSet::from_names(["electric"]).unwrap();
/// assert_eq!(pikachu.primary(), Type::Electric);
/// assert_eq!(pikachu.secondary(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSet {
    types: [Type; 2],
    len: usize,
}

/// A team's typings, one `TypeSet` per member.
pub type Roster = [TypeSet];

impl TypeSet {
    /// Most types a single Pokémon can have.
    pub const MAX_TYPES: usize = 2;

    /// A single-type set.
    pub fn single(ty: Type) -> Self {
        Self {
            types: [ty, ty],
            len: 1,
        }
    }

    /// A two-type set.
    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            types: [primary, secondary],
            len: 2,
        }
    }

    /// Build a set from a slice of types.
    ///
    /// Fails with [`TypeError::InvalidInput`] if the slice is empty or
    /// holds more than two types.
    pub fn new(types: &[Type]) -> Result<Self, TypeError> {
        match *types {
            [ty] => Ok(Self::single(ty)),
            [primary, secondary] => Ok(Self::dual(primary, secondary)),
            [] => Err(TypeError::InvalidInput(String::from(
                "a type set needs at least one type",
            ))),
            _ => Err(TypeError::InvalidInput(format!(
                "a type set holds at most {} types, got {}",
                Self::MAX_TYPES,
                types.len()
            ))),
        }
    }

    /// Build a set from type names, validating each one.
    ///
    /// Unknown names fail with [`TypeError::InvalidType`]; an empty or
    /// over-long list fails with [`TypeError::InvalidInput`].
    pub fn from_names<I, S>(names: I) -> Result<Self, TypeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types = names
            .into_iter()
            .map(|name| Type::from_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&types)
    }

    /// Build a set from the PokeAPI `types` array, ordered by slot.
    pub fn from_api_slots(slots: &[ApiTypeSlot]) -> Result<Self, TypeError> {
        let mut sorted: Vec<&ApiTypeSlot> = slots.iter().collect();
        sorted.sort_by_key(|slot| slot.slot);
        Self::from_names(sorted.iter().map(|slot| slot.ty.name.as_str()))
    }

    /// Parse the PokeAPI `types` array from JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typechart::{Type, TypeSet};
    ///
    /// let json = r#"[
    ///     {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}},
    ///     {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}
    /// ]"#;
    /// let bulbasaur = TypeSet::from_api_json(json).unwrap();
    /// assert_eq!(bulbasaur.as_slice(), &[Type::Grass, Type::Poison]);
    /// ```
    pub fn from_api_json(json: &str) -> Result<Self, TypeError> {
        let slots: Vec<ApiTypeSlot> = serde_json::from_str(json)?;
        Self::from_api_slots(&slots)
    }

    /// The types in this set, in order.
    pub fn as_slice(&self) -> &[Type] {
        &self.types[..self.len]
    }

    /// The first type.
    pub fn primary(&self) -> Type {
        self.types[0]
    }

    /// The second type, if any.
    pub fn secondary(&self) -> Option<Type> {
        if self.len == 2 {
            Some(self.types[1])
        } else {
            None
        }
    }

    /// Whether the set contains `ty`.
    pub fn contains(&self, ty: Type) -> bool {
        self.as_slice().contains(&ty)
    }
}

impl Deref for TypeSet {
    type Target = [Type];

    fn deref(&self) -> &[Type] {
        self.as_slice()
    }
}

impl From<Type> for TypeSet {
    fn from(ty: Type) -> Self {
        TypeSet::single(ty)
    }
}

impl From<(Type, Type)> for TypeSet {
    fn from((primary, secondary): (Type, Type)) -> Self {
        TypeSet::dual(primary, secondary)
    }
}

impl TryFrom<&[Type]> for TypeSet {
    type Error = TypeError;

    fn try_from(types: &[Type]) -> Result<Self, Self::Error> {
        TypeSet::new(types)
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary() {
            Some(secondary) => write!(f, "{}/{}", self.primary(), secondary),
            None => write!(f, "{}", self.primary()),
        }
    }
}

impl Serialize for TypeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let types = Vec::<Type>::deserialize(deserializer)?;
        TypeSet::new(&types).map_err(serde::de::Error::custom)
    }
}

/// One entry of a PokeAPI Pokémon's `types` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTypeSlot {
    /// Which of the two type slots this type occupies.
    pub slot: u8,
    /// The named type resource.
    #[serde(rename = "type")]
    pub ty: ApiNamedResource,
}

/// A PokeAPI named resource reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiNamedResource {
    /// Resource name, e.g. `"water"`.
    pub name: String,
    /// Resource URL. Empty when the payload omits it.
    #[serde(default)]
    pub url: String,
}
