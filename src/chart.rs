//! Effectiveness table module.
//!
//! Provides the `TypeChart` type, a dense 18×18 table of multipliers
//! indexed by `(attacking, defending)`. Every cell starts neutral, so an
//! entry that was never written reads back as exactly 1×.

use crate::error::TypeError;
use crate::multiplier::{Effect, Multiplier};
use crate::type_id::Type;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every non-neutral matchup of the standard type chart.
///
/// Rows follow the canonical attacking order.
#[rustfmt::skip]
const STANDARD_ENTRIES: &[(Type, Type, f64)] = {
    use Type::*;
    &[
        (Normal, Rock, 0.5), (Normal, Ghost, 0.0), (Normal, Steel, 0.5),

        (Fire, Fire, 0.5), (Fire, Water, 0.5), (Fire, Grass, 2.0), (Fire, Ice, 2.0),
        (Fire, Bug, 2.0), (Fire, Rock, 0.5), (Fire, Dragon, 0.5), (Fire, Steel, 2.0),

        (Water, Fire, 2.0), (Water, Water, 0.5), (Water, Grass, 0.5), (Water, Ground, 2.0),
        (Water, Rock, 2.0), (Water, Dragon, 0.5),

        (Electric, Water, 2.0), (Electric, Electric, 0.5), (Electric, Grass, 0.5),
        (Electric, Ground, 0.0), (Electric, Flying, 2.0), (Electric, Dragon, 0.5),

        (Grass, Fire, 0.5), (Grass, Water, 2.0), (Grass, Grass, 0.5), (Grass, Poison, 0.5),
        (Grass, Ground, 2.0), (Grass, Flying, 0.5), (Grass, Bug, 0.5), (Grass, Rock, 2.0),
        (Grass, Dragon, 0.5), (Grass, Steel, 0.5),

        (Ice, Fire, 0.5), (Ice, Water, 0.5), (Ice, Grass, 2.0), (Ice, Ice, 0.5),
        (Ice, Ground, 2.0), (Ice, Flying, 2.0), (Ice, Dragon, 2.0), (Ice, Steel, 0.5),

        (Fighting, Normal, 2.0), (Fighting, Ice, 2.0), (Fighting, Poison, 0.5),
        (Fighting, Flying, 0.5), (Fighting, Psychic, 0.5), (Fighting, Bug, 0.5),
        (Fighting, Rock, 2.0), (Fighting, Ghost, 0.0), (Fighting, Dark, 2.0),
        (Fighting, Steel, 2.0), (Fighting, Fairy, 0.5),

        (Poison, Grass, 2.0), (Poison, Poison, 0.5), (Poison, Ground, 0.5), (Poison, Rock, 0.5),
        (Poison, Ghost, 0.5), (Poison, Steel, 0.0), (Poison, Fairy, 2.0),

        (Ground, Fire, 2.0), (Ground, Electric, 2.0), (Ground, Grass, 0.5), (Ground, Poison, 2.0),
        (Ground, Flying, 0.0), (Ground, Bug, 0.5), (Ground, Rock, 2.0), (Ground, Steel, 2.0),

        (Flying, Electric, 0.5), (Flying, Grass, 2.0), (Flying, Ice, 0.5), (Flying, Fighting, 2.0),
        (Flying, Bug, 2.0), (Flying, Rock, 0.5), (Flying, Steel, 0.5),

        (Psychic, Fighting, 2.0), (Psychic, Poison, 2.0), (Psychic, Psychic, 0.5),
        (Psychic, Dark, 0.0), (Psychic, Steel, 0.5),

        (Bug, Fire, 0.5), (Bug, Grass, 2.0), (Bug, Fighting, 0.5), (Bug, Poison, 0.5),
        (Bug, Flying, 0.5), (Bug, Psychic, 2.0), (Bug, Ghost, 0.5), (Bug, Dark, 2.0),
        (Bug, Steel, 0.5), (Bug, Fairy, 0.5),

        (Rock, Fire, 2.0), (Rock, Ice, 2.0), (Rock, Fighting, 0.5), (Rock, Ground, 0.5),
        (Rock, Flying, 2.0), (Rock, Bug, 2.0), (Rock, Steel, 0.5),

        (Ghost, Normal, 0.0), (Ghost, Psychic, 2.0), (Ghost, Ghost, 2.0), (Ghost, Dark, 0.5),

        (Dragon, Dragon, 2.0), (Dragon, Steel, 0.5), (Dragon, Fairy, 0.0),

        (Dark, Fighting, 0.5), (Dark, Psychic, 2.0), (Dark, Ghost, 2.0), (Dark, Dark, 0.5),
        (Dark, Fairy, 0.5),

        (Steel, Fire, 0.5), (Steel, Water, 0.5), (Steel, Electric, 0.5), (Steel, Ice, 2.0),
        (Steel, Rock, 2.0), (Steel, Steel, 0.5), (Steel, Fairy, 2.0),

        (Fairy, Fire, 0.5), (Fairy, Fighting, 2.0), (Fairy, Poison, 0.5), (Fairy, Dragon, 2.0),
        (Fairy, Dark, 2.0), (Fairy, Steel, 0.5),
    ]
};

static STANDARD: Lazy<TypeChart> = Lazy::new(|| {
    let mut chart = TypeChart::neutral();
    for &(attacking, defending, value) in STANDARD_ENTRIES {
        chart.set(attacking, defending, Multiplier::from_f64(value));
    }
    chart
});

/// Nested `attacking -> defending -> multiplier` map, the on-disk shape
/// of a chart.
type ChartEntries = BTreeMap<String, BTreeMap<String, f64>>;

/// The effectiveness table.
///
/// Immutable once built; share the standard chart through
/// [`TypeChart::standard`] or build a custom one with
/// [`TypeChart::with_entry`] or [`TypeChart::from_json`].
///
/// # Examples
///
/// ```rust
/// use typechart::{Multiplier, Type, TypeChart};
///
/// let chart = TypeChart::standard();
/// assert_eq!(chart.lookup(Type::Fire, Type::Grass), Multiplier::DOUBLE);
/// assert_eq!(chart.lookup(Type::Fire, Type::Water), Multiplier::HALF);
/// assert_eq!(chart.lookup(Type::Ground, Type::Flying), Multiplier::IMMUNE);
/// assert_eq!(chart.lookup(Type::Normal, Type::Fire), Multiplier::NEUTRAL);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartEntries", into = "ChartEntries")]
pub struct TypeChart {
    cells: [[Multiplier; Type::COUNT]; Type::COUNT],
}

/// What one attacking type does to each defending type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffensiveMatchups {
    /// Defending types hit for more than 1×.
    pub strong: Vec<Type>,
    /// Defending types hit for less than 1× but more than 0×.
    pub weak: Vec<Type>,
    /// Defending types that take no damage.
    pub immune: Vec<Type>,
}

impl TypeChart {
    /// The canonical type chart.
    ///
    /// Built once on first use and shared for the life of the process.
    pub fn standard() -> &'static TypeChart {
        &STANDARD
    }

    /// A chart where every matchup is neutral.
    pub fn neutral() -> Self {
        Self {
            cells: [[Multiplier::NEUTRAL; Type::COUNT]; Type::COUNT],
        }
    }

    /// Return a copy of this chart with one matchup replaced.
    ///
    /// Fails with [`TypeError::InvalidMultiplier`] if `multiplier` is
    /// negative, not finite, or out of range for the numeric backend.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typechart::{Multiplier, Type, TypeChart};
    ///
    /// let chart = TypeChart::neutral()
    ///     .with_entry(Type::Water, Type::Fire, Multiplier::DOUBLE)
    ///     .unwrap();
    /// assert_eq!(chart.lookup(Type::Water, Type::Fire), Multiplier::DOUBLE);
    /// assert_eq!(chart.lookup(Type::Fire, Type::Water), Multiplier::NEUTRAL);
    /// ```
    pub fn with_entry(
        mut self,
        attacking: Type,
        defending: Type,
        multiplier: Multiplier,
    ) -> Result<Self, TypeError> {
        validate(attacking, defending, multiplier.to_f64())?;
        self.set(attacking, defending, multiplier);
        Ok(self)
    }

    /// Load a chart from its JSON form.
    ///
    /// The JSON is a nested object keyed by attacking type, then by
    /// defending type. Omitted pairs are neutral.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typechart::{Multiplier, Type, TypeChart};
    ///
    /// let chart = TypeChart::from_json(r#"{"fire": {"grass": 2, "water": 0.5}}"#).unwrap();
    /// assert_eq!(chart.lookup(Type::Fire, Type::Grass), Multiplier::DOUBLE);
    /// assert_eq!(chart.lookup(Type::Fire, Type::Fire), Multiplier::NEUTRAL);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TypeError> {
        let entries: ChartEntries = serde_json::from_str(json)?;
        TypeChart::try_from(entries)
    }

    /// Serialize this chart to its JSON form (non-neutral entries only).
    pub fn to_json(&self) -> Result<String, TypeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Multiplier for one attacking type against one defending type.
    pub fn lookup(&self, attacking: Type, defending: Type) -> Multiplier {
        self.cells[attacking.index()][defending.index()]
    }

    /// [`lookup`](Self::lookup) for type names.
    ///
    /// Unknown names fail with [`TypeError::InvalidType`]; there is no
    /// fallback multiplier.
    pub fn lookup_names(&self, attacking: &str, defending: &str) -> Result<Multiplier, TypeError> {
        let attacking = Type::from_name(attacking)?;
        let defending = Type::from_name(defending)?;
        Ok(self.lookup(attacking, defending))
    }

    /// Iterate over every non-neutral cell in index order.
    pub fn entries(&self) -> impl Iterator<Item = (Type, Type, Multiplier)> + '_ {
        Type::ALL.into_iter().flat_map(move |attacking| {
            Type::ALL.into_iter().filter_map(move |defending| {
                let multiplier = self.lookup(attacking, defending);
                (!multiplier.is_neutral()).then_some((attacking, defending, multiplier))
            })
        })
    }

    /// Summarize what `attacking` does to every defending type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typechart::{Type, TypeChart};
    ///
    /// let dragon = TypeChart::standard().offensive_matchups(Type::Dragon);
    /// assert_eq!(dragon.strong, vec![Type::Dragon]);
    /// assert_eq!(dragon.weak, vec![Type::Steel]);
    /// assert_eq!(dragon.immune, vec![Type::Fairy]);
    /// ```
    pub fn offensive_matchups(&self, attacking: Type) -> OffensiveMatchups {
        let mut matchups = OffensiveMatchups::default();
        for defending in Type::ALL {
            match self.lookup(attacking, defending).effect() {
                Effect::SuperEffective => matchups.strong.push(defending),
                Effect::Resisted => matchups.weak.push(defending),
                Effect::Immune => matchups.immune.push(defending),
                Effect::Neutral => {}
            }
        }
        matchups
    }

    fn set(&mut self, attacking: Type, defending: Type, multiplier: Multiplier) {
        self.cells[attacking.index()][defending.index()] = multiplier;
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        TypeChart::standard().clone()
    }
}

fn validate(attacking: Type, defending: Type, value: f64) -> Result<(), TypeError> {
    if Multiplier::is_valid(value) {
        Ok(())
    } else {
        Err(TypeError::InvalidMultiplier {
            attacking,
            defending,
            value,
        })
    }
}

impl TryFrom<ChartEntries> for TypeChart {
    type Error = TypeError;

    fn try_from(entries: ChartEntries) -> Result<Self, Self::Error> {
        let mut chart = TypeChart::neutral();
        let mut seen = [[false; Type::COUNT]; Type::COUNT];
        let mut count = 0usize;
        for (attacking, row) in &entries {
            let attacking = Type::from_name(attacking)?;
            for (defending, &value) in row {
                let defending = Type::from_name(defending)?;
                let cell = &mut seen[attacking.index()][defending.index()];
                if *cell {
                    return Err(TypeError::InvalidInput(format!(
                        "duplicate chart entry {} -> {}",
                        attacking, defending
                    )));
                }
                *cell = true;
                validate(attacking, defending, value)?;
                chart.set(attacking, defending, Multiplier::from_f64(value));
                count += 1;
            }
        }
        tracing::debug!(entries = count, "loaded type chart");
        Ok(chart)
    }
}

impl From<TypeChart> for ChartEntries {
    fn from(chart: TypeChart) -> Self {
        let mut entries = ChartEntries::new();
        for (attacking, defending, multiplier) in chart.entries() {
            entries
                .entry(attacking.as_str().to_string())
                .or_default()
                .insert(defending.as_str().to_string(), multiplier.to_f64());
        }
        entries
    }
}
