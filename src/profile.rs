//! Defensive profile module.
//!
//! Classifies every attacking type against one defender into weaknesses,
//! resistances and immunities. Neutral matchups are not reported.

use crate::chart::TypeChart;
use crate::error::TypeError;
use crate::multiplier::{Effect, Multiplier};
use crate::type_id::Type;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How one defender fares against each attacking type.
///
/// The three sets are pairwise disjoint. Every attacking type missing from
/// all three is neutral (see [`DefensiveProfile::neutral`]).
///
/// # Examples
///
/// ```rust
/// use typechart::{defensive_profile, Type};
///
/// let water = defensive_profile(&[Type::Water]).unwrap();
/// assert!(water.weaknesses.contains(&Type::Grass));
/// assert!(water.weaknesses.contains(&Type::Electric));
/// assert!(water.resistances.contains(&Type::Fire));
/// assert!(water.immunities.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveProfile {
    /// Attacking types that hit for more than 1×.
    pub weaknesses: BTreeSet<Type>,
    /// Attacking types that hit for less than 1× but more than 0×.
    pub resistances: BTreeSet<Type>,
    /// Attacking types that do nothing.
    pub immunities: BTreeSet<Type>,
}

impl DefensiveProfile {
    /// Attacking types that hit for exactly 1×.
    pub fn neutral(&self) -> BTreeSet<Type> {
        Type::ALL
            .into_iter()
            .filter(|ty| {
                !self.weaknesses.contains(ty)
                    && !self.resistances.contains(ty)
                    && !self.immunities.contains(ty)
            })
            .collect()
    }

    /// Which bucket `attacking` falls into.
    pub fn classify(&self, attacking: Type) -> Effect {
        if self.weaknesses.contains(&attacking) {
            Effect::SuperEffective
        } else if self.resistances.contains(&attacking) {
            Effect::Resisted
        } else if self.immunities.contains(&attacking) {
            Effect::Immune
        } else {
            Effect::Neutral
        }
    }
}

impl TypeChart {
    /// Build the defensive profile of `defending`.
    ///
    /// Fails with [`TypeError::InvalidInput`] if `defending` is empty.
    pub fn defensive_profile(&self, defending: &[Type]) -> Result<DefensiveProfile, TypeError> {
        let mut profile = DefensiveProfile::default();
        for attacking in Type::ALL {
            match self.effectiveness(attacking, defending)?.effect() {
                Effect::SuperEffective => profile.weaknesses.insert(attacking),
                Effect::Resisted => profile.resistances.insert(attacking),
                Effect::Immune => profile.immunities.insert(attacking),
                Effect::Neutral => false,
            };
        }
        Ok(profile)
    }

    /// Every attacking type with its combined multiplier against
    /// `defending`, strongest first.
    ///
    /// Ties keep canonical type order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typechart::{Multiplier, Type, TypeChart};
    ///
    /// let rows = TypeChart::standard()
    ///     .damage_multipliers(&[Type::Grass, Type::Ice])
    ///     .unwrap();
    /// assert_eq!(rows[0], (Type::Fire, Multiplier::QUADRUPLE));
    /// assert_eq!(rows.len(), 18);
    /// ```
    pub fn damage_multipliers(
        &self,
        defending: &[Type],
    ) -> Result<Vec<(Type, Multiplier)>, TypeError> {
        let mut rows = Type::ALL
            .into_iter()
            .map(|attacking| Ok((attacking, self.effectiveness(attacking, defending)?)))
            .collect::<Result<Vec<_>, TypeError>>()?;
        // Stable sort keeps canonical order within equal multipliers.
        rows.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_profile() {
        let profile = TypeChart::standard()
            .defensive_profile(&[Type::Water])
            .unwrap();
        assert_eq!(
            profile.weaknesses,
            BTreeSet::from([Type::Electric, Type::Grass])
        );
        assert_eq!(
            profile.resistances,
            BTreeSet::from([Type::Fire, Type::Water, Type::Ice, Type::Steel])
        );
        assert!(profile.immunities.is_empty());
    }

    #[test]
    fn test_ghost_normal_immunities() {
        // Ghost/Normal is immune to both Normal and Fighting (and Ghost).
        let profile = TypeChart::standard()
            .defensive_profile(&[Type::Ghost, Type::Normal])
            .unwrap();
        assert_eq!(
            profile.immunities,
            BTreeSet::from([Type::Normal, Type::Fighting, Type::Ghost])
        );
        assert_eq!(profile.weaknesses, BTreeSet::from([Type::Dark]));
    }

    #[test]
    fn test_partition_covers_all_types() {
        let chart = TypeChart::standard();
        for primary in Type::ALL {
            for secondary in Type::ALL {
                let profile = chart.defensive_profile(&[primary, secondary]).unwrap();
                let neutral = profile.neutral();
                let total = profile.weaknesses.len()
                    + profile.resistances.len()
                    + profile.immunities.len()
                    + neutral.len();
                assert_eq!(total, Type::COUNT);
                assert!(profile.weaknesses.is_disjoint(&profile.resistances));
                assert!(profile.weaknesses.is_disjoint(&profile.immunities));
                assert!(profile.resistances.is_disjoint(&profile.immunities));
            }
        }
    }

    #[test]
    fn test_classify_matches_sets() {
        let profile = TypeChart::standard()
            .defensive_profile(&[Type::Steel])
            .unwrap();
        assert_eq!(profile.classify(Type::Fire), Effect::SuperEffective);
        assert_eq!(profile.classify(Type::Poison), Effect::Immune);
        assert_eq!(profile.classify(Type::Fairy), Effect::Resisted);
        assert_eq!(profile.classify(Type::Water), Effect::Neutral);
    }

    #[test]
    fn test_empty_defender_is_invalid() {
        assert!(matches!(
            TypeChart::standard().defensive_profile(&[]),
            Err(TypeError::InvalidInput(_))
        ));
        assert!(TypeChart::standard().damage_multipliers(&[]).is_err());
    }

    #[test]
    fn test_damage_multipliers_sorted() {
        let rows = TypeChart::standard()
            .damage_multipliers(&[Type::Water])
            .unwrap();
        assert_eq!(rows.len(), Type::COUNT);
        assert_eq!(rows[0], (Type::Electric, Multiplier::DOUBLE));
        assert_eq!(rows[1], (Type::Grass, Multiplier::DOUBLE));
        for pair in rows.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(rows.last().map(|(_, m)| *m), Some(Multiplier::HALF));
    }
}
