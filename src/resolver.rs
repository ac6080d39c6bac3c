//! Pairwise resolver module.
//!
//! Folds single-type lookups into one multiplier against a defender
//! with one or more types: the result is the product of the attacking
//! type's multiplier against each defending type. This is how 4×, 0.25×
//! and immunity-overrides-everything arise.

use crate::chart::TypeChart;
use crate::error::TypeError;
use crate::multiplier::Multiplier;
use crate::type_id::Type;
use crate::type_set::TypeSet;

impl TypeChart {
    /// Combined multiplier of `attacking` against every type in `defending`.
    ///
    /// Fails with [`TypeError::InvalidInput`] if `defending` is empty.
    /// Repeated defending types are applied once per occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typechart::{Multiplier, Type, TypeChart};
    ///
    /// let chart = TypeChart::standard();
    ///
    /// // Ice vs Grass/Dragon: 2 × 2
    /// let m = chart.effectiveness(Type::Ice, &[Type::Grass, Type::Dragon]).unwrap();
    /// assert_eq!(m, Multiplier::QUADRUPLE);
    ///
    /// assert!(chart.effectiveness(Type::Ice, &[]).is_err());
    /// ```
    pub fn effectiveness(
        &self,
        attacking: Type,
        defending: &[Type],
    ) -> Result<Multiplier, TypeError> {
        if defending.is_empty() {
            return Err(TypeError::InvalidInput(String::from(
                "defending type set is empty",
            )));
        }
        Ok(self.fold(attacking, defending))
    }

    /// [`effectiveness`](Self::effectiveness) against a `TypeSet`, which
    /// is never empty.
    pub fn effectiveness_against(&self, attacking: Type, defending: &TypeSet) -> Multiplier {
        self.fold(attacking, defending.as_slice())
    }

    /// [`effectiveness`](Self::effectiveness) for type names.
    ///
    /// Every name is validated before anything is computed.
    pub fn effectiveness_by_name<S: AsRef<str>>(
        &self,
        attacking: &str,
        defending: &[S],
    ) -> Result<Multiplier, TypeError> {
        let attacking = Type::from_name(attacking)?;
        let defending = defending
            .iter()
            .map(|name| Type::from_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.effectiveness(attacking, &defending)
    }

    fn fold(&self, attacking: Type, defending: &[Type]) -> Multiplier {
        defending
            .iter()
            .fold(Multiplier::NEUTRAL, |acc, &ty| acc * self.lookup(attacking, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_type_matches_lookup() {
        let chart = TypeChart::standard();
        for attacking in Type::ALL {
            for defending in Type::ALL {
                assert_eq!(
                    chart.effectiveness(attacking, &[defending]).unwrap(),
                    chart.lookup(attacking, defending)
                );
            }
        }
    }

    #[test]
    fn test_immunity_overrides_weakness() {
        let chart = TypeChart::standard();
        // Ground vs Water/Flying: 2 × 0
        let m = chart
            .effectiveness(Type::Ground, &[Type::Water, Type::Flying])
            .unwrap();
        assert_eq!(m, Multiplier::IMMUNE);
    }

    #[test]
    fn test_double_resist() {
        let chart = TypeChart::standard();
        let m = chart
            .effectiveness(Type::Grass, &[Type::Fire, Type::Dragon])
            .unwrap();
        assert_eq!(m, Multiplier::QUARTER);
    }

    #[test]
    fn test_order_does_not_matter() {
        let chart = TypeChart::standard();
        for attacking in Type::ALL {
            let ab = chart
                .effectiveness(attacking, &[Type::Bug, Type::Steel])
                .unwrap();
            let ba = chart
                .effectiveness(attacking, &[Type::Steel, Type::Bug])
                .unwrap();
            assert_eq!(ab, ba);
        }
    }

    #[test]
    fn test_duplicate_type_squares() {
        let chart = TypeChart::standard();
        let m = chart
            .effectiveness(Type::Water, &[Type::Fire, Type::Fire])
            .unwrap();
        assert_eq!(m, Multiplier::QUADRUPLE);
    }

    #[test]
    fn test_empty_is_invalid_input() {
        let chart = TypeChart::standard();
        assert!(matches!(
            chart.effectiveness(Type::Fire, &[]),
            Err(TypeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_type_set_variant() {
        let chart = TypeChart::standard();
        let gyarados = TypeSet::dual(Type::Water, Type::Flying);
        assert_eq!(
            chart.effectiveness_against(Type::Electric, &gyarados),
            Multiplier::QUADRUPLE
        );
    }

    #[test]
    fn test_by_name() {
        let chart = TypeChart::standard();
        assert_eq!(
            chart.effectiveness_by_name("fighting", &["ghost"]),
            Ok(Multiplier::IMMUNE)
        );
        assert_eq!(
            chart.effectiveness_by_name("fighting", &["normal", "cosmic"]),
            Err(TypeError::InvalidType(String::from("cosmic")))
        );
        let empty: [&str; 0] = [];
        assert!(matches!(
            chart.effectiveness_by_name("fighting", &empty),
            Err(TypeError::InvalidInput(_))
        ));
    }
}
