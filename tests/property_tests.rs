//! Property tests for the engine's invariants.

use proptest::prelude::*;
use typechart::*;

fn arb_type() -> impl Strategy<Value = Type> {
    (0..Type::COUNT).prop_map(|i| Type::ALL[i])
}

fn arb_type_set() -> impl Strategy<Value = TypeSet> {
    prop_oneof![
        arb_type().prop_map(TypeSet::single),
        (arb_type(), arb_type()).prop_map(|(a, b)| TypeSet::dual(a, b)),
    ]
}

fn arb_roster() -> impl Strategy<Value = Vec<TypeSet>> {
    proptest::collection::vec(arb_type_set(), 0..8)
}

proptest! {
    #[test]
    fn lookup_is_neutral_outside_the_table(attacking in arb_type(), defending in arb_type()) {
        let chart = TypeChart::standard();
        let listed = chart
            .entries()
            .any(|(a, d, _)| a == attacking && d == defending);
        if !listed {
            prop_assert_eq!(chart.lookup(attacking, defending), Multiplier::NEUTRAL);
        }
    }

    #[test]
    fn effectiveness_is_multiplicative(
        attacking in arb_type(),
        first in arb_type(),
        second in arb_type(),
    ) {
        let combined = effectiveness(attacking, &[first, second]).unwrap();
        prop_assert_eq!(combined, lookup(attacking, first) * lookup(attacking, second));
    }

    #[test]
    fn profile_partitions_all_types(set in arb_type_set()) {
        let profile = defensive_profile(&set).unwrap();
        let neutral = profile.neutral();
        for ty in Type::ALL {
            let buckets = [
                profile.weaknesses.contains(&ty),
                profile.resistances.contains(&ty),
                profile.immunities.contains(&ty),
                neutral.contains(&ty),
            ];
            prop_assert_eq!(buckets.iter().filter(|&&hit| hit).count(), 1);
        }
    }

    #[test]
    fn profile_agrees_with_resolver(set in arb_type_set()) {
        let profile = defensive_profile(&set).unwrap();
        for attacking in Type::ALL {
            let m = effectiveness(attacking, &set).unwrap();
            prop_assert_eq!(profile.classify(attacking), m.effect());
        }
    }

    #[test]
    fn aggregators_are_idempotent(team in arb_roster()) {
        prop_assert_eq!(roster_coverage(&team), roster_coverage(&team));
        prop_assert_eq!(roster_weaknesses(&team), roster_weaknesses(&team));
        prop_assert_eq!(team_analysis(&team), team_analysis(&team));
    }

    #[test]
    fn aggregates_only_report_something(team in arb_roster()) {
        for (_, m) in roster_coverage(&team) {
            prop_assert!(m.is_super_effective());
        }
        for (_, count) in roster_weaknesses(&team) {
            prop_assert!(count > 0 && count <= team.len());
        }
    }

    #[test]
    fn weaknesses_count_members_individually(team in arb_roster()) {
        let weaknesses = roster_weaknesses(&team);
        for attacking in Type::ALL {
            let expected = team
                .iter()
                .filter(|member| {
                    defensive_profile(member).unwrap().weaknesses.contains(&attacking)
                })
                .count();
            prop_assert_eq!(weaknesses.get(&attacking).copied().unwrap_or(0), expected);
        }
    }

    #[test]
    fn damage_multipliers_are_sorted(set in arb_type_set()) {
        let rows = damage_multipliers(&set).unwrap();
        prop_assert_eq!(rows.len(), Type::COUNT);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }
}
