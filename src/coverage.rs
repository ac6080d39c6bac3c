//! Roster coverage module.
//!
//! Team-wide summaries over a roster of type sets. The roster is read
//! once as attackers (offensive coverage) and once as defenders
//! (weakness counts).
//!
//! Coverage uses single-type lookups per member type, while weakness
//! counting uses each member's combined defensive profile. Maps only
//! contain keys with something to report: absent means nothing to show.

use crate::chart::TypeChart;
use crate::multiplier::Multiplier;
use crate::type_id::Type;
use crate::type_set::TypeSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Combined team analysis.
///
/// # Examples
///
/// ```rust
/// use typechart::{team_analysis, Multiplier, Type, TypeSet};
///
/// let team = [TypeSet::single(Type::Fire), TypeSet::single(Type::Water)];
/// let analysis = team_analysis(&team);
///
/// assert_eq!(analysis.type_coverage.get(&Type::Grass), Some(&Multiplier::DOUBLE));
/// assert_eq!(analysis.team_weaknesses.get(&Type::Electric), Some(&1));
/// assert_eq!(analysis.type_distribution.get(&Type::Fire), Some(&1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    /// Best super-effective multiplier the team reaches per defending type.
    pub type_coverage: BTreeMap<Type, Multiplier>,
    /// How many members are weak to each attacking type.
    pub team_weaknesses: BTreeMap<Type, usize>,
    /// How many members carry each type.
    pub type_distribution: BTreeMap<Type, usize>,
}

impl TeamAnalysis {
    /// Weaknesses ordered by member count, most shared first.
    ///
    /// Ties keep canonical type order. At most `limit` entries are
    /// returned.
    pub fn ranked_weaknesses(&self, limit: usize) -> Vec<(Type, usize)> {
        let mut ranked: Vec<(Type, usize)> = self
            .team_weaknesses
            .iter()
            .map(|(&ty, &count)| (ty, count))
            .collect();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        ranked.truncate(limit);
        ranked
    }

    /// Defending types no member hits super-effectively.
    pub fn uncovered_types(&self) -> Vec<Type> {
        Type::ALL
            .into_iter()
            .filter(|ty| !self.type_coverage.contains_key(ty))
            .collect()
    }
}

impl TypeChart {
    /// Best super-effective multiplier the roster reaches against each
    /// defending type.
    ///
    /// Every type carried by any member is treated as an attacking type
    /// and looked up against single defending types. Defending types
    /// nobody hits for more than 1× are left out.
    pub fn roster_coverage(&self, roster: &[TypeSet]) -> BTreeMap<Type, Multiplier> {
        tracing::trace!(members = roster.len(), "computing roster coverage");
        let mut coverage: BTreeMap<Type, Multiplier> = BTreeMap::new();
        for attacking in roster.iter().flat_map(|member| member.iter().copied()) {
            for defending in Type::ALL {
                let multiplier = self.lookup(attacking, defending);
                if !multiplier.is_super_effective() {
                    continue;
                }
                coverage
                    .entry(defending)
                    .and_modify(|best| {
                        if multiplier > *best {
                            *best = multiplier;
                        }
                    })
                    .or_insert(multiplier);
            }
        }
        coverage
    }

    /// Number of roster members weak to each attacking type.
    ///
    /// Attacking types nobody is weak to are left out.
    pub fn roster_weaknesses(&self, roster: &[TypeSet]) -> BTreeMap<Type, usize> {
        tracing::trace!(members = roster.len(), "computing roster weaknesses");
        let mut weaknesses = BTreeMap::new();
        for member in roster {
            for attacking in Type::ALL {
                if self.effectiveness_against(attacking, member).is_super_effective() {
                    *weaknesses.entry(attacking).or_insert(0) += 1;
                }
            }
        }
        weaknesses
    }

    /// Number of roster members carrying each type.
    ///
    /// A member listing the same type twice counts once.
    pub fn type_distribution(&self, roster: &[TypeSet]) -> BTreeMap<Type, usize> {
        let mut distribution = BTreeMap::new();
        for member in roster {
            for (i, &ty) in member.iter().enumerate() {
                if member.as_slice()[..i].contains(&ty) {
                    continue;
                }
                *distribution.entry(ty).or_insert(0) += 1;
            }
        }
        distribution
    }

    /// Coverage, weaknesses and distribution in one record.
    pub fn team_analysis(&self, roster: &[TypeSet]) -> TeamAnalysis {
        TeamAnalysis {
            type_coverage: self.roster_coverage(roster),
            team_weaknesses: self.roster_weaknesses(roster),
            type_distribution: self.type_distribution(roster),
        }
    }
}
