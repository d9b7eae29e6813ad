use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{OptimiseError, Result};
use crate::model::category::Category;
use crate::model::score::{ScoreKind, ScoreSet};
use crate::model::stat::Stat;
use crate::optimize::constraint::ConstraintSpec;

/// Weight tier for one objective term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Fixed tier-to-multiplier table.
    pub const fn weight(self) -> f32 {
        match self {
            Priority::Low => 1.0,
            Priority::Medium => 2.5,
            Priority::High => 5.0,
        }
    }
}

impl FromStr for Priority {
    type Err = OptimiseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(OptimiseError::InvalidConfig(format!(
                "unknown priority tier \"{s}\""
            ))),
        }
    }
}

/// Which scores and raw stats matter, and how much.
#[derive(Debug, Clone, Default)]
pub struct PriorityConfig {
    pub race: Priority,
    pub coin: Priority,
    pub drift: Priority,
    pub combat: Priority,
    /// Optional raw-stat terms; stats not listed carry weight zero.
    pub raw: Vec<(Stat, Priority)>,
}

impl PriorityConfig {
    pub fn main(&self, kind: ScoreKind) -> Priority {
        match kind {
            ScoreKind::Race => self.race,
            ScoreKind::Coin => self.coin,
            ScoreKind::Drift => self.drift,
            ScoreKind::Combat => self.combat,
        }
    }

    pub fn weights(&self) -> ObjectiveWeights {
        let mut main = ScoreSet::zero();
        for kind in ScoreKind::ALL {
            main.set(kind, self.main(kind).weight());
        }
        ObjectiveWeights {
            main,
            raw: self
                .raw
                .iter()
                .map(|&(stat, tier)| (stat, tier.weight()))
                .collect(),
        }
    }
}

/// Resolved numeric weights. A zero weight includes a term but ignores it.
#[derive(Debug, Clone, Default)]
pub struct ObjectiveWeights {
    pub main: ScoreSet,
    pub raw: Vec<(Stat, f32)>,
}

impl ObjectiveWeights {
    pub fn raw_stats(&self) -> impl Iterator<Item = Stat> + '_ {
        self.raw.iter().map(|&(stat, _)| stat)
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            main: self.main.map(|_, weight| weight * factor),
            raw: self
                .raw
                .iter()
                .map(|&(stat, weight)| (stat, weight * factor))
                .collect(),
        }
    }
}

/// Which population the normalisation ranges are estimated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePopulation {
    /// Bounds over the parts selected for this run.
    #[default]
    Inventory,
    /// Bounds over the entire catalog.
    Catalog,
}

/// Everything one optimisation run is configured by. Immutable per run; no
/// state survives across runs.
#[derive(Debug, Clone)]
pub struct OptimiseConfig {
    /// How many ranked builds to return.
    pub top_n: usize,
    pub priorities: PriorityConfig,
    pub constraints: ConstraintSpec,
    /// Rescale objective terms into [0, 1] over the range population.
    pub normalize_objective: bool,
    pub range_population: RangePopulation,
    /// Spread the returned builds over distinct gear instead of near-clones.
    pub diverse: bool,
    /// Minimum number of differing part slots between two returned builds.
    pub min_diff_parts: usize,
    /// Cap on how often one part may appear per category across the results.
    pub per_part_max: Option<BTreeMap<Category, usize>>,
}

impl Default for OptimiseConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            priorities: PriorityConfig::default(),
            constraints: ConstraintSpec::default(),
            normalize_objective: true,
            range_population: RangePopulation::default(),
            diverse: true,
            min_diff_parts: 2,
            per_part_max: None,
        }
    }
}

impl OptimiseConfig {
    /// Rejected before enumeration starts; never silently ignored.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(OptimiseError::InvalidConfig(
                "top_n must be at least 1".to_string(),
            ));
        }
        if let Some(quotas) = &self.per_part_max {
            if quotas.values().any(|&limit| limit == 0) {
                return Err(OptimiseError::InvalidConfig(
                    "per-part quotas must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{OptimiseConfig, Priority, PriorityConfig};
    use crate::model::score::ScoreKind;
    use crate::model::stat::Stat;

    #[test]
    fn default_priorities_weigh_everything_equally() {
        let weights = PriorityConfig::default().weights();
        for kind in ScoreKind::ALL {
            assert_eq!(weights.main.get(kind), 1.0);
        }
        assert!(weights.raw.is_empty());
    }

    #[test]
    fn tiers_resolve_to_fixed_multipliers() {
        let config = PriorityConfig {
            race: Priority::High,
            coin: Priority::Medium,
            raw: vec![(Stat::TrickSpd, Priority::High)],
            ..PriorityConfig::default()
        };
        let weights = config.weights();
        assert_eq!(weights.main.get(ScoreKind::Race), 5.0);
        assert_eq!(weights.main.get(ScoreKind::Coin), 2.5);
        assert_eq!(weights.main.get(ScoreKind::Drift), 1.0);
        assert_eq!(weights.raw, vec![(Stat::TrickSpd, 5.0)]);
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let config = OptimiseConfig {
            top_n: 0,
            ..OptimiseConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(OptimiseConfig::default().validate().is_ok());
    }

    #[test]
    fn priority_tier_parsing() {
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("medium".parse::<Priority>(), Ok(Priority::Medium));
        assert!("urgent".parse::<Priority>().is_err());
    }
}
