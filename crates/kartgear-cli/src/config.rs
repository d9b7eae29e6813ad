use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use kartgear_core::error::OptimiseError;
use kartgear_core::model::{Catalog, Category, Inventory, ScoreKind, Stat};
use kartgear_core::optimize::{
    Comparator, Constraint, ConstraintSpec, ConstraintTarget, OptimiseConfig, Priority,
    PriorityConfig, RangePopulation,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration at {path}")]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to parse configuration at {path}")]
    Parse {
        source: serde_yaml::Error,
        path: PathBuf,
    },

    #[error(transparent)]
    Invalid(#[from] OptimiseError),
}

/// One optimisation run as described on disk. Everything is plain strings
/// here; `resolve` turns it into the core's typed inputs and rejects unknown
/// names up front.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Category -> owned part names. Empty means the whole catalog.
    #[serde(default)]
    pub inventory: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub priorities: Priorities,
    /// Optional raw-stat objective terms: stat name -> tier.
    #[serde(default)]
    pub raw_priorities: BTreeMap<String, String>,
    #[serde(default)]
    pub constraints: Vec<RawConstraint>,
    #[serde(default = "default_true")]
    pub normalize: bool,
    #[serde(default)]
    pub range_population: PopulationChoice,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub diversity: DiversityChoice,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inventory: BTreeMap::new(),
            priorities: Priorities::default(),
            raw_priorities: BTreeMap::new(),
            constraints: Vec::new(),
            normalize: true,
            range_population: PopulationChoice::default(),
            top_n: default_top_n(),
            diversity: DiversityChoice::default(),
        }
    }
}

/// Weight tiers per composite score.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Priorities {
    #[serde(default = "default_tier")]
    pub race: String,
    #[serde(default = "default_tier")]
    pub coin: String,
    #[serde(default = "default_tier")]
    pub drift: String,
    #[serde(default = "default_tier")]
    pub combat: String,
}

impl Default for Priorities {
    fn default() -> Self {
        Self {
            race: default_tier(),
            coin: default_tier(),
            drift: default_tier(),
            combat: default_tier(),
        }
    }
}

/// One hard bound as written in YAML. `op: min` keeps builds at or above the
/// value, `op: max` at or below; targets are score or stat names.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawConstraint {
    pub target: String,
    pub op: String,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PopulationChoice {
    #[default]
    Inventory,
    Catalog,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DiversityChoice {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_min_diff")]
    pub min_diff_parts: usize,
    /// Category name -> maximum appearances of one part in the results.
    #[serde(default)]
    pub per_part_max: BTreeMap<String, usize>,
}

impl Default for DiversityChoice {
    fn default() -> Self {
        Self {
            enabled: true,
            min_diff_parts: default_min_diff(),
            per_part_max: BTreeMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_top_n() -> usize {
    20
}

fn default_min_diff() -> usize {
    2
}

fn default_tier() -> String {
    "Low".to_string()
}

impl RunConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Resolve every name against the catalog and produce the core's typed
    /// inputs. Any unknown part, stat, score, category, or tier fails here,
    /// before enumeration starts.
    pub fn resolve(&self, catalog: &Catalog) -> Result<(Inventory, OptimiseConfig), ConfigError> {
        let inventory = if self.inventory.is_empty() {
            Inventory::full(catalog)
        } else {
            let mut inventory = Inventory::new();
            for (category_name, names) in &self.inventory {
                let category: Category = category_name.parse()?;
                for name in names {
                    inventory.add(category, name.clone());
                }
            }
            inventory
        };
        inventory.resolve(catalog)?;

        let priorities = PriorityConfig {
            race: self.priorities.race.parse()?,
            coin: self.priorities.coin.parse()?,
            drift: self.priorities.drift.parse()?,
            combat: self.priorities.combat.parse()?,
            raw: self
                .raw_priorities
                .iter()
                .map(|(stat, tier)| Ok((stat.parse::<Stat>()?, tier.parse::<Priority>()?)))
                .collect::<Result<Vec<_>, OptimiseError>>()?,
        };

        let mut constraints = ConstraintSpec::default();
        for raw in &self.constraints {
            constraints.push(Constraint {
                target: parse_target(&raw.target)?,
                comparator: parse_comparator(&raw.op)?,
                threshold: raw.value,
            });
        }

        let per_part_max = if self.diversity.per_part_max.is_empty() {
            None
        } else {
            let mut quotas = BTreeMap::new();
            for (category_name, limit) in &self.diversity.per_part_max {
                quotas.insert(category_name.parse::<Category>()?, *limit);
            }
            Some(quotas)
        };

        let config = OptimiseConfig {
            top_n: self.top_n,
            priorities,
            constraints,
            normalize_objective: self.normalize,
            range_population: match self.range_population {
                PopulationChoice::Inventory => RangePopulation::Inventory,
                PopulationChoice::Catalog => RangePopulation::Catalog,
            },
            diverse: self.diversity.enabled,
            min_diff_parts: self.diversity.min_diff_parts,
            per_part_max,
        };
        config.validate()?;

        Ok((inventory, config))
    }
}

fn parse_target(target: &str) -> Result<ConstraintTarget, OptimiseError> {
    if let Ok(kind) = target.parse::<ScoreKind>() {
        return Ok(ConstraintTarget::Score(kind));
    }
    if let Ok(stat) = target.parse::<Stat>() {
        return Ok(ConstraintTarget::Stat(stat));
    }
    Err(OptimiseError::InvalidConfig(format!(
        "constraint target \"{target}\" is neither a score nor a stat"
    )))
}

fn parse_comparator(op: &str) -> Result<Comparator, OptimiseError> {
    match op {
        "min" | ">=" => Ok(Comparator::AtLeast),
        "max" | "<=" => Ok(Comparator::AtMost),
        _ => Err(OptimiseError::InvalidConfig(format!(
            "constraint op \"{op}\" must be min or max"
        ))),
    }
}

/// Starting points matching the in-game build archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    Race,
    Coin,
    Handling,
    Trickjump,
}

impl Preset {
    /// Overwrite the priorities and constraints of a run with the preset's;
    /// the inventory and output settings stay as configured.
    pub fn apply(self, config: &mut RunConfig) {
        let tiers = |race: &str, coin: &str, drift: &str, combat: &str| Priorities {
            race: race.to_string(),
            coin: coin.to_string(),
            drift: drift.to_string(),
            combat: combat.to_string(),
        };
        let raw = |entries: &[(&str, &str)]| {
            entries
                .iter()
                .map(|&(stat, tier)| (stat.to_string(), tier.to_string()))
                .collect::<BTreeMap<_, _>>()
        };
        let bound = |target: &str, op: &str, value: f32| RawConstraint {
            target: target.to_string(),
            op: op.to_string(),
            value,
        };

        match self {
            Preset::Race => {
                config.priorities = tiers("High", "Low", "Medium", "Low");
                config.raw_priorities = raw(&[
                    ("Speed", "High"),
                    ("StartBoost", "Medium"),
                    ("SlipStreamSpd", "Medium"),
                ]);
                config.constraints =
                    vec![bound("race", "min", 0.0), bound("Speed", "min", 0.0)];
            }
            Preset::Coin => {
                config.priorities = tiers("Low", "High", "Low", "Low");
                config.raw_priorities = raw(&[
                    ("StartCoins", "High"),
                    ("MaxCoinsSpd", "High"),
                    ("CoinBoostSpd", "Medium"),
                    ("CoinBoostTime", "Medium"),
                ]);
                config.constraints =
                    vec![bound("coin", "min", 0.0), bound("MaxCoins", "max", 10.0)];
            }
            Preset::Handling => {
                config.priorities = tiers("Low", "Low", "High", "Low");
                config.raw_priorities = raw(&[
                    ("Steer", "High"),
                    ("DriftSteer", "High"),
                    ("AirDriftTime", "Medium"),
                ]);
                config.constraints = vec![bound("drift", "min", 0.0)];
            }
            Preset::Trickjump => {
                config.priorities = tiers("Medium", "Low", "Medium", "Low");
                config.raw_priorities = raw(&[
                    ("TrickSpd", "High"),
                    ("AirDriftTime", "Medium"),
                    ("DriftSteer", "Medium"),
                ]);
                config.constraints = vec![bound("Speed", "min", 0.0)];
            }
        }
    }
}
