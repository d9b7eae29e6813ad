use core::fmt;

use crate::model::score::{ScoreKind, ScoreSet};
use crate::model::stat::Stat;
use crate::model::stats::StatVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// value >= threshold
    AtLeast,
    /// value <= threshold
    AtMost,
}

impl Comparator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Comparator::AtLeast => ">=",
            Comparator::AtMost => "<=",
        }
    }

    pub fn holds(self, value: f32, threshold: f32) -> bool {
        match self {
            Comparator::AtLeast => value >= threshold,
            Comparator::AtMost => value <= threshold,
        }
    }
}

/// What a constraint is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintTarget {
    Score(ScoreKind),
    Stat(Stat),
}

impl fmt::Display for ConstraintTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintTarget::Score(kind) => kind.fmt(f),
            ConstraintTarget::Stat(stat) => stat.fmt(f),
        }
    }
}

/// One hard bound. Always evaluated against raw values; thresholds carry the
/// value's natural unit regardless of the normalisation toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub target: ConstraintTarget,
    pub comparator: Comparator,
    pub threshold: f32,
}

impl Constraint {
    pub const fn at_least(target: ConstraintTarget, threshold: f32) -> Self {
        Self {
            target,
            comparator: Comparator::AtLeast,
            threshold,
        }
    }

    pub const fn at_most(target: ConstraintTarget, threshold: f32) -> Self {
        Self {
            target,
            comparator: Comparator::AtMost,
            threshold,
        }
    }

    pub fn holds(&self, scores: &ScoreSet, stats: &StatVector) -> bool {
        let value = match self.target {
            ConstraintTarget::Score(kind) => scores.get(kind),
            ConstraintTarget::Stat(stat) => stats.get(stat),
        };
        self.comparator.holds(value, self.threshold)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.target,
            self.comparator.symbol(),
            self.threshold
        )
    }
}

/// Ordered list of hard bounds; a build passes only if every bound holds.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSpec {
    constraints: Vec<Constraint>,
}

impl ConstraintSpec {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Silent filtering: a violated bound rejects the build, nothing more.
    pub fn passes(&self, scores: &ScoreSet, stats: &StatVector) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.holds(scores, stats))
    }
}
