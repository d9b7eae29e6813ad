pub mod config;
pub mod constraint;
pub mod objective;
pub mod optimizer;

pub use config::{ObjectiveWeights, OptimiseConfig, Priority, PriorityConfig, RangePopulation};
pub use constraint::{Comparator, Constraint, ConstraintSpec, ConstraintTarget};
pub use objective::{ObjectiveRanges, evaluate as evaluate_objective};
pub use optimizer::{RankedBuild, optimise_builds};
