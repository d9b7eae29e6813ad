#![deny(warnings)]
pub mod error;
pub mod model;
pub mod optimize;
pub mod scoring;

pub use error::{OptimiseError, Result};
pub use model::{
    Catalog, Category, Direction, Inventory, Part, ScoreKind, ScoreSet, Selection, Stat, StatVector,
};
pub use optimize::{
    Comparator, Constraint, ConstraintSpec, ConstraintTarget, OptimiseConfig, Priority,
    PriorityConfig, RangePopulation, RankedBuild, optimise_builds,
};
