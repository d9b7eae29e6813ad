use crate::model::category::Category;
use thiserror::Error;

/// Failures surfaced by one optimisation run.
///
/// Empty candidate spaces (missing gear in a category, fewer than two
/// trinkets) are deliberately *not* errors; they yield zero results.
#[derive(Debug, Error, PartialEq)]
pub enum OptimiseError {
    /// The inventory references a part the catalog does not contain.
    #[error("unknown part \"{name}\" in {category}")]
    UnknownPart { category: Category, name: String },

    /// A configuration value names a stat that does not exist.
    #[error("unknown stat \"{0}\"")]
    UnknownStat(String),

    /// A configuration value names a composite score that does not exist.
    #[error("unknown score \"{0}\"")]
    UnknownScore(String),

    /// A configuration value names a part category that does not exist.
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    /// The optimiser configuration is structurally invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, OptimiseError>;
