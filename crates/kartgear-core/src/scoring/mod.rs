pub mod coeffs;
pub mod compute;
pub mod ranges;

pub use coeffs::{COIN_COEFFS, COMBAT_COEFFS, DRIFT_COEFFS, RACE_COEFFS, coeffs_for};
pub use compute::{linear_score, score_stats};
pub use ranges::{
    Range, ScoreRanges, StatRanges, aggregate, catalog_score_maxima, estimate_score_ranges,
    estimate_stat_ranges, percent_of_max,
};
