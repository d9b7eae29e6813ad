use crate::model::score::{ScoreKind, ScoreSet};
use crate::model::stat::Stat;
use crate::model::stats::StatVector;
use crate::scoring::coeffs::coeffs_for;

/// Linear combination of one coefficient map over a stat vector.
pub fn linear_score(stats: &StatVector, coeffs: &[(Stat, f32)]) -> f32 {
    coeffs
        .iter()
        .map(|&(stat, coeff)| coeff * stats.get(stat))
        .sum()
}

/// All four composite scores of one aggregated build vector.
pub fn score_stats(stats: &StatVector) -> ScoreSet {
    let mut scores = ScoreSet::zero();
    for kind in ScoreKind::ALL {
        scores.set(kind, linear_score(stats, coeffs_for(kind)));
    }
    scores
}
