use crate::model::score::{ScoreKind, ScoreSet};
use crate::model::stats::StatVector;
use crate::optimize::config::ObjectiveWeights;
use crate::scoring::ranges::{ScoreRanges, StatRanges};

/// Normalisation ranges for the objective, present only when the toggle is
/// on. Constraints never look at these; they stay in raw units.
#[derive(Debug, Clone, Default)]
pub struct ObjectiveRanges {
    pub scores: Option<ScoreRanges>,
    pub stats: StatRanges,
}

/// Scalar objective of one build: weighted composite scores plus weighted
/// direction-corrected raw stats. The sign flip for lower-is-better stats is
/// applied identically with and without normalisation.
pub fn evaluate(
    scores: &ScoreSet,
    stats: &StatVector,
    weights: &ObjectiveWeights,
    ranges: &ObjectiveRanges,
) -> f32 {
    let mut objective = 0.0;

    for kind in ScoreKind::ALL {
        let weight = weights.main.get(kind);
        if weight == 0.0 {
            continue;
        }
        let mut value = scores.get(kind);
        if let Some(score_ranges) = &ranges.scores {
            value = score_ranges.get(kind).normalize(value);
        }
        objective += weight * value;
    }

    for &(stat, weight) in &weights.raw {
        if weight == 0.0 {
            continue;
        }
        let mut value = stats.get(stat);
        if let Some(range) = ranges.stats.get(stat) {
            value = range.normalize(value);
        }
        objective += weight * stat.direction().sign() * value;
    }

    objective
}

#[cfg(test)]
mod tests {
    use super::{ObjectiveRanges, evaluate};
    use crate::model::score::{ScoreKind, ScoreSet};
    use crate::model::stat::Stat;
    use crate::model::stats::StatVector;
    use crate::optimize::config::{Priority, PriorityConfig};

    fn weights() -> crate::optimize::config::ObjectiveWeights {
        PriorityConfig {
            race: Priority::High,
            raw: vec![(Stat::Daze, Priority::Medium), (Stat::TrickSpd, Priority::Low)],
            ..PriorityConfig::default()
        }
        .weights()
    }

    #[test]
    fn lower_is_better_stats_enter_negated() {
        let weights = weights();
        let stats = StatVector::from_pairs(&[(Stat::Daze, 10.0)]);
        let less_dazed = StatVector::from_pairs(&[(Stat::Daze, 2.0)]);
        let ranges = ObjectiveRanges::default();
        let scores = ScoreSet::zero();
        assert!(
            evaluate(&scores, &less_dazed, &weights, &ranges)
                > evaluate(&scores, &stats, &weights, &ranges)
        );
    }

    #[test]
    fn doubling_weights_doubles_the_objective() {
        let weights = weights();
        let doubled = weights.scaled(2.0);
        let stats = StatVector::from_pairs(&[(Stat::Daze, 4.0), (Stat::TrickSpd, 7.0)]);
        let mut scores = ScoreSet::zero();
        scores.set(ScoreKind::Race, 3.0);
        scores.set(ScoreKind::Coin, -1.0);
        let ranges = ObjectiveRanges::default();

        let base = evaluate(&scores, &stats, &weights, &ranges);
        let scaled = evaluate(&scores, &stats, &doubled, &ranges);
        assert!((scaled - 2.0 * base).abs() < 1e-5);
    }

    #[test]
    fn zero_weight_terms_are_ignored_without_error() {
        let mut weights = weights();
        weights.raw.push((Stat::MaxCoins, 0.0));
        let stats = StatVector::from_pairs(&[(Stat::MaxCoins, 1_000.0)]);
        let without = {
            let mut w = weights.clone();
            w.raw.pop();
            w
        };
        let ranges = ObjectiveRanges::default();
        let scores = ScoreSet::zero();
        assert_eq!(
            evaluate(&scores, &stats, &weights, &ranges),
            evaluate(&scores, &stats, &without, &ranges)
        );
    }
}
