use std::collections::HashMap;

use crate::error::Result;
use crate::model::catalog::Catalog;
use crate::model::category::Category;
use crate::model::inventory::{Inventory, Selection};
use crate::model::score::ScoreSet;
use crate::model::stat::Stat;
use crate::model::stats::StatVector;
use crate::optimize::config::{OptimiseConfig, RangePopulation};
use crate::optimize::objective::{ObjectiveRanges, evaluate};
use crate::scoring::compute::score_stats;
use crate::scoring::ranges::{
    catalog_score_maxima, estimate_score_ranges, estimate_stat_ranges, percent_of_max,
};

/// How many candidates to keep per trinket pair before the global ranking;
/// generous enough that dedup and diversity never starve.
const PER_PAIR_KEEP_FACTOR: usize = 20;

/// Which category each build slot draws from. The two trinket slots hold a
/// canonical pair (first index < second), so trinket order can never
/// distinguish two builds.
const SLOT_CATEGORIES: [Category; 6] = [
    Category::Engine,
    Category::Exhaust,
    Category::Suspension,
    Category::Gearbox,
    Category::Trinket,
    Category::Trinket,
];

/// One scored build as returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBuild {
    pub engine: String,
    pub exhaust: String,
    pub suspension: String,
    pub gearbox: String,
    pub trinkets: [String; 2],
    /// Raw aggregated stats: the elementwise sum of the five parts.
    pub stats: StatVector,
    /// Raw composite scores.
    pub scores: ScoreSet,
    /// Scores rescaled over the configured range population, when enabled.
    pub normalized_scores: Option<ScoreSet>,
    /// 0-100 against the theoretical catalog maxima.
    pub percent_of_max: ScoreSet,
    pub objective: f32,
}

impl RankedBuild {
    pub fn part_names(&self) -> [&str; 6] {
        [
            &self.engine,
            &self.exhaust,
            &self.suspension,
            &self.gearbox,
            &self.trinkets[0],
            &self.trinkets[1],
        ]
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    /// Selection indices per slot; doubles as identity and tie-break key.
    key: [usize; 6],
    stats: StatVector,
    scores: ScoreSet,
    objective: f32,
}

/// Runs the whole pipeline: enumerate, aggregate, score, filter, evaluate,
/// dedupe, rank, select. Pure function of its inputs.
pub fn optimise_builds(
    catalog: &Catalog,
    inventory: &Inventory,
    config: &OptimiseConfig,
) -> Result<Vec<RankedBuild>> {
    config.validate()?;
    let selection = inventory.resolve(catalog)?;
    if !selection.is_viable() {
        return Ok(Vec::new());
    }

    let weights = config.priorities.weights();
    let ranges = if config.normalize_objective {
        let population = match config.range_population {
            RangePopulation::Inventory => selection.clone(),
            RangePopulation::Catalog => Selection::of_catalog(catalog),
        };
        let raw_stats: Vec<Stat> = weights.raw_stats().collect();
        ObjectiveRanges {
            scores: Some(estimate_score_ranges(&population)),
            stats: estimate_stat_ranges(&population, &raw_stats),
        }
    } else {
        ObjectiveRanges::default()
    };

    let engines = selection.parts(Category::Engine);
    let exhausts = selection.parts(Category::Exhaust);
    let suspensions = selection.parts(Category::Suspension);
    let gearboxes = selection.parts(Category::Gearbox);
    let trinkets = selection.parts(Category::Trinket);

    let keep = config
        .top_n
        .saturating_mul(PER_PAIR_KEEP_FACTOR)
        .max(config.top_n);
    let mut candidates: Vec<Candidate> = Vec::new();

    for ti in 0..trinkets.len() {
        for tj in (ti + 1)..trinkets.len() {
            let mut pair_stats = *trinkets[ti].stats();
            pair_stats.add(trinkets[tj].stats());

            let mut pair_candidates: Vec<Candidate> = Vec::new();
            for (ei, engine) in engines.iter().enumerate() {
                let mut engine_stats = pair_stats;
                engine_stats.add(engine.stats());
                for (xi, exhaust) in exhausts.iter().enumerate() {
                    let mut exhaust_stats = engine_stats;
                    exhaust_stats.add(exhaust.stats());
                    for (si, suspension) in suspensions.iter().enumerate() {
                        let mut suspension_stats = exhaust_stats;
                        suspension_stats.add(suspension.stats());
                        for (gi, gearbox) in gearboxes.iter().enumerate() {
                            let mut stats = suspension_stats;
                            stats.add(gearbox.stats());

                            let scores = score_stats(&stats);
                            if !config.constraints.passes(&scores, &stats) {
                                continue;
                            }
                            let objective = evaluate(&scores, &stats, &weights, &ranges);
                            pair_candidates.push(Candidate {
                                key: [ei, xi, si, gi, ti, tj],
                                stats,
                                scores,
                                objective,
                            });
                        }
                    }
                }
            }

            pair_candidates.sort_by(compare_candidates);
            pair_candidates.truncate(keep);
            candidates.extend(pair_candidates);
        }
    }

    candidates.sort_by(compare_candidates);
    candidates.dedup_by(|a, b| a.key == b.key);

    let picked: Vec<Candidate> = if config.diverse {
        diversify(&candidates, config)
    } else {
        candidates.into_iter().take(config.top_n).collect()
    };

    let maxima = catalog_score_maxima(catalog);
    Ok(picked
        .into_iter()
        .map(|candidate| {
            let name = |slot: usize| {
                selection.parts(SLOT_CATEGORIES[slot])[candidate.key[slot]]
                    .name()
                    .to_string()
            };
            RankedBuild {
                engine: name(0),
                exhaust: name(1),
                suspension: name(2),
                gearbox: name(3),
                trinkets: [name(4), name(5)],
                percent_of_max: percent_of_max(&candidate.scores, &maxima),
                normalized_scores: ranges.scores.as_ref().map(|score_ranges| {
                    candidate
                        .scores
                        .map(|kind, value| score_ranges.get(kind).normalize(value))
                }),
                stats: candidate.stats,
                scores: candidate.scores,
                objective: candidate.objective,
            }
        })
        .collect())
}

/// Descending objective; the identity key breaks ties so repeated runs over
/// identical input produce identical output.
fn compare_candidates(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
    b.objective
        .total_cmp(&a.objective)
        .then_with(|| a.key.cmp(&b.key))
}

fn hamming(a: &Candidate, b: &Candidate) -> usize {
    a.key
        .iter()
        .zip(b.key.iter())
        .filter(|(lhs, rhs)| lhs != rhs)
        .count()
}

/// Greedy diverse selection over the ranked candidates: best first, then
/// candidates differing in at least `min_diff_parts` slots from everything
/// already chosen, relaxing the distance one step at a time when stuck and
/// finally filling by rank. Per-category quotas always hold.
fn diversify(candidates: &[Candidate], config: &OptimiseConfig) -> Vec<Candidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let quota = |category: Category| {
        config
            .per_part_max
            .as_ref()
            .and_then(|quotas| quotas.get(&category).copied())
    };

    let mut counts: [HashMap<usize, usize>; 6] = Default::default();
    let mut selected: Vec<usize> = Vec::new();

    let quota_ok = |counts: &[HashMap<usize, usize>; 6], candidate: &Candidate| {
        SLOT_CATEGORIES.iter().enumerate().all(|(slot, &category)| {
            quota(category).is_none_or(|limit| {
                counts[slot]
                    .get(&candidate.key[slot])
                    .copied()
                    .unwrap_or(0)
                    < limit
            })
        })
    };

    let add = |counts: &mut [HashMap<usize, usize>; 6], selected: &mut Vec<usize>, i: usize| {
        selected.push(i);
        for (slot, count) in counts.iter_mut().enumerate() {
            *count.entry(candidates[i].key[slot]).or_insert(0) += 1;
        }
    };

    add(&mut counts, &mut selected, 0);
    let mut cur_min = config.min_diff_parts;

    while selected.len() < config.top_n && selected.len() < candidates.len() {
        let mut picked = false;

        for i in 1..candidates.len() {
            if selected.contains(&i) || !quota_ok(&counts, &candidates[i]) {
                continue;
            }
            if selected
                .iter()
                .all(|&j| hamming(&candidates[i], &candidates[j]) >= cur_min)
            {
                add(&mut counts, &mut selected, i);
                picked = true;
                if selected.len() >= config.top_n {
                    break;
                }
            }
        }

        if !picked {
            if cur_min > 0 {
                cur_min -= 1;
            } else {
                for i in 1..candidates.len() {
                    if selected.contains(&i) || !quota_ok(&counts, &candidates[i]) {
                        continue;
                    }
                    add(&mut counts, &mut selected, i);
                    if selected.len() >= config.top_n {
                        break;
                    }
                }
                break;
            }
        }
    }

    selected
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}
