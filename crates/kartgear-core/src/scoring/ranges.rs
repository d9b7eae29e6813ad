use crate::model::catalog::Catalog;
use crate::model::category::Category;
use crate::model::inventory::Selection;
use crate::model::part::Part;
use crate::model::score::{ScoreKind, ScoreSet};
use crate::model::stat::Stat;
use crate::model::stats::StatVector;
use crate::scoring::coeffs::coeffs_for;
use crate::scoring::compute::linear_score;

const DEGENERATE_WIDTH: f32 = 1e-9;

/// (lo, hi) bounds of one dimension over a candidate population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lo: f32,
    pub hi: f32,
}

impl Range {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub fn width(&self) -> f32 {
        self.hi - self.lo
    }

    /// Min/max rescale into [0, 1]. A zero-width range maps every value to
    /// the constant 0 instead of dividing by zero.
    pub fn normalize(&self, value: f32) -> f32 {
        let width = self.width();
        if width <= DEGENERATE_WIDTH {
            return 0.0;
        }
        ((value - self.lo) / width).clamp(0.0, 1.0)
    }

    fn shifted(&self, other: &Range) -> Range {
        Range::new(self.lo + other.lo, self.hi + other.hi)
    }

    fn padded(&self, floor: f32) -> Range {
        let pad = if self.hi > self.lo {
            (0.05 * self.width()).max(floor)
        } else {
            floor
        };
        Range::new(self.lo - pad, self.hi + pad)
    }
}

/// Per-composite-score bounds used for objective normalisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRanges {
    ranges: [Range; ScoreKind::COUNT],
}

impl ScoreRanges {
    pub const fn get(&self, kind: ScoreKind) -> Range {
        self.ranges[kind.index()]
    }
}

/// Per-raw-stat bounds for the stats the objective actually weighs.
#[derive(Debug, Clone, Default)]
pub struct StatRanges {
    ranges: Vec<(Stat, Range)>,
}

impl StatRanges {
    pub fn get(&self, stat: Stat) -> Option<Range> {
        self.ranges
            .iter()
            .find(|(entry, _)| *entry == stat)
            .map(|(_, range)| *range)
    }
}

fn category_bounds(parts: &[&Part], stat: Stat) -> Range {
    let mut bounds = Range::new(f32::INFINITY, f32::NEG_INFINITY);
    for part in parts {
        let value = part.stats().get(stat);
        bounds.lo = bounds.lo.min(value);
        bounds.hi = bounds.hi.max(value);
    }
    if parts.is_empty() {
        Range::new(0.0, 0.0)
    } else {
        bounds
    }
}

/// Best and worst unordered-pair sums: the two largest and two smallest
/// single values, since pair members are distinct.
fn trinket_pair_bounds(trinkets: &[&Part], stat: Stat) -> Range {
    if trinkets.len() < 2 {
        return Range::new(0.0, 0.0);
    }
    let mut values: Vec<f32> = trinkets.iter().map(|part| part.stats().get(stat)).collect();
    values.sort_by(f32::total_cmp);
    Range::new(
        values[0] + values[1],
        values[values.len() - 1] + values[values.len() - 2],
    )
}

/// Theoretical bounds of one aggregated stat: the per-category extremes are
/// independent, so their sums bound every enumerable build.
fn total_stat_bounds(selection: &Selection<'_>, stat: Stat) -> Range {
    let mut total = Range::new(0.0, 0.0);
    for category in Category::FIXED {
        total = total.shifted(&category_bounds(selection.parts(category), stat));
    }
    total.shifted(&trinket_pair_bounds(selection.parts(Category::Trinket), stat))
}

/// Sign-aware bound of a linear combination over per-stat bounds.
fn linear_bounds(selection: &Selection<'_>, coeffs: &[(Stat, f32)]) -> Range {
    let mut lo = 0.0;
    let mut hi = 0.0;
    for &(stat, coeff) in coeffs {
        let bounds = total_stat_bounds(selection, stat);
        if coeff >= 0.0 {
            lo += coeff * bounds.lo;
            hi += coeff * bounds.hi;
        } else {
            lo += coeff * bounds.hi;
            hi += coeff * bounds.lo;
        }
    }
    Range::new(lo, hi)
}

/// Composite-score bounds over the population, padded so real builds stay
/// strictly inside the normalisation window.
pub fn estimate_score_ranges(selection: &Selection<'_>) -> ScoreRanges {
    let mut ranges = [Range::new(0.0, 0.0); ScoreKind::COUNT];
    for kind in ScoreKind::ALL {
        ranges[kind.index()] = linear_bounds(selection, coeffs_for(kind)).padded(1.0);
    }
    ScoreRanges { ranges }
}

/// Raw-stat bounds for the listed stats, padded like the score ranges but
/// with a tighter floor.
pub fn estimate_stat_ranges(selection: &Selection<'_>, stats: &[Stat]) -> StatRanges {
    let ranges = stats
        .iter()
        .map(|&stat| (stat, total_stat_bounds(selection, stat).padded(0.1)))
        .collect();
    StatRanges { ranges }
}

/// Theoretical per-score maxima over the full catalog: the best single part
/// per fixed category plus the best two trinkets. Always computed over the
/// whole catalog, independent of the objective's normalisation population.
pub fn catalog_score_maxima(catalog: &Catalog) -> ScoreSet {
    let mut maxima = ScoreSet::zero();
    for kind in ScoreKind::ALL {
        let coeffs = coeffs_for(kind);
        let mut total = 0.0;
        for category in Category::FIXED {
            total += catalog
                .parts(category)
                .iter()
                .map(|part| linear_score(part.stats(), coeffs))
                .max_by(f32::total_cmp)
                .unwrap_or(0.0);
        }
        total += best_two_trinkets(catalog, coeffs);
        maxima.set(kind, total);
    }
    maxima
}

fn best_two_trinkets(catalog: &Catalog, coeffs: &[(Stat, f32)]) -> f32 {
    let trinkets = catalog.parts(Category::Trinket);
    if trinkets.len() < 2 {
        return 0.0;
    }
    let mut scores: Vec<f32> = trinkets
        .iter()
        .map(|part| linear_score(part.stats(), coeffs))
        .collect();
    scores.sort_by(f32::total_cmp);
    scores[scores.len() - 1] + scores[scores.len() - 2]
}

/// 0-100 display values against the catalog maxima.
pub fn percent_of_max(scores: &ScoreSet, maxima: &ScoreSet) -> ScoreSet {
    scores.map(|kind, value| {
        let max = maxima.get(kind);
        if max > 0.0 { 100.0 * value / max } else { 0.0 }
    })
}

/// The aggregated stat vector of an explicit part combination.
pub fn aggregate<'a>(parts: impl IntoIterator<Item = &'a Part>) -> StatVector {
    StatVector::sum(parts.into_iter().map(Part::stats))
}

#[cfg(test)]
mod tests {
    use super::{
        Range, aggregate, catalog_score_maxima, estimate_score_ranges, estimate_stat_ranges,
        percent_of_max,
    };
    use crate::model::catalog::Catalog;
    use crate::model::category::Category;
    use crate::model::inventory::{Inventory, Selection};
    use crate::model::part::Part;
    use crate::model::score::ScoreKind;
    use crate::model::stat::Stat;
    use crate::model::stats::StatVector;
    use crate::scoring::compute::score_stats;

    fn part(name: &str, pairs: &[(Stat, f32)]) -> Part {
        Part::new(name, StatVector::from_pairs(pairs))
    }

    fn tiny_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(Category::Engine, part("E1", &[(Stat::Speed, 1.0)]));
        catalog.insert(Category::Engine, part("E2", &[(Stat::Speed, 3.0)]));
        catalog.insert(Category::Exhaust, part("X1", &[(Stat::StartBoost, 10.0)]));
        catalog.insert(Category::Suspension, part("S1", &[]));
        catalog.insert(Category::Gearbox, part("G1", &[(Stat::T1, 0.5)]));
        catalog.insert(Category::Trinket, part("T1", &[(Stat::Speed, 0.2)]));
        catalog.insert(Category::Trinket, part("T2", &[(Stat::Speed, 0.6)]));
        catalog.insert(Category::Trinket, part("T3", &[(Stat::Daze, 30.0)]));
        catalog
    }

    #[test]
    fn zero_width_range_normalizes_to_constant() {
        let range = Range::new(4.0, 4.0);
        assert_eq!(range.normalize(4.0), 0.0);
        assert_eq!(range.normalize(123.0), 0.0);
    }

    #[test]
    fn normalized_values_stay_in_unit_interval() {
        let range = Range::new(-2.0, 6.0);
        assert_eq!(range.normalize(-2.0), 0.0);
        assert_eq!(range.normalize(6.0), 1.0);
        assert_eq!(range.normalize(2.0), 0.5);
        assert_eq!(range.normalize(99.0), 1.0);
        assert_eq!(range.normalize(-99.0), 0.0);
    }

    #[test]
    fn score_ranges_contain_every_enumerable_build() {
        let catalog = tiny_catalog();
        let selection = Selection::of_catalog(&catalog);
        let ranges = estimate_score_ranges(&selection);

        let trinkets = selection.parts(Category::Trinket);
        for engine in selection.parts(Category::Engine) {
            for i in 0..trinkets.len() {
                for j in i + 1..trinkets.len() {
                    let stats = aggregate([
                        *engine,
                        selection.parts(Category::Exhaust)[0],
                        selection.parts(Category::Suspension)[0],
                        selection.parts(Category::Gearbox)[0],
                        trinkets[i],
                        trinkets[j],
                    ]);
                    let scores = score_stats(&stats);
                    for kind in ScoreKind::ALL {
                        let range = ranges.get(kind);
                        let value = scores.get(kind);
                        assert!(value > range.lo && value < range.hi, "{kind}: {value}");
                    }
                }
            }
        }
    }

    #[test]
    fn stat_ranges_cover_trinket_pair_extremes() {
        let catalog = tiny_catalog();
        let selection = Selection::of_catalog(&catalog);
        let ranges = estimate_stat_ranges(&selection, &[Stat::Speed]);
        let speed = ranges.get(Stat::Speed).expect("requested stat");
        // Worst pair 0.2 + 0.6 floor is unreachable here; bounds use extremes.
        assert!(speed.lo <= 1.0 + 0.2 + 0.0);
        assert!(speed.hi >= 3.0 + 0.6 + 0.2);
        assert!(ranges.get(Stat::Daze).is_none());
    }

    #[test]
    fn catalog_maxima_match_best_single_choices() {
        let catalog = tiny_catalog();
        let maxima = catalog_score_maxima(&catalog);
        // Race: E2 (3.0) plus the best pair (0.6 + 0.2) times the speed
        // coeff, plus X1's start boost contribution.
        let expected = (3.0 + 0.6 + 0.2) * 2.840_731 + 10.0 * 0.426_109_65;
        assert!((maxima.get(ScoreKind::Race) - expected).abs() < 1e-4);
    }

    #[test]
    fn percent_display_guards_non_positive_maxima() {
        let catalog = tiny_catalog();
        let maxima = catalog_score_maxima(&catalog);
        let selection = Inventory::full(&catalog)
            .resolve(&catalog)
            .expect("resolves");
        let stats = aggregate([
            selection.parts(Category::Engine)[1],
            selection.parts(Category::Exhaust)[0],
            selection.parts(Category::Suspension)[0],
            selection.parts(Category::Gearbox)[0],
            selection.parts(Category::Trinket)[0],
            selection.parts(Category::Trinket)[1],
        ]);
        let percents = percent_of_max(&score_stats(&stats), &maxima);
        assert!((percents.get(ScoreKind::Race) - 100.0).abs() < 1e-3);
        // Combat maximum is zero for this catalog (only Daze, lower better).
        assert_eq!(percents.get(ScoreKind::Combat), 0.0);
    }
}
