use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::category::Category;
use crate::model::part::Part;
use crate::model::stat::Stat;
use crate::model::stats::StatVector;

/// The embedded part dataset the optimiser ships with.
const BUILTIN_PARTS: &str = include_str!("../../data/parts.json");

/// Immutable category -> part mapping. Owned by the caller and passed by
/// reference into each optimisation run; the optimiser never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parts: [Vec<Part>; Category::COUNT],
}

#[derive(Debug, Deserialize)]
struct RawPart {
    name: String,
    stats: BTreeMap<String, f32>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(rename = "ENGINE")]
    engine: Vec<RawPart>,
    #[serde(rename = "EXHAUST")]
    exhaust: Vec<RawPart>,
    #[serde(rename = "SUSPENSION")]
    suspension: Vec<RawPart>,
    #[serde(rename = "GEARBOX")]
    gearbox: Vec<RawPart>,
    #[serde(rename = "TRINKET")]
    trinket: Vec<RawPart>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full shipped dataset. The asset is validated by tests, so a parse
    /// failure here means a corrupted build of the crate itself.
    pub fn builtin() -> Self {
        let raw: RawCatalog =
            serde_json::from_str(BUILTIN_PARTS).expect("embedded part dataset is valid JSON");
        let mut catalog = Self::new();
        for (category, raw_parts) in [
            (Category::Engine, raw.engine),
            (Category::Exhaust, raw.exhaust),
            (Category::Suspension, raw.suspension),
            (Category::Gearbox, raw.gearbox),
            (Category::Trinket, raw.trinket),
        ] {
            for part in raw_parts {
                catalog.insert(category, convert_part(part));
            }
        }
        catalog
    }

    pub fn insert(&mut self, category: Category, part: Part) {
        self.parts[category.index()].push(part);
    }

    pub fn parts(&self, category: Category) -> &[Part] {
        &self.parts[category.index()]
    }

    pub fn find(&self, category: Category, name: &str) -> Option<&Part> {
        self.parts(category).iter().find(|part| part.name() == name)
    }

    pub fn len(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stat keys outside the known list are projected away, matching how the
/// dataset has always been consumed.
fn convert_part(raw: RawPart) -> Part {
    let mut stats = StatVector::zero();
    for (key, value) in &raw.stats {
        if let Ok(stat) = key.parse::<Stat>() {
            stats.set(stat, *value);
        }
    }
    Part::new(raw.name, stats)
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::model::category::Category;
    use crate::model::stat::Stat;

    #[test]
    fn builtin_dataset_parses_and_is_complete() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.parts(Category::Engine).len(), 19);
        assert_eq!(catalog.parts(Category::Exhaust).len(), 14);
        assert_eq!(catalog.parts(Category::Suspension).len(), 14);
        assert_eq!(catalog.parts(Category::Gearbox).len(), 18);
        assert_eq!(catalog.parts(Category::Trinket).len(), 21);
    }

    #[test]
    fn builtin_lookup_by_name() {
        let catalog = Catalog::builtin();
        let engine = catalog
            .find(Category::Engine, "Basic Engine")
            .expect("part exists");
        assert_eq!(engine.stats().get(Stat::Speed), 0.5);
        assert!(catalog.find(Category::Engine, "Warp Engine").is_none());
    }

    #[test]
    fn unknown_stat_keys_are_dropped() {
        // Tank Trinket carries a "SlowAreaPenalty" key outside the stat list.
        let catalog = Catalog::builtin();
        let part = catalog
            .find(Category::Trinket, "Tank Trinket")
            .expect("part exists");
        assert_eq!(part.stats().get(Stat::Speed), 0.4);
        assert_eq!(part.stats().get(Stat::SlowDownSpd), 0.0);
    }
}
