use std::io::Write;

use kartgear_cli::config::{Preset, RunConfig};
use kartgear_core::model::{Catalog, Category};
use kartgear_core::optimize::{ConstraintTarget, RangePopulation, optimise_builds};

const SAMPLE: &str = r#"
inventory:
  Engine: ["Basic Engine", "Chrome Engine"]
  Exhaust: ["Gold Exhaust"]
  Suspension: ["Fresh Suspension"]
  Gearbox: ["Grass Gearbox"]
  Trinket: ["Fast Runner", "Cauldron", "Voodoo"]
priorities:
  race: High
  drift: Medium
raw_priorities:
  TrickSpd: High
constraints:
  - { target: MaxCoins, op: max, value: 10.0 }
  - { target: race, op: min, value: 0.0 }
normalize: true
range_population: catalog
top_n: 5
diversity:
  enabled: true
  min_diff_parts: 2
  per_part_max:
    Trinket: 3
"#;

#[test]
fn sample_config_resolves_and_runs() {
    let run: RunConfig = serde_yaml::from_str(SAMPLE).expect("valid yaml");
    let catalog = Catalog::builtin();
    let (inventory, config) = run.resolve(&catalog).expect("resolves");

    assert_eq!(inventory.owned(Category::Engine).len(), 2);
    assert_eq!(config.top_n, 5);
    assert_eq!(config.range_population, RangePopulation::Catalog);
    assert_eq!(config.constraints.iter().count(), 2);
    assert!(config.constraints.iter().any(|constraint| matches!(
        constraint.target,
        ConstraintTarget::Stat(_)
    )));

    let results = optimise_builds(&catalog, &inventory, &config).expect("run succeeds");
    assert!(!results.is_empty());
    assert!(results.len() <= 5);
}

#[test]
fn config_round_trips_through_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write yaml");
    let from_file = RunConfig::from_path(file.path()).expect("loads");
    let from_str: RunConfig = serde_yaml::from_str(SAMPLE).expect("valid yaml");
    assert_eq!(from_file, from_str);
}

#[test]
fn empty_inventory_means_whole_catalog() {
    let catalog = Catalog::builtin();
    let (inventory, _) = RunConfig::default().resolve(&catalog).expect("resolves");
    for category in Category::ALL {
        assert_eq!(
            inventory.owned(category).len(),
            catalog.parts(category).len()
        );
    }
}

#[test]
fn unknown_names_are_rejected_before_running() {
    let catalog = Catalog::builtin();

    let mut bad_part = RunConfig::default();
    bad_part
        .inventory
        .insert("Engine".to_string(), vec!["Warp Engine".to_string()]);
    assert!(bad_part.resolve(&catalog).is_err());

    let mut bad_tier = RunConfig::default();
    bad_tier.priorities.race = "Urgent".to_string();
    assert!(bad_tier.resolve(&catalog).is_err());

    let mut bad_target = RunConfig::default();
    bad_target.constraints.push(kartgear_cli::config::RawConstraint {
        target: "style".to_string(),
        op: "min".to_string(),
        value: 0.0,
    });
    assert!(bad_target.resolve(&catalog).is_err());
}

#[test]
fn presets_set_priorities_and_constraints() {
    let catalog = Catalog::builtin();
    let mut run = RunConfig::default();
    Preset::Coin.apply(&mut run);

    assert_eq!(run.priorities.coin, "High");
    assert_eq!(run.raw_priorities.len(), 4);
    assert!(run.constraints.iter().any(|c| c.target == "MaxCoins"));

    let (inventory, config) = run.resolve(&catalog).expect("resolves");
    let results = optimise_builds(&catalog, &inventory, &config).expect("run succeeds");
    assert!(!results.is_empty());
    // The MaxCoins cap is a hard bound on raw values.
    for build in &results {
        assert!(build.stats.get(kartgear_core::model::Stat::MaxCoins) <= 10.0);
    }
}
