use std::fmt::Write;

use kartgear_core::model::ScoreKind;
use kartgear_core::optimize::RankedBuild;

/// Plain-text ranking table plus a stat detail block for the best build.
pub fn render(results: &[RankedBuild]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>4}  {:>9}  {:>13} {:>13} {:>13} {:>13}  build",
        "rank", "objective", "race", "coin", "drift", "combat"
    );
    for (rank, build) in results.iter().enumerate() {
        let _ = write!(out, "{:>4}  {:>9.3}", rank + 1, build.objective);
        for kind in ScoreKind::ALL {
            let _ = write!(
                out,
                "  {:>6.2} ({:>3.0}%)",
                build.scores.get(kind),
                build.percent_of_max.get(kind)
            );
        }
        let _ = writeln!(out, "  {}", build.part_names().join(" | "));
    }

    if let Some(best) = results.first() {
        let _ = writeln!(out, "\nBest build stat totals:");
        for (stat, value) in best.stats.nonzero() {
            let _ = writeln!(out, "  {stat:<18} {value:>8.2}");
        }
        if let Some(normalized) = &best.normalized_scores {
            let _ = writeln!(out, "Normalised scores (over the range population):");
            for (kind, value) in normalized.iter() {
                let _ = writeln!(out, "  {kind:<18} {value:>8.3}");
            }
        }
    }

    out
}
