//! Long-to-wide reshape of resolved observations.

use std::collections::BTreeMap;

use unctad_model::PanelRow;

use super::{Candidate, PanelStats};

/// Folds resolved candidates into one [`PanelRow`] per (iso3, year).
///
/// The country label is taken from the first candidate seen for the key.
/// Candidates with an empty area code or no parsable year cannot be keyed
/// and are counted in [`PanelStats::unkeyed_dropped`]. Rows come back
/// ordered by (iso3, year).
pub fn pivot_panel(candidates: &[Candidate<'_>], stats: &mut PanelStats) -> Vec<PanelRow> {
    let mut rows: BTreeMap<(String, i64), PanelRow> = BTreeMap::new();
    for candidate in candidates {
        let iso3 = candidate.area_code();
        let Some(year) = candidate.year.filter(|_| !iso3.is_empty()) else {
            stats.unkeyed_dropped += 1;
            continue;
        };
        rows.entry((iso3.to_string(), year))
            .or_insert_with(|| {
                PanelRow::new(candidate.observation.area_label.trim(), iso3, year)
            })
            .set_value(candidate.indicator, candidate.value);
    }
    rows.into_values().collect()
}
