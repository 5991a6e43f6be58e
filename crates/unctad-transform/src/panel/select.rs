//! Row selection, unit normalization, and duplicate resolution.

use std::cmp::Ordering;

use unctad_ingest::{parse_f64, parse_year};
use unctad_model::{BreakdownFilter, Indicator, PanelOptions, RawObservation};

use super::PanelStats;

/// Observation that survived filtering, with its coerced values.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub observation: &'a RawObservation,
    pub indicator: Indicator,
    /// `None` when `TIME_PERIOD` is not an integer year.
    pub year: Option<i64>,
    /// Value in millions; `None` when the value or the multiplier is unusable.
    pub value: Option<f64>,
    pub rank: u32,
}

impl Candidate<'_> {
    pub fn area_code(&self) -> &str {
        self.observation.area_code.trim()
    }

    fn key(&self) -> (&str, Option<i64>, Indicator) {
        (self.area_code(), self.year, self.indicator)
    }
}

/// Rescales `value` from `10^unit_mult` units to millions.
///
/// # Examples
///
/// ```
/// use unctad_transform::normalize_to_millions;
///
/// assert_eq!(normalize_to_millions(Some(520.0), Some(6.0)), Some(520.0));
/// assert_eq!(normalize_to_millions(Some(1.5), Some(9.0)), Some(1500.0));
/// let thousands = normalize_to_millions(Some(2_000.0), Some(3.0)).unwrap();
/// assert!((thousands - 2.0).abs() < 1e-12);
/// assert_eq!(normalize_to_millions(Some(1.0), None), None);
/// ```
pub fn normalize_to_millions(value: Option<f64>, unit_mult: Option<f64>) -> Option<f64> {
    let exponent = unit_mult? - 6.0;
    let scaled = value? * 10f64.powf(exponent);
    scaled.is_finite().then_some(scaled)
}

fn is_total(observation: &RawObservation, filter: &BreakdownFilter) -> bool {
    observation.sex.trim() == filter.sex
        && observation.age.trim() == filter.age
        && observation.urbanisation.trim() == filter.urbanisation
        && observation.comp_breakdown_1.trim() == filter.comp_breakdown_1
        && observation.comp_breakdown_2.trim() == filter.comp_breakdown_2
        && observation.comp_breakdown_3.trim() == filter.comp_breakdown_3
}

/// Applies the indicator, frequency, and breakdown filters, then coerces
/// year and value. Coercion failures become `None`; no row is dropped for
/// a malformed number.
pub fn select_observations<'a>(
    observations: &'a [RawObservation],
    options: &PanelOptions,
    stats: &mut PanelStats,
) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::new();
    for observation in observations {
        let Some(indicator) = Indicator::from_code(observation.indicator_code.trim())
            .filter(|indicator| options.indicators.contains(indicator))
        else {
            continue;
        };
        stats.indicator_rows += 1;

        if observation.freq.trim() != options.frequency {
            continue;
        }
        stats.frequency_rows += 1;

        if !is_total(observation, &options.breakdowns) {
            continue;
        }
        stats.total_rows += 1;

        let value = normalize_to_millions(
            parse_f64(&observation.obs_value),
            parse_f64(&observation.unit_mult),
        );
        candidates.push(Candidate {
            observation,
            indicator,
            year: parse_year(&observation.time_period),
            value,
            rank: options.status_priority.rank(&observation.obs_status),
        });
    }
    candidates
}

fn candidate_order(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    a.key()
        .cmp(&b.key())
        .then(a.rank.cmp(&b.rank))
        .then(a.observation.position.cmp(&b.observation.position))
}

/// Keeps the best-ranked candidate per (area, year, indicator).
///
/// Candidates are ordered by (area, year, indicator, status rank, input
/// position) and the first of each key wins, so equal ranks resolve to the
/// earliest row in the source.
pub fn resolve_duplicates(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(candidate_order);
    candidates.dedup_by(|later, earlier| later.key() == earlier.key());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(position: usize, status: &str, value: &str) -> RawObservation {
        RawObservation {
            position,
            area_code: "FRA".to_string(),
            area_label: "France".to_string(),
            indicator_code: Indicator::Exports.code().to_string(),
            time_period: "2020".to_string(),
            obs_value: value.to_string(),
            unit_mult: "6".to_string(),
            freq: "A".to_string(),
            sex: "_T".to_string(),
            age: "_T".to_string(),
            urbanisation: "_T".to_string(),
            comp_breakdown_1: "_Z".to_string(),
            comp_breakdown_2: "_Z".to_string(),
            comp_breakdown_3: "_Z".to_string(),
            obs_status: status.to_string(),
        }
    }

    #[test]
    fn normalization_handles_scales() {
        let units = normalize_to_millions(Some(3_000_000.0), Some(0.0)).unwrap();
        assert!((units - 3.0).abs() < 1e-9);
        assert_eq!(normalize_to_millions(Some(-4.0), Some(6.0)), Some(-4.0));
        assert_eq!(normalize_to_millions(None, Some(6.0)), None);
        assert_eq!(normalize_to_millions(Some(1.0), Some(f64::MAX)), None);
    }

    #[test]
    fn filters_count_each_stage() {
        let mut other_indicator = observation(0, "A", "1");
        other_indicator.indicator_code = "UNCTAD_DE_ICT_GOODS".to_string();
        let mut quarterly = observation(1, "A", "1");
        quarterly.freq = "Q".to_string();
        let mut female = observation(2, "A", "1");
        female.sex = "F".to_string();
        let mut by_composite = observation(3, "A", "1");
        by_composite.comp_breakdown_2 = "ICT".to_string();
        let kept = observation(4, "A", "1");
        let observations = vec![other_indicator, quarterly, female, by_composite, kept];

        let mut stats = PanelStats::default();
        let candidates = select_observations(&observations, &PanelOptions::default(), &mut stats);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].observation.position, 4);
        assert_eq!(stats.indicator_rows, 4);
        assert_eq!(stats.frequency_rows, 3);
        assert_eq!(stats.total_rows, 1);
    }

    #[test]
    fn malformed_numbers_become_none() {
        let mut bad_mult = observation(0, "A", "10");
        bad_mult.unit_mult = "millions".to_string();
        let bad_value = observation(1, "A", "..");
        let mut bad_year = observation(2, "A", "10");
        bad_year.time_period = "2020-Q1".to_string();
        let observations = vec![bad_mult, bad_value, bad_year];

        let mut stats = PanelStats::default();
        let candidates = select_observations(&observations, &PanelOptions::default(), &mut stats);

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].value, None);
        assert_eq!(candidates[1].value, None);
        assert_eq!(candidates[2].year, None);
        assert_eq!(candidates[2].value, Some(10.0));
    }

    #[test]
    fn best_status_wins_regardless_of_order() {
        let observations = vec![
            observation(0, "P", "500"),
            observation(1, "A", "520"),
            observation(2, "E", "510"),
        ];
        let mut stats = PanelStats::default();
        let candidates = select_observations(&observations, &PanelOptions::default(), &mut stats);
        let resolved = resolve_duplicates(candidates);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].value, Some(520.0));
    }

    #[test]
    fn equal_rank_keeps_first_seen() {
        let observations = vec![
            observation(0, "X", "1"),
            observation(1, "Y", "2"),
            observation(2, "X", "3"),
        ];
        let mut stats = PanelStats::default();
        let candidates = select_observations(&observations, &PanelOptions::default(), &mut stats);
        let resolved = resolve_duplicates(candidates);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].observation.position, 0);
    }

    #[test]
    fn distinct_keys_are_kept() {
        let mut imports = observation(1, "A", "7");
        imports.indicator_code = Indicator::Imports.code().to_string();
        let mut later = observation(2, "A", "8");
        later.time_period = "2021".to_string();
        let observations = vec![observation(0, "A", "6"), imports, later];

        let mut stats = PanelStats::default();
        let candidates = select_observations(&observations, &PanelOptions::default(), &mut stats);
        assert_eq!(resolve_duplicates(candidates).len(), 3);
    }
}
