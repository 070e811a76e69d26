//! Range selection over period-keyed record maps
//!
//! Slices a bucket map to an inclusive chronological range with lenient
//! bound resolution: a bound that is not an exact member resolves to the
//! first key at or after it, and a bound past the end of the data falls back
//! to the matching range boundary so partial filter input still produces a
//! usable report.

use crate::models::{PeriodKey, RecordsMap};

use super::FilteredReport;

/// Select the inclusive sub-range [start, end] of a bucket map
///
/// A missing bound defaults to the corresponding end of the data. When both
/// provided bounds resolve to nothing the result is empty; when exactly one
/// does, the unresolved side defaults to its range boundary.
///
/// The slice is always taken between the smaller and larger resolved index,
/// so reversed bounds cannot panic; swapping reversed start/end *labels* is
/// the caller's responsibility.
pub fn select_range(
    buckets: &RecordsMap,
    start: Option<&PeriodKey>,
    end: Option<&PeriodKey>,
) -> FilteredReport {
    let keys: Vec<PeriodKey> = buckets.keys().copied().collect();
    if keys.is_empty() {
        return FilteredReport::new();
    }

    let start_idx = resolve_bound(&keys, start, 0);
    let end_idx = resolve_bound(&keys, end, keys.len() - 1);

    let (start_idx, end_idx) = match (start_idx, end_idx) {
        (None, None) => return FilteredReport::new(),
        (s, e) => (s.unwrap_or(0), e.unwrap_or(keys.len() - 1)),
    };

    let from = start_idx.min(end_idx);
    let to = start_idx.max(end_idx);

    keys[from..=to]
        .iter()
        .map(|key| (*key, buckets[key].clone()))
        .collect()
}

/// Resolve a bound to an index into the sorted key list
///
/// `None` (bound omitted) resolves to `default`. A provided bound resolves
/// to the first key at or after it, or `None` when every key is before it.
fn resolve_bound(keys: &[PeriodKey], bound: Option<&PeriodKey>, default: usize) -> Option<usize> {
    match bound {
        None => Some(default),
        Some(bound) => keys.iter().position(|key| key >= bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PeriodBucket, RecordCategory, TransactionRecord};

    fn record(amount: i64) -> TransactionRecord {
        TransactionRecord {
            date: None,
            date_label: String::new(),
            category: RecordCategory::Deposit,
            name: String::new(),
            reason: String::new(),
            amount: Money::from_units(amount),
            is_outflow: false,
            counterparty: String::new(),
        }
    }

    fn month_map(labels: &[&str]) -> RecordsMap {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let key = PeriodKey::parse(label).unwrap();
                (key, PeriodBucket::from_records(vec![record((i as i64 + 1) * 100)]))
            })
            .collect()
    }

    fn keys_of(filtered: &FilteredReport) -> Vec<String> {
        filtered.keys().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_empty_map() {
        let filtered = select_range(&RecordsMap::new(), None, None);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_defaults_to_full_range() {
        let map = month_map(&["January 2025", "February 2025", "March 2025"]);
        let filtered = select_range(&map, None, None);
        assert_eq!(
            keys_of(&filtered),
            vec!["January 2025", "February 2025", "March 2025"]
        );
    }

    #[test]
    fn test_exact_bounds() {
        let map = month_map(&["January 2025", "February 2025", "March 2025", "April 2025"]);
        let start = PeriodKey::parse("February 2025").unwrap();
        let end = PeriodKey::parse("March 2025").unwrap();

        let filtered = select_range(&map, Some(&start), Some(&end));
        assert_eq!(keys_of(&filtered), vec!["February 2025", "March 2025"]);
    }

    #[test]
    fn test_missing_bound_resolves_to_next_available() {
        // February is absent; the bound resolves to the first key at or
        // after it.
        let map = month_map(&["January 2025", "March 2025", "April 2025"]);
        let start = PeriodKey::parse("February 2025").unwrap();

        let filtered = select_range(&map, Some(&start), None);
        assert_eq!(keys_of(&filtered), vec!["March 2025", "April 2025"]);
    }

    #[test]
    fn test_bound_before_all_keys() {
        let map = month_map(&["March 2025", "April 2025"]);
        let start = PeriodKey::parse("January 2020").unwrap();

        let filtered = select_range(&map, Some(&start), None);
        assert_eq!(keys_of(&filtered), vec!["March 2025", "April 2025"]);
    }

    #[test]
    fn test_one_unresolvable_bound_defaults_to_boundary() {
        // A start past the last key cannot resolve; it defaults to index 0
        // rather than failing the whole filter.
        let map = month_map(&["January 2025", "February 2025"]);
        let start = PeriodKey::parse("January 2030").unwrap();
        let end = PeriodKey::parse("February 2025").unwrap();

        let filtered = select_range(&map, Some(&start), Some(&end));
        assert_eq!(keys_of(&filtered), vec!["January 2025", "February 2025"]);
    }

    #[test]
    fn test_both_unresolvable_bounds_give_empty() {
        let map = month_map(&["January 2025", "February 2025"]);
        let start = PeriodKey::parse("January 2030").unwrap();
        let end = PeriodKey::parse("March 2030").unwrap();

        let filtered = select_range(&map, Some(&start), Some(&end));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_reversed_bounds_never_panic() {
        let map = month_map(&["January 2025", "February 2025", "March 2025"]);
        let start = PeriodKey::parse("March 2025").unwrap();
        let end = PeriodKey::parse("January 2025").unwrap();

        let filtered = select_range(&map, Some(&start), Some(&end));
        assert_eq!(
            keys_of(&filtered),
            vec!["January 2025", "February 2025", "March 2025"]
        );
    }

    #[test]
    fn test_year_scenario_from_sparse_map() {
        // Bounds far before the data resolve to the nearest available year.
        let map = month_map(&["2023", "2024"]);
        let bound = PeriodKey::parse("1999").unwrap();

        let filtered = select_range(&map, Some(&bound), Some(&bound));
        assert_eq!(keys_of(&filtered), vec!["2023"]);
    }

    #[test]
    fn test_idempotence() {
        let map = month_map(&["January 2025", "February 2025", "March 2025", "April 2025"]);
        let start = PeriodKey::parse("February 2025").unwrap();
        let end = PeriodKey::parse("March 2025").unwrap();

        let once = select_range(&map, Some(&start), Some(&end));
        let twice = select_range(&once, Some(&start), Some(&end));
        assert_eq!(keys_of(&once), keys_of(&twice));
    }

    #[test]
    fn test_buckets_are_carried_through() {
        let map = month_map(&["January 2025", "February 2025"]);
        let filtered = select_range(&map, None, None);
        let key = PeriodKey::parse("February 2025").unwrap();
        assert_eq!(filtered[&key].records[0].amount.units(), 200);
    }
}
