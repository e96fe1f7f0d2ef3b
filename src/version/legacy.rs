//! Groups opaque version labels by their position in a reference ordering

use std::collections::HashMap;

use tracing::warn;

/// Collapse `subset` into runs of adjacent entries in `reference`.
///
/// A run of one entry is emitted as-is, longer runs as `"start-end"` using
/// the raw labels. Entries missing from `reference` are placed after every
/// known entry (keeping their relative order) and never join a run.
///
/// Example: reference `a, b, c, d` and subset `a, b, d` gives `a-b, d`.
pub fn group_consecutive_indices<S, R>(subset: &[S], reference: &[R]) -> Vec<String>
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    if subset.is_empty() {
        return Vec::new();
    }

    let positions: HashMap<&str, usize> = reference
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.as_ref(), index))
        .collect();

    let mut sorted: Vec<(&str, Option<usize>)> = subset
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            (entry, positions.get(entry).copied())
        })
        .collect();
    sorted.sort_by_key(|(_, position)| position.unwrap_or(usize::MAX));

    let unknown: Vec<&str> = sorted
        .iter()
        .filter(|(_, position)| position.is_none())
        .map(|(entry, _)| *entry)
        .collect();
    if !unknown.is_empty() {
        warn!("Labels not found in reference ordering: {:?}", unknown);
    }

    let mut labels = Vec::new();
    let (mut last_label, mut last_position) = sorted[0];
    let mut run_start = last_label;

    for &(entry, position) in &sorted[1..] {
        let adjacent = match (last_position, position) {
            (Some(last), Some(current)) => last.checked_add(1) == Some(current),
            _ => false,
        };

        if !adjacent {
            labels.push(run_label(run_start, last_label));
            run_start = entry;
        }
        last_label = entry;
        last_position = position;
    }
    labels.push(run_label(run_start, last_label));

    labels
}

fn run_label(first: &str, last: &str) -> String {
    if first == last {
        first.to_string()
    } else {
        format!("{}-{}", first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const REFERENCE: &[&str] = &["a", "b", "c", "d"];

    #[rstest]
    #[case(&["a", "b", "d"], &["a-b", "d"])]
    #[case(&["a", "b", "c", "d"], &["a-d"])]
    #[case(&["d", "b", "a"], &["a-b", "d"])]
    #[case(&["a", "c"], &["a", "c"])]
    #[case(&["c"], &["c"])]
    #[case(&["b", "c", "zz", "d", "yy"], &["b-d", "zz", "yy"])]
    fn groups_runs_by_reference_position(#[case] subset: &[&str], #[case] expected: &[&str]) {
        assert_eq!(group_consecutive_indices(subset, REFERENCE), expected);
    }

    #[test]
    fn empty_subset_returns_empty() {
        let subset: &[&str] = &[];

        assert!(group_consecutive_indices(subset, REFERENCE).is_empty());
    }
}
