//! Groups release versions into per-major runs of minors
//!
//! Two policies are supported:
//! - `Loose`: every minor of a major lands in one range. Used on the whole
//!   catalog to answer "which minors exist for this major".
//! - `ConsecutiveOnly`: minors only join a range when they are numerically
//!   adjacent to its last minor. Used on a project's versions so that
//!   `3.1, 3.2, 3.4` becomes `3.1-3.2` and `3.4`, not one misleading range.

use serde::Serialize;
use tracing::debug;

use crate::version::token::VersionToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingPolicy {
    Loose,
    ConsecutiveOnly,
}

/// A run of minors sharing one major, never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorVersionRange {
    major: String,
    /// Minors in ascending order
    minors: Vec<u64>,
}

impl MajorVersionRange {
    fn new(major: String, minor: u64) -> Self {
        Self {
            major,
            minors: vec![minor],
        }
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minors(&self) -> &[u64] {
        &self.minors
    }

    pub fn first_minor(&self) -> u64 {
        self.minors[0]
    }

    pub fn last_minor(&self) -> u64 {
        self.minors[self.minors.len() - 1]
    }

    fn accepts(&self, major: &str, minor: u64, policy: GroupingPolicy) -> bool {
        if self.major != major {
            return false;
        }

        match policy {
            GroupingPolicy::Loose => true,
            GroupingPolicy::ConsecutiveOnly => {
                let last = self.minors[self.minors.len() - 1];
                match self.minors.len() {
                    // Direction not settled yet, either neighbour continues the run
                    1 => last.abs_diff(minor) == 1,
                    len => {
                        let ascending = last > self.minors[len - 2];
                        if ascending {
                            last.checked_add(1) == Some(minor)
                        } else {
                            minor.checked_add(1) == Some(last)
                        }
                    }
                }
            }
        }
    }
}

/// Group release versions by major.
///
/// Legacy (non release-like) versions are skipped. Ranges are returned in
/// the order their first version appears in `versions`, and each range lists
/// its minors ascending. A repeated minor always opens a new range under
/// `ConsecutiveOnly`.
pub fn group_versions<S: AsRef<str>>(
    versions: &[S],
    policy: GroupingPolicy,
) -> Vec<MajorVersionRange> {
    let mut ranges: Vec<MajorVersionRange> = Vec::new();

    for version in versions {
        let VersionToken::Release { major, minor, .. } = VersionToken::parse(version.as_ref())
        else {
            continue;
        };

        match ranges
            .iter_mut()
            .find(|range| range.accepts(&major, minor, policy))
        {
            Some(range) => range.minors.push(minor),
            None => {
                debug!("Opening range for major {} at minor {}", major, minor);
                ranges.push(MajorVersionRange::new(major, minor));
            }
        }
    }

    for range in &mut ranges {
        range.minors.sort_unstable();
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn range(major: &str, minors: &[u64]) -> MajorVersionRange {
        MajorVersionRange {
            major: major.to_string(),
            minors: minors.to_vec(),
        }
    }

    #[test]
    fn loose_collects_every_minor_of_a_major() {
        let versions = ["1.0", "1.1", "2.0", "1.3", "b1.7", "2.4"];

        let result = group_versions(&versions, GroupingPolicy::Loose);

        assert_eq!(
            result,
            vec![range("1", &[0, 1, 3]), range("2", &[0, 4])]
        );
    }

    #[rstest]
    #[case(&["1.1", "1.2", "1.4"], vec![range("1", &[1, 2]), range("1", &[4])])]
    #[case(&["1.4", "1.2", "1.1"], vec![range("1", &[4]), range("1", &[1, 2])])]
    #[case(&["3.1", "3.2", "3.3"], vec![range("3", &[1, 2, 3])])]
    #[case(&["3.3", "3.2", "3.1"], vec![range("3", &[1, 2, 3])])]
    #[case(&["1.2", "2.3", "1.3", "2.4"], vec![range("1", &[2, 3]), range("2", &[3, 4])])]
    #[case(&["1.1", "1.1"], vec![range("1", &[1]), range("1", &[1])])]
    #[case(&["1.1", "1.2", "1.1"], vec![range("1", &[1, 2]), range("1", &[1])])]
    fn consecutive_only_splits_at_gaps(
        #[case] versions: &[&str],
        #[case] expected: Vec<MajorVersionRange>,
    ) {
        assert_eq!(
            group_versions(versions, GroupingPolicy::ConsecutiveOnly),
            expected
        );
    }

    #[test]
    fn majors_are_compared_as_text() {
        let result = group_versions(&["01.1", "1.2"], GroupingPolicy::Loose);

        assert_eq!(result, vec![range("01", &[1]), range("1", &[2])]);
    }

    #[test]
    fn legacy_versions_are_skipped() {
        let result = group_versions(&["a1.0", "b1.7.3"], GroupingPolicy::Loose);

        assert!(result.is_empty());
    }

    #[rstest]
    #[case(GroupingPolicy::Loose)]
    #[case(GroupingPolicy::ConsecutiveOnly)]
    fn grouped_ranges_are_never_empty(#[case] policy: GroupingPolicy) {
        let versions = ["1.4", "b1.7", "1.1", "1.1", "2.0", "1.2", "01.3"];

        let result = group_versions(&versions, policy);

        assert!(!result.is_empty());
        for range in &result {
            assert!(!range.minors().is_empty());
            assert!(range.first_minor() <= range.last_minor());
        }
    }

    #[test]
    fn first_and_last_minor() {
        let range = range("1", &[2, 3, 4]);

        assert_eq!(range.first_minor(), 2);
        assert_eq!(range.last_minor(), 4);
    }
}
