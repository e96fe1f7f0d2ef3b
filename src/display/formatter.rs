//! Turns a project's game versions into display labels
//!
//! Release versions become per-major labels (`1.2`, `1.1-1.3`, `1.x`),
//! legacy versions become runs over the catalog's legacy entries
//! (`b1.6-b1.7`). Release labels always come first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::display::sink::{LabelSink, SinkError};
use crate::version::catalog::VersionCatalog;
use crate::version::grouper::{GroupingPolicy, MajorVersionRange, group_versions};
use crate::version::legacy::group_consecutive_indices;
use crate::version::token::{format_version, is_release};

/// What to do with project versions the catalog doesn't know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownVersionPolicy {
    /// Keep them, ordered after every known version in input order
    #[default]
    SortLast,
    /// Remove them before grouping
    Drop,
}

/// Every major in the catalog with its minors, plus the legacy entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub releases: Vec<MajorVersionRange>,
    pub legacy: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    catalog: &'a VersionCatalog,
    unknown_versions: UnknownVersionPolicy,
}

impl<'a> Formatter<'a> {
    pub fn new(catalog: &'a VersionCatalog) -> Self {
        Self {
            catalog,
            unknown_versions: UnknownVersionPolicy::default(),
        }
    }

    pub fn with_unknown_versions(mut self, policy: UnknownVersionPolicy) -> Self {
        self.unknown_versions = policy;
        self
    }

    /// Compute the display labels for a project's versions.
    ///
    /// Deterministic for a given catalog and input. An empty input gives an
    /// empty list.
    pub fn format<S: AsRef<str>>(&self, project_versions: &[S]) -> Vec<String> {
        let mut sorted = self.catalog.sort_by_position(project_versions);
        let mut seen = HashSet::new();
        sorted.retain(|v| seen.insert(v.clone()));

        let unknown: Vec<&str> = sorted
            .iter()
            .map(String::as_str)
            .filter(|v| !self.catalog.contains(v))
            .collect();
        if !unknown.is_empty() {
            warn!(
                "Versions not in catalog ({:?}): {:?}",
                self.unknown_versions, unknown
            );
            if self.unknown_versions == UnknownVersionPolicy::Drop {
                sorted.retain(|v| self.catalog.contains(v));
            }
        }

        let (release_versions, legacy_versions): (Vec<&str>, Vec<&str>) =
            sorted.iter().map(String::as_str).partition(|v| is_release(v));

        let all_releases_grouped = group_versions(&self.catalog.releases(), GroupingPolicy::Loose);
        let project_grouped = group_versions(&release_versions, GroupingPolicy::ConsecutiveOnly);

        let mut labels: Vec<String> = project_grouped
            .iter()
            .map(|range| release_label(range, &all_releases_grouped))
            .collect();
        labels.extend(group_consecutive_indices(
            &legacy_versions,
            &self.catalog.legacy(),
        ));

        debug!("Formatted {} versions as {:?}", project_versions.len(), labels);
        labels
    }

    /// Format and hand the labels to a sink
    pub fn render<S: AsRef<str>>(
        &self,
        project_versions: &[S],
        sink: &mut dyn LabelSink,
    ) -> Result<(), SinkError> {
        sink.emit(&self.format(project_versions))
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            releases: group_versions(&self.catalog.releases(), GroupingPolicy::Loose),
            legacy: self.catalog.legacy().into_iter().map(String::from).collect(),
        }
    }
}

/// Label for one project range.
///
/// A single minor is shown as that version, a range covering every minor the
/// catalog knows for its major as `MAJOR.x`, anything else as `first-last`.
fn release_label(range: &MajorVersionRange, all_releases: &[MajorVersionRange]) -> String {
    let major = range.major();
    if range.minors().len() == 1 {
        return format_version(major, range.first_minor());
    }

    let covers_major = all_releases
        .iter()
        .find(|catalog_range| catalog_range.major() == major)
        .is_some_and(|catalog_range| catalog_range.minors() == range.minors());

    if covers_major {
        format!("{}.x", major)
    } else {
        format!(
            "{}-{}",
            format_version(major, range.first_minor()),
            format_version(major, range.last_minor())
        )
    }
}

/// Format with the default unknown-version policy
pub fn format_versions_for_display<S: AsRef<str>>(
    project_versions: &[S],
    catalog: &VersionCatalog,
) -> Vec<String> {
    Formatter::new(catalog).format(project_versions)
}
