//! Project version input
//!
//! Projects store their game versions either as a list or as one
//! comma-joined string (`"1.18, 1.19"`). Both normalize to an ordered list.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawProjectVersions")]
pub struct ProjectVersions(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProjectVersions {
    List(Vec<String>),
    Joined(String),
}

impl From<RawProjectVersions> for ProjectVersions {
    fn from(raw: RawProjectVersions) -> Self {
        match raw {
            RawProjectVersions::List(versions) => Self(versions),
            RawProjectVersions::Joined(joined) => Self::parse(&joined),
        }
    }
}

impl ProjectVersions {
    /// Split a comma-joined string, trimming entries and dropping empty ones
    pub fn parse(joined: &str) -> Self {
        Self(
            joined
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for ProjectVersions {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
