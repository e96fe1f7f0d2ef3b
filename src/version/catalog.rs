//! Ordered catalog of every known game version
//!
//! The catalog defines the total order used for sorting and grouping. It is
//! built once from configuration and passed explicitly to the formatter.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::version::error::CatalogError;
use crate::version::token::is_release;

/// Catalog used when no configuration overrides it
pub const DEFAULT_CATALOG: &[&str] = &["1.0"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct VersionCatalog {
    entries: IndexSet<String>,
}

impl VersionCatalog {
    /// Build a catalog from entries in their canonical order.
    ///
    /// Returns `CatalogError::DuplicateEntry` if the same version appears twice,
    /// since a version can only have one position.
    pub fn new<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for entry in entries {
            let entry = entry.into();
            if set.contains(&entry) {
                return Err(CatalogError::DuplicateEntry(entry));
            }
            set.insert(entry);
        }
        Ok(Self { entries: set })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.entries.contains(version)
    }

    /// Position of a version in the catalog, if known
    pub fn position(&self, version: &str) -> Option<usize> {
        self.entries.get_index_of(version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Release-like entries, in catalog order
    pub fn releases(&self) -> Vec<&str> {
        self.iter().filter(|v| is_release(v)).collect()
    }

    /// Legacy (non release-like) entries, in catalog order
    pub fn legacy(&self) -> Vec<&str> {
        self.iter().filter(|v| !is_release(v)).collect()
    }

    /// Stable-sort versions by catalog position.
    ///
    /// Versions missing from the catalog go after every known version and keep
    /// their relative input order.
    pub fn sort_by_position<S: AsRef<str>>(&self, versions: &[S]) -> Vec<String> {
        let mut sorted: Vec<String> = versions.iter().map(|v| v.as_ref().to_string()).collect();
        sorted.sort_by_key(|v| self.position(v).unwrap_or(usize::MAX));
        sorted
    }
}

// IndexSet equality ignores order, catalogs are only equal in the same order
impl PartialEq for VersionCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for VersionCatalog {}

impl Default for VersionCatalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_CATALOG.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for VersionCatalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<VersionCatalog> for Vec<String> {
    fn from(catalog: VersionCatalog) -> Self {
        catalog.entries.into_iter().collect()
    }
}
