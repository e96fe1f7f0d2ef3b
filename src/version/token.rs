//! Game version classification
//!
//! A version is a "release" when it looks like `MAJOR`, `MAJOR.MINOR` or
//! `MAJOR.MINOR.PATCH` (digits only). Everything else is a legacy label that
//! is only ever compared by its position in the catalog.

use std::sync::LazyLock;

use regex::Regex;

/// `MAJOR(.MINOR)?(.PATCH)?`, patch is accepted but ignored
static RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(\.[0-9]+)?(\.[0-9]+)?$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionToken {
    /// Release-like version (`1.2`, `1.2.3`, `10`)
    Release {
        raw: String,
        /// Major kept as text; `"01"` and `"1"` are different majors
        major: String,
        minor: u64,
    },
    /// Anything that doesn't look like a release (`b1.7.3`, `23w14a`, ...)
    Legacy { raw: String },
}

impl VersionToken {
    /// Classify a raw version string. Never fails.
    ///
    /// Examples:
    /// - "1.2" -> Release { major: "1", minor: 2 }
    /// - "1.2.5" -> Release { major: "1", minor: 2 }
    /// - "1" -> Release { major: "1", minor: 0 }
    /// - "b1.7" -> Legacy
    pub fn parse(raw: &str) -> Self {
        let Some(captures) = RELEASE_RE.captures(raw) else {
            return Self::legacy(raw);
        };

        let major = captures[1].to_string();
        let minor = match captures.get(2) {
            Some(m) => match m.as_str().trim_start_matches('.').parse::<u64>() {
                Ok(minor) => minor,
                // Minor overflows u64, not something we can put in a range
                Err(_) => return Self::legacy(raw),
            },
            None => 0,
        };

        Self::Release {
            raw: raw.to_string(),
            major,
            minor,
        }
    }

    fn legacy(raw: &str) -> Self {
        Self::Legacy {
            raw: raw.to_string(),
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Self::Release { raw, .. } | Self::Legacy { raw } => raw,
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(self, Self::Release { .. })
    }
}

/// Returns true if the string would parse as a release token
pub fn is_release(raw: &str) -> bool {
    VersionToken::parse(raw).is_release()
}

/// Render a major/minor pair the way labels show it: minor 0 is omitted.
pub fn format_version(major: &str, minor: u64) -> String {
    if minor == 0 {
        major.to_string()
    } else {
        format!("{}.{}", major, minor)
    }
}
