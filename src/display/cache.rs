//! Memo of the last computed label list
//!
//! Labels are recomputed only when the input versions differ from the
//! previous call.

use tracing::debug;

use crate::display::formatter::Formatter;

pub struct LabelCache<'a> {
    formatter: Formatter<'a>,
    last: Option<CachedLabels>,
}

struct CachedLabels {
    input: Vec<String>,
    labels: Vec<String>,
}

impl<'a> LabelCache<'a> {
    pub fn new(formatter: Formatter<'a>) -> Self {
        Self {
            formatter,
            last: None,
        }
    }

    /// Labels for `versions`, reusing the previous result when the input is unchanged
    pub fn labels<S: AsRef<str>>(&mut self, versions: &[S]) -> &[String] {
        if !self.is_fresh(versions) {
            debug!("Input changed, recomputing labels");
            self.last = Some(CachedLabels {
                input: versions.iter().map(|v| v.as_ref().to_string()).collect(),
                labels: self.formatter.format(versions),
            });
        }

        match &self.last {
            Some(cached) => &cached.labels,
            None => &[],
        }
    }

    /// Returns true if the cached labels were computed from `versions`
    pub fn is_fresh<S: AsRef<str>>(&self, versions: &[S]) -> bool {
        self.last.as_ref().is_some_and(|cached| {
            cached.input.len() == versions.len()
                && cached
                    .input
                    .iter()
                    .zip(versions)
                    .all(|(cached, current)| cached == current.as_ref())
        })
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
