//! Display layer
//! - formatter.rs: Builds chip labels from a project's versions and the catalog
//! - input.rs: Normalizes list or comma-joined project versions
//! - cache.rs: Memo of the last computed labels
//! - sink.rs: Sinks that receive the final labels (plain text, JSON)

pub mod cache;
pub mod formatter;
pub mod input;
pub mod sink;

pub use cache::LabelCache;
pub use formatter::{Formatter, UnknownVersionPolicy, format_versions_for_display};
pub use input::ProjectVersions;
pub use sink::{JsonSink, LabelSink, PlainSink, SinkError};
