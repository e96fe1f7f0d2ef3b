//! Compacts game-version lists into short display labels.
//!
//! - [`version`]: Classification and grouping of game versions
//! - [`display`]: Label formatting, input normalization and sinks
//! - [`config`]: Configuration file and XDG paths
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod display;
pub mod logging;
pub mod version;
