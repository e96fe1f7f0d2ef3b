//! Version classification and grouping layer
//!
//! This module turns raw game-version strings into structured tokens and
//! groups them into runs that the display layer can render as short labels.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────▶│    Token    │────▶│   Grouper   │
//! │  (ordering) │     │ (classify)  │     │(major runs) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Legacy    │
//! │(index runs) │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Ordered catalog of every known game version
//! - [`error`]: Error types for catalog construction
//! - [`grouper`]: Groups release tokens into per-major minor runs
//! - [`legacy`]: Groups opaque labels into runs by catalog position
//! - [`token`]: Classifies a raw string as a release or a legacy label

pub mod catalog;
pub mod error;
pub mod grouper;
pub mod legacy;
pub mod token;
