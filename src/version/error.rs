use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate catalog entry: {0}")]
    DuplicateEntry(String),
}
