//! Errors raised while loading the input tables.

use crate::lineage::LabelError;
use std::path::PathBuf;
use thiserror::Error;

/// A marker or variant table that cannot be used for classification.
///
/// All of these abort the run before any output is written.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Required column {column:?} was not found in the {kind} table: {path:?}")]
    MissingColumn { kind: &'static str, column: String, path: Option<PathBuf> },
    #[error("Malformed lineage label for marker at position {position}")]
    MalformedLabel {
        position: String,
        #[source]
        source: LabelError,
    },
    #[error("Empty position in row {row} of the {kind} table: {path:?}")]
    EmptyPosition { kind: &'static str, row: usize, path: Option<PathBuf> },
}
