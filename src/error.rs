//! Error types for dxfwrite

use std::io;
use thiserror::Error;

/// Main error type for dxfwrite operations
///
/// Geometry and pattern errors are raised when a record is constructed; a
/// record that was built successfully always emits.
#[derive(Debug, Error)]
pub enum DxfError {
    /// Non-finite coordinate or non-positive scale
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Dash pattern with non-finite or zero-length elements, or no elements
    #[error("Invalid dash pattern: {0}")]
    InvalidPattern(String),

    /// Empty record name, or one containing a line break
    #[error("Invalid name in table {table}: {name:?}")]
    InvalidName { table: &'static str, name: String },

    /// A record with the same name already exists in the table
    #[error("Entry '{name}' already exists in table {table}")]
    DuplicateEntry { table: &'static str, name: String },

    /// A record defining the same thing already exists under another name
    #[error("Entry '{name}' in table {table} duplicates existing entry '{existing}'")]
    DuplicateDefinition {
        table: &'static str,
        name: String,
        existing: String,
    },

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Text could not be represented in the output code page
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type alias for dxfwrite operations
pub type Result<T> = std::result::Result<T, DxfError>;
