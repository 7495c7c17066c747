/// Error types for table storage and indexed views.
///
/// Every fallible operation in the crate returns [`TableError`]; nothing is
/// logged and swallowed.
use crate::column::{ColumnType, ElementKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("column index {index} out of range [0, {len})")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("row {row} out of range [0, {rows})")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("element {index} out of range [0, {len})")]
    ElementOutOfRange { index: usize, len: usize },

    /// Single-key sorts only make sense on one element per row.
    #[error("column '{column}' has cell size {cell_size}, expected 1")]
    NotScalarColumn { column: String, cell_size: usize },

    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("column '{column}' holds {actual:?} elements, expected {expected:?}")]
    KindMismatch {
        column: String,
        expected: ElementKind,
        actual: ElementKind,
    },

    #[error("type mismatch in column '{column}': expected {expected:?}, got {value}")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        value: String,
    },

    #[error("column '{0}' is not nullable")]
    NotNullable(String),

    #[error("missing value for column '{0}'")]
    MissingValue(String),

    #[error("JSON serialization error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
