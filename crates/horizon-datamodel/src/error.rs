//! Error types for the model layer.

use thiserror::Error;

use crate::model::ColumnType;

/// Broad classification of a [`ModelError`].
///
/// Lets callers branch on recoverability without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed something the operation can never accept.
    InvalidArgument,
    /// The operation was valid, but issued before the object was ready.
    IllegalState,
}

/// Errors raised by stores, columns, paths, and selections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A store was constructed with an empty column list.
    #[error("a list store needs at least one column")]
    NoColumns,

    /// The same column descriptor appears more than once in one store.
    #[error("column descriptor at position {position} is already used at position {first}")]
    DuplicateColumn {
        /// Where the descriptor first appeared.
        first: usize,
        /// Where it appeared again.
        position: usize,
    },

    /// The column descriptor is already bound to another store.
    #[error("column descriptor at position {position} already belongs to another store")]
    ColumnAlreadyBound {
        /// Position of the offending descriptor in the constructor argument.
        position: usize,
    },

    /// The column's ordinal was queried before any store bound it.
    #[error("column descriptor has not been added to a list store yet")]
    ColumnNotBound,

    /// The column belongs to a different store.
    #[error("column descriptor belongs to a different store")]
    ForeignColumn,

    /// An ordinal past the store's last column.
    #[error("column {ordinal} is out of range for a store with {count} columns")]
    ColumnOutOfRange {
        /// Requested ordinal.
        ordinal: usize,
        /// Number of columns in the store.
        count: usize,
    },

    /// A value of the wrong kind for the column.
    #[error("column {ordinal} holds {expected} values, got {found}")]
    TypeMismatch {
        /// Column ordinal.
        ordinal: usize,
        /// Declared column type.
        expected: ColumnType,
        /// Type of the offending value.
        found: ColumnType,
    },

    /// The iter was produced by a different store.
    #[error("tree iter belongs to a different store")]
    ForeignIter,

    /// The row the iter addressed has been removed.
    #[error("tree iter refers to a row that no longer exists")]
    StaleIter,

    /// Path text or indices that do not describe a position.
    #[error("invalid tree path {0:?}")]
    InvalidPath(String),

    /// The reserved encoded value meaning "no path".
    #[error("encoded tree path is the reserved \"no path\" value")]
    NoPath,

    /// A well-formed path with no row behind it.
    #[error("no row at path {0}")]
    PathNotFound(String),
}

impl ModelError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ColumnNotBound => ErrorKind::IllegalState,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Returns `true` for errors caused by an unacceptable argument.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns `true` for errors caused by using an object too early.
    pub fn is_illegal_state(&self) -> bool {
        self.kind() == ErrorKind::IllegalState
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
