//! Core error types for lexc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for table index construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIndexError {
    /// Table indices are 1-based; zero never names an entry
    #[error("table index must be at least 1, got 0")]
    Zero,
}

/// Result type alias for table index operations
pub type TableIndexResult<T> = std::result::Result<T, TableIndexError>;
