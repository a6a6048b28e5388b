//! lexc-util - Core Utilities and Foundation Types
//!
//! This crate provides the small set of foundation types shared by the
//! lexical analyzer and its front ends:
//!
//! - [`Span`] - byte range plus line/column of a lexeme in the source
//! - [`SymbolTable`] - append-only, deduplicating, 1-based table of lexemes
//! - [`TableIndex`] - the 1-based handle a token stores into a table
//! - [`Constant`] - an `f64` that can key a table by exact value
//!
//! # Symbol Tables
//!
//! Every identifier and every numeric literal the scanner accepts is
//! recorded exactly once. The first occurrence is appended; later
//! occurrences resolve to the index handed out the first time:
//!
//! ```
//! use lexc_util::SymbolTable;
//!
//! let mut identifiers: SymbolTable<String> = SymbolTable::new();
//! let x = identifiers.intern("x".to_string());
//! let y = identifiers.intern("y".to_string());
//! assert_eq!(identifiers.intern("x".to_string()), x);
//! assert_eq!((x.get(), y.get()), (1, 2));
//! ```
//!
//! Tables live only as long as one analysis. There is no process-wide
//! table, so independent analyses never observe each other's entries.

#![warn(missing_docs)]

pub mod error;
pub mod span;
pub mod symbol_table;

pub use error::{TableIndexError, TableIndexResult};
pub use span::Span;
pub use symbol_table::{Constant, SymbolTable, TableIndex};
