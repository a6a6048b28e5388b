//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the dispatch loop
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Number literal scanning and validation
//! - `operator` - Operator scanning
//! - `delimiter` - Delimiter scanning

mod core;
mod delimiter;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
pub use number::parse_number;
