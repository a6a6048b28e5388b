//! Command modules for the lext CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod analyze;
pub mod init;

// Re-export command types and functions
pub use analyze::{run_analyze, AnalyzeArgs};
pub use init::{run_init, InitArgs};
