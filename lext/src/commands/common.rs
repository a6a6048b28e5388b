//! Common types and utilities for lext commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::{Read, Write};
use std::path::Path;

use clap::ValueEnum;
use lexc_lex::ReportStyle;
use serde::{Deserialize, Serialize};

use crate::error::{LextError, Result};

/// Input path that stands for standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Report Settings
// ============================================================================

/// Token line style, as named on the command line and in `lext.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleChoice {
    /// `(id, 1)`
    #[default]
    Pair,
    /// `(10, 1, x)`
    Extended,
}

impl From<StyleChoice> for ReportStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Pair => ReportStyle::Pair,
            StyleChoice::Extended => ReportStyle::Extended,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text sections
    #[default]
    Text,
    /// A single JSON document
    Json,
}

// ============================================================================
// Input / Output
// ============================================================================

/// Human-readable name for an input path.
pub fn input_label(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Reads the whole source text from a file, or from stdin for `-`.
///
/// # Errors
///
/// Returns [`LextError::Validation`] if the path does not name a file, and
/// [`LextError::Io`] if reading fails or the text is not UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.exists() {
        return Err(LextError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(LextError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Writes `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if path.is_dir() {
                return Err(LextError::Validation(format!(
                    "{} {}",
                    error_messages::OUTPUT_PATH_IS_DIR,
                    path.display()
                )));
            }
            std::fs::write(path, content)?;
        },
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        },
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// Input path does not exist
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Input path is not a file
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Output path is a directory
    pub const OUTPUT_PATH_IS_DIR: &str = "Output path is a directory:";

    /// Target path is not a directory
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";
}
