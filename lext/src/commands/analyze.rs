//! Analyze command implementation.
//!
//! Reads a source program, runs the lexical analyzer over it, and writes the
//! identifier table, constant table, token stream, and any lexical errors as
//! text or JSON.

use std::path::PathBuf;
use std::time::Instant;

use lexc_lex::{AnalysisResult, Report};
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::common::{input_label, read_source, write_output, OutputFormat, StyleChoice};
use crate::commands::traits::{dispatch, Command, CommandDescription};
use crate::config::ReportConfig;
use crate::error::{LextError, Result};

/// Arguments for the analyze command.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Source file, or `-` for stdin
    pub input: PathBuf,
    /// Report destination (default: stdout)
    pub output: Option<PathBuf>,
    /// Token line style override
    pub style: Option<StyleChoice>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Fail when the source has lexical errors
    pub fail_on_errors: bool,
    /// Report settings from the configuration file
    pub config: ReportConfig,
}

/// Analyze command executor.
pub struct AnalyzeCommand {
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    /// Execute the analyze command.
    ///
    /// The report is always written before a `--fail-on-errors` failure is
    /// returned.
    ///
    /// # Returns
    ///
    /// The analysis that was reported.
    pub fn run(&self) -> Result<AnalysisResult> {
        let start_time = Instant::now();
        let settings = self.report_config();
        let label = input_label(&self.args.input);

        let source = read_source(&self.args.input)?;
        if source.trim().is_empty() {
            warn!(input = %label, "source is empty");
        }

        let result = lexc_lex::analyze(&source);
        let rendered = render(&result, &settings)?;
        write_output(self.args.output.as_deref(), &rendered)?;

        debug!(
            input = %label,
            tokens = result.tokens().len(),
            errors = result.errors().len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "analysis complete"
        );

        if settings.fail_on_errors && result.has_errors() {
            return Err(LextError::LexicalErrors(result.errors().len()));
        }

        Ok(result)
    }

    /// Merge command-line overrides over the configured report settings.
    pub fn report_config(&self) -> ReportConfig {
        let mut config = self.args.config.clone();

        if let Some(style) = self.args.style {
            config.style = style;
        }

        if let Some(format) = self.args.format {
            config.format = format;
        }

        config.fail_on_errors |= self.args.fail_on_errors;

        config
    }
}

impl Command for AnalyzeCommand {
    type Args = AnalyzeArgs;
    type Output = AnalysisResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "analyze"
    }
}

impl CommandDescription for AnalyzeCommand {
    fn description() -> &'static str {
        "Run lexical analysis on a source program"
    }

    fn help() -> &'static str {
        "Reads the whole source program, splits it into tokens, and reports \
         the identifier table, constant table, token stream, and lexical errors."
    }
}

/// Run the analyze command with the given arguments.
pub fn run_analyze(args: AnalyzeArgs) -> Result<AnalysisResult> {
    dispatch::<AnalyzeCommand>(args)
}

fn render(result: &AnalysisResult, settings: &ReportConfig) -> Result<String> {
    match settings.format {
        OutputFormat::Text => Ok(Report::new(result, settings.style.into()).to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonReport::from(result))?;
            json.push('\n');
            Ok(json)
        },
    }
}

// ============================================================================
// JSON Report
// ============================================================================

#[derive(Serialize)]
struct JsonReport<'r> {
    identifiers: Vec<JsonIdentifier<'r>>,
    constants: Vec<JsonConstant>,
    tokens: Vec<JsonToken<'r>>,
    errors: Vec<JsonError<'r>>,
}

#[derive(Serialize)]
struct JsonIdentifier<'r> {
    index: usize,
    lexeme: &'r str,
}

#[derive(Serialize)]
struct JsonConstant {
    index: usize,
    value: f64,
}

#[derive(Serialize)]
struct JsonToken<'r> {
    kind: &'static str,
    code: u8,
    index: Option<usize>,
    lexeme: &'r str,
    line: u32,
    column: u32,
}

#[derive(Serialize)]
struct JsonError<'r> {
    position: usize,
    line: u32,
    column: u32,
    lexeme: &'r str,
    message: String,
}

impl<'r> From<&'r AnalysisResult> for JsonReport<'r> {
    fn from(result: &'r AnalysisResult) -> Self {
        Self {
            identifiers: result
                .identifiers()
                .iter()
                .map(|(index, lexeme)| JsonIdentifier {
                    index: index.get(),
                    lexeme,
                })
                .collect(),
            constants: result
                .constants()
                .iter()
                .map(|(index, constant)| JsonConstant {
                    index: index.get(),
                    value: constant.value(),
                })
                .collect(),
            tokens: result
                .tokens()
                .iter()
                .map(|token| JsonToken {
                    kind: token.kind.display_code(),
                    code: token.kind.kind_code(),
                    index: token.table_index.map(|index| index.get()),
                    lexeme: &token.lexeme,
                    line: token.span.line,
                    column: token.span.column,
                })
                .collect(),
            errors: result
                .errors()
                .iter()
                .map(|error| JsonError {
                    position: error.position(),
                    line: error.span.line,
                    column: error.span.column,
                    lexeme: error.lexeme(),
                    message: error.message(),
                })
                .collect(),
        }
    }
}
