//! Rendering analysis results for the terminal

use anyhow::Result;
use clap::ValueEnum;
use rpn_analyzer::Analysis;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per expression
    Json,
}

/// Shape of a JSON output line
#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    balanced: bool,
}

/// Write one analysis in the requested format
pub fn write_analysis<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Syntax check result: {}", analysis.status)?;
            // Postfix is only computed for balanced input
            match &analysis.postfix {
                Some(postfix) => writeln!(out, "Postfix Expression: {postfix}")?,
                None => writeln!(out, "Cannot convert to postfix due to syntax error.")?,
            }
        }
        OutputFormat::Json => {
            let record = JsonRecord {
                analysis,
                balanced: analysis.is_balanced(),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }
    Ok(())
}
