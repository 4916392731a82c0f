//! RPN Converter Driver
//!
//! Reads an expression (prompted, from `--expr`, or one per line from
//! `--file`), reports whether its delimiters balance and prints the postfix
//! form of balanced input.

mod cli;
mod report;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rpn_analyzer::ExpressionAnalyzer;
use std::fs;
use std::io::{self, BufRead, Write};

use cli::Cli;
use report::{write_analysis, OutputFormat};
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::init();
    }

    // Load settings, command line flags take priority
    let settings = Settings::load(cli.settings.as_deref())?;
    let format = cli.format.unwrap_or(settings.format);
    let lookahead = cli.comment_lookahead.unwrap_or(settings.comment_lookahead);
    debug!("Output format {format:?}, comment lookahead {lookahead}");

    // Create analyzer
    let mut analyzer = ExpressionAnalyzer::with_lookahead(lookahead);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.file {
        // Read input file
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        run_batch(&mut analyzer, &contents, format, &mut out)?;
    } else {
        let input = match cli.expr {
            Some(expr) => expr,
            None => prompt_line(&settings.prompt, &mut out, &mut io::stdin().lock())?,
        };
        // Process the input
        analyzer.parse_input(input);
        let analysis = analyzer.analyze()?;

        // Write output
        write_analysis(&mut out, &analysis, format)?;
    }

    Ok(())
}

/// Print the prompt and read one line, without its line terminator
fn prompt_line<W: Write, R: BufRead>(
    prompt: &str,
    out: &mut W,
    input: &mut R,
) -> Result<String> {
    // The prompt has no newline, so flush before blocking on input
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read expression")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Analyze every non-empty line independently
fn run_batch<W: Write>(
    analyzer: &mut ExpressionAnalyzer,
    contents: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        analyzer.parse_input(line);
        let analysis = analyzer.analyze()?;

        // JSON records carry the input already
        if format == OutputFormat::Text {
            writeln!(out, "Expression: {line}")?;
        }
        write_analysis(out, &analysis, format)?;
    }
    Ok(())
}
