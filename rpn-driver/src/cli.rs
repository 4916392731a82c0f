use clap::Parser;
use rpn_analyzer::CommentLookahead;
use std::path::PathBuf;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "rpnc",
    about = "Check delimiter balance and convert infix expressions to postfix",
    long_about = "Checks that (), [], {} and /* */ delimiters in an expression are balanced.\n\
                  Balanced expressions are rewritten in postfix (Reverse Polish) order.\n\
                  Without --expr or --file, one line is read from standard input.",
    version
)]
pub struct Cli {
    /// Analyze this expression instead of prompting for one
    #[arg(short = 'e', long, conflicts_with = "file")]
    pub expr: Option<String>,

    /// Analyze every non-empty line of a file
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format (defaults to the settings file, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How a '*' decides whether it closes a comment
    /// (first-occurrence or current-position)
    #[arg(long, value_name = "MODE")]
    pub comment_lookahead: Option<CommentLookahead>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Enable logging (filtered by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
