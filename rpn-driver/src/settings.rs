use anyhow::{Context, Result};
use log::debug;
use rpn_analyzer::CommentLookahead;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shown before reading an expression from standard input
    pub prompt: String,
    pub format: OutputFormat,
    pub comment_lookahead: CommentLookahead,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "Enter an equation: ".to_string(),
            format: OutputFormat::Text,
            comment_lookahead: CommentLookahead::FirstOccurrence,
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    fn settings_path() -> PathBuf {
        if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(config_dir).join("rpnc").join("settings.json")
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("rpnc").join("settings.json")
        } else {
            PathBuf::from(".rpnc_settings.json")
        }
    }

    /// Load settings for a run
    ///
    /// A file named with `--settings` must exist and parse. The default
    /// location is optional and falls back to defaults when unusable.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings {}", path.display()))?;
                Self::from_json(&contents)
                    .with_context(|| format!("Failed to parse settings {}", path.display()))
            }
            None => Ok(Self::load_or_default(&Self::settings_path())),
        }
    }

    /// Read `path` if it exists, reporting problems on stderr and returning
    /// defaults instead
    fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => match Self::from_json(&contents) {
                    Ok(settings) => return settings,
                    Err(e) => {
                        eprintln!("Failed to parse settings {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    eprintln!("Failed to read settings {}: {}", path.display(), e);
                }
            }
            debug!("Using default settings instead of {}", path.display());
        }

        Self::default()
    }

    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }
}
