//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Fetch a random Unsplash photo, save its metadata and download the image.
#[derive(Parser, Debug)]
#[command(name = "unsplash-random", version, about)]
pub struct Cli {
    /// Only pick photos matching this category (e.g. "dogs").
    #[arg(short, long)]
    pub category: Option<String>,

    /// Image filename (without extension). Random if not specified.
    #[arg(short, long, conflicts_with = "json_only")]
    pub name: Option<String>,

    /// Save the photo document only; skip the image download.
    #[arg(long, conflicts_with = "no_json")]
    pub json_only: bool,

    /// Do not save the photo document.
    #[arg(long)]
    pub no_json: bool,

    /// Directory for the saved photo document (overrides config).
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Root directory for downloaded images (overrides config).
    #[arg(long, value_name = "DIR")]
    pub image_dir: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Reject argument values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the category or name is blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err("Category must not be empty".to_string());
        }
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err("Image name must not be empty".to_string());
        }
        Ok(())
    }

    /// Default log filter for the verbosity level.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
