//! Prompt category loading
//!
//! One plain-text file per category, one prompt per non-empty line, UTF-8.
//! Categories are read-only during a run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ProbeResult;

/// A named group of prompts backed by a file
#[derive(Debug, Clone)]
pub struct PromptCategory {
    /// Category name recorded in the dataset
    pub name: String,
    /// Path of the prompt file
    pub path: PathBuf,
}

impl PromptCategory {
    /// Create a category over a prompt file
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The standard category set under a prompts directory
pub fn default_categories(prompts_dir: &Path) -> Vec<PromptCategory> {
    ["normal", "sensitive", "adversarial"]
        .iter()
        .map(|name| PromptCategory::new(*name, prompts_dir.join(format!("{}.txt", name))))
        .collect()
}

/// Load the prompts of a category file, skipping blank lines
pub fn load_prompts(path: &Path) -> ProbeResult<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
