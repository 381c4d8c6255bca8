//! Test harness runner
//!
//! Drives the (model x category x prompt) matrix sequentially, scores every
//! response and persists one timestamped CSV dataset per run. A failing
//! prompt never aborts the run: agent errors and timeouts are recorded with
//! the ERROR outcome and the matrix continues.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::time::timeout;

use crate::core::ProbeResult;
use crate::models::Agent;

use super::prompts::{load_prompts, PromptCategory};
use super::record::{RiskOutcome, TestRecord};
use super::scorer::score_leakage;

/// Default per-query timeout
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(120);

/// Matrix runner accumulating an append-only record collection
pub struct HarnessRunner {
    models: Vec<Arc<dyn Agent>>,
    categories: Vec<PromptCategory>,
    results_dir: PathBuf,
    query_timeout: Duration,
}

impl HarnessRunner {
    /// Create a runner writing datasets under `results_dir`
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            models: Vec::new(),
            categories: Vec::new(),
            results_dir: results_dir.into(),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Add a model to the matrix
    pub fn add_model(&mut self, model: Arc<dyn Agent>) {
        tracing::info!("Added model to matrix: {}", model.id());
        self.models.push(model);
    }

    /// Add a prompt category to the matrix
    pub fn add_category(&mut self, category: PromptCategory) {
        self.categories.push(category);
    }

    /// Set the per-query timeout
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Run the whole matrix and persist the dataset
    ///
    /// Returns the path of the written CSV file. The file name carries the
    /// run-start timestamp so successive runs never collide.
    pub async fn run(&self) -> ProbeResult<PathBuf> {
        let run_stamp = Local::now().format("%Y%m%d_%H%M%S");
        let mut records: Vec<TestRecord> = Vec::new();

        for model in &self.models {
            for category in &self.categories {
                let prompts = match load_prompts(&category.path) {
                    Ok(prompts) => prompts,
                    Err(e) => {
                        // The one tolerated configuration error: log and
                        // skip the category.
                        tracing::warn!(
                            "Missing prompt file {:?} for category '{}': {}",
                            category.path,
                            category.name,
                            e
                        );
                        continue;
                    }
                };

                tracing::info!(
                    "Running {} prompt(s) of category '{}' against model '{}'",
                    prompts.len(),
                    category.name,
                    model.id()
                );

                for prompt in &prompts {
                    let record = self.run_one(model.as_ref(), &category.name, prompt).await;
                    records.push(record);
                }
            }
        }

        let path = self
            .results_dir
            .join(format!("privacy_test_{}.csv", run_stamp));
        write_dataset(&path, &records)?;
        tracing::info!("Wrote {} record(s) to {:?}", records.len(), path);
        Ok(path)
    }

    /// Invoke one agent once and produce its immutable record
    async fn run_one(&self, model: &dyn Agent, category: &str, prompt: &str) -> TestRecord {
        let timestamp = Local::now().to_rfc3339();

        let (response, risk_score) = match timeout(self.query_timeout, model.query(prompt)).await {
            Ok(Ok(response)) => {
                let outcome = RiskOutcome::from_leak(score_leakage(prompt, &response));
                (response, outcome)
            }
            Ok(Err(e)) => {
                tracing::error!("Agent '{}' failed on prompt {:?}: {}", model.id(), prompt, e);
                (format!("Error: {}", e), RiskOutcome::Error)
            }
            Err(_) => {
                tracing::error!(
                    "Agent '{}' timed out after {:?} on prompt {:?}",
                    model.id(),
                    self.query_timeout,
                    prompt
                );
                (
                    format!("Error: query timed out after {:?}", self.query_timeout),
                    RiskOutcome::Error,
                )
            }
        };

        TestRecord {
            timestamp,
            model: model.id().to_string(),
            category: category.to_string(),
            prompt: prompt.to_string(),
            response,
            risk_score,
        }
    }
}

/// Persist the record collection as one CSV dataset snapshot
fn write_dataset(path: &Path, records: &[TestRecord]) -> ProbeResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    // serde only emits the header alongside the first record, so a run with
    // zero records writes it explicitly to keep the dataset readable.
    if records.is_empty() {
        writer.write_record([
            "timestamp",
            "model",
            "category",
            "prompt",
            "response",
            "risk_score",
        ])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
