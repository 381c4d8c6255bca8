//! Harness resilience: a failing agent invocation must never abort the run,
//! and every (model, category, prompt) triple must still produce exactly one
//! dataset row.

use std::fs;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;

use leakprobe::harness::{HarnessRunner, PromptCategory};
use leakprobe::models::Agent;

/// Agent that fails on prompts containing "boom" and leaks otherwise
struct FlakyAgent;

#[async_trait]
impl Agent for FlakyAgent {
    fn id(&self) -> &str {
        "flaky"
    }

    async fn query(&self, prompt: &str) -> Result<String> {
        if prompt.contains("boom") {
            bail!("synthetic agent failure");
        }
        Ok("all quiet".to_string())
    }
}

/// Agent that leaks on every prompt
struct LeakyAgent;

#[async_trait]
impl Agent for LeakyAgent {
    fn id(&self) -> &str {
        "leaky"
    }

    async fn query(&self, _prompt: &str) -> Result<String> {
        Ok("the password is hunter2".to_string())
    }
}

#[tokio::test]
async fn failing_invocation_still_yields_one_row_per_triple() {
    let dir = tempfile::tempdir().unwrap();
    let prompts_path = dir.path().join("normal.txt");
    fs::write(&prompts_path, "say hello\nboom please\n").unwrap();

    let results_dir = dir.path().join("results");
    let mut runner = HarnessRunner::new(&results_dir);
    runner.add_model(Arc::new(FlakyAgent));
    runner.add_model(Arc::new(LeakyAgent));
    runner.add_category(PromptCategory::new("normal", &prompts_path));
    // A category whose file does not exist is logged and skipped.
    runner.add_category(PromptCategory::new("missing", dir.path().join("missing.txt")));

    let dataset = runner.run().await.unwrap();

    let mut reader = csv::Reader::from_path(&dataset).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    // 2 models x 2 prompts, the missing category contributes nothing.
    assert_eq!(rows.len(), 4);

    let risk_of = |model: &str, prompt: &str| -> String {
        rows.iter()
            .find(|r| &r[1] == model && &r[3] == prompt)
            .map(|r| r[5].to_string())
            .unwrap()
    };

    assert_eq!(risk_of("flaky", "say hello"), "False");
    assert_eq!(risk_of("flaky", "boom please"), "ERROR");
    assert_eq!(risk_of("leaky", "say hello"), "True");
    assert_eq!(risk_of("leaky", "boom please"), "True");

    // The failing row still carries an error-tagged response.
    let failed = rows
        .iter()
        .find(|r| &r[1] == "flaky" && &r[3] == "boom please")
        .unwrap();
    assert!(failed[4].starts_with("Error:"));
}

#[tokio::test]
async fn dataset_header_matches_contract() {
    let dir = tempfile::tempdir().unwrap();
    let prompts_path = dir.path().join("normal.txt");
    fs::write(&prompts_path, "one prompt\n").unwrap();

    let mut runner = HarnessRunner::new(dir.path().join("results"));
    runner.add_model(Arc::new(LeakyAgent));
    runner.add_category(PromptCategory::new("normal", &prompts_path));

    let dataset = runner.run().await.unwrap();
    let text = fs::read_to_string(&dataset).unwrap();
    assert!(text.starts_with("timestamp,model,category,prompt,response,risk_score"));
    assert!(dataset
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("privacy_test_"));
}
