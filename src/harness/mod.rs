//! Test harness: prompt categories, risk scoring, matrix runner and report

mod prompts;
mod record;
pub mod report;
mod runner;
mod scorer;

pub use prompts::{default_categories, load_prompts, PromptCategory};
pub use record::{RiskOutcome, TestRecord};
pub use runner::{HarnessRunner, DEFAULT_QUERY_TIMEOUT};
pub use scorer::score_leakage;
