//! Dataset summary report
//!
//! Reads a dataset CSV back, normalizes the `risk_score` column (only the
//! literal `True` counts as a leak; `False` and `ERROR` normalize to 0) and
//! aggregates leak rates per (model, category).

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;

use crate::core::{ProbeError, ProbeResult};

/// Aggregated results for one (model, category) pair
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Model identifier
    pub model: String,
    /// Prompt category
    pub category: String,
    /// Total prompts run
    pub prompts: usize,
    /// Rows scored as a leak
    pub leaks: usize,
    /// Rows with the ERROR marker
    pub errors: usize,
}

impl CategorySummary {
    /// Leak rate over all rows, errors normalized to 0
    pub fn leak_rate(&self) -> f64 {
        if self.prompts == 0 {
            0.0
        } else {
            self.leaks as f64 / self.prompts as f64
        }
    }
}

/// Aggregate a dataset file into per-(model, category) summaries
pub fn summarize(path: &Path) -> ProbeResult<Vec<CategorySummary>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| -> ProbeResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ProbeError::other(format!("Dataset is missing column '{}'", name)))
    };
    let model_col = column("model")?;
    let category_col = column("category")?;
    let risk_col = column("risk_score")?;

    let mut groups: BTreeMap<(String, String), CategorySummary> = BTreeMap::new();
    for row in reader.records() {
        let row = row?;
        let model = row.get(model_col).unwrap_or("").to_string();
        let category = row.get(category_col).unwrap_or("").to_string();
        let risk = row.get(risk_col).unwrap_or("");

        let summary = groups
            .entry((model.clone(), category.clone()))
            .or_insert_with(|| CategorySummary {
                model,
                category,
                prompts: 0,
                leaks: 0,
                errors: 0,
            });
        summary.prompts += 1;
        match risk {
            "True" => summary.leaks += 1,
            "ERROR" => summary.errors += 1,
            _ => {}
        }
    }

    Ok(groups.into_values().collect())
}

/// Print the summaries as a text table
pub fn print_summary(summaries: &[CategorySummary]) {
    println!(
        "{:<12} {:<14} {:>8} {:>7} {:>7} {:>10}",
        "model".bold(),
        "category".bold(),
        "prompts".bold(),
        "leaks".bold(),
        "errors".bold(),
        "leak rate".bold()
    );

    for s in summaries {
        let rate = format!("{:.2}", s.leak_rate());
        let rate = if s.leaks > 0 { rate.red() } else { rate.green() };
        println!(
            "{:<12} {:<14} {:>8} {:>7} {:>7} {:>10}",
            s.model, s.category, s.prompts, s.leaks, s.errors, rate
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_summarize_normalizes_risk_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timestamp,model,category,prompt,response,risk_score").unwrap();
        writeln!(file, "t1,local,normal,p1,r1,False").unwrap();
        writeln!(file, "t2,local,normal,p2,r2,True").unwrap();
        writeln!(file, "t3,local,normal,p3,r3,ERROR").unwrap();
        writeln!(file, "t4,openai,sensitive,p1,r4,True").unwrap();

        let summaries = summarize(file.path()).unwrap();
        assert_eq!(summaries.len(), 2);

        let local = &summaries[0];
        assert_eq!(local.model, "local");
        assert_eq!(local.prompts, 3);
        assert_eq!(local.leaks, 1);
        assert_eq!(local.errors, 1);
        assert!((local.leak_rate() - 1.0 / 3.0).abs() < 1e-9);

        let openai = &summaries[1];
        assert_eq!((openai.model.as_str(), openai.category.as_str()), ("openai", "sensitive"));
        assert!((openai.leak_rate() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_rejects_malformed_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a,b,c").unwrap();
        writeln!(file, "1,2,3").unwrap();
        assert!(summarize(file.path()).is_err());
    }
}
