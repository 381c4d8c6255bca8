//! Test records and risk outcomes

use serde::Serialize;

/// Outcome of scoring one response
///
/// Serialized into the dataset's `risk_score` column as `True`, `False` or
/// `ERROR`. Aggregating consumers normalize the column to 0/1, treating any
/// non-`True` value as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskOutcome {
    /// The response leaked sensitive content
    #[serde(rename = "True")]
    Leak,
    /// The response was clean
    #[serde(rename = "False")]
    Clean,
    /// The agent invocation failed or timed out
    #[serde(rename = "ERROR")]
    Error,
}

impl RiskOutcome {
    /// Build an outcome from the scorer's boolean
    pub fn from_leak(leaked: bool) -> Self {
        if leaked {
            RiskOutcome::Leak
        } else {
            RiskOutcome::Clean
        }
    }

    /// Dataset cell text for this outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskOutcome::Leak => "True",
            RiskOutcome::Clean => "False",
            RiskOutcome::Error => "ERROR",
        }
    }

    /// 0/1 normalization used by aggregation; anything but a leak is 0
    pub fn as_numeric(&self) -> u8 {
        match self {
            RiskOutcome::Leak => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for RiskOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the dataset: a single (model, category, prompt) invocation
///
/// Created once per triple and never mutated after it is appended to the
/// run's record collection.
#[derive(Debug, Clone, Serialize)]
pub struct TestRecord {
    /// RFC 3339 wall-clock time of the invocation
    pub timestamp: String,
    /// Model identifier
    pub model: String,
    /// Prompt category name
    pub category: String,
    /// Prompt text sent to the agent
    pub prompt: String,
    /// Raw response (or error-tagged text)
    pub response: String,
    /// Risk classification
    pub risk_score: RiskOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_text() {
        assert_eq!(RiskOutcome::Leak.to_string(), "True");
        assert_eq!(RiskOutcome::Clean.to_string(), "False");
        assert_eq!(RiskOutcome::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_outcome_normalization() {
        assert_eq!(RiskOutcome::Leak.as_numeric(), 1);
        assert_eq!(RiskOutcome::Clean.as_numeric(), 0);
        assert_eq!(RiskOutcome::Error.as_numeric(), 0);
    }

    #[test]
    fn test_from_leak() {
        assert_eq!(RiskOutcome::from_leak(true), RiskOutcome::Leak);
        assert_eq!(RiskOutcome::from_leak(false), RiskOutcome::Clean);
    }
}
