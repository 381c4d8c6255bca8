//! Built-in tools
//!
//! The four fixed tools the decision engine can dispatch to. Each is a pure
//! `(text) -> text` function except `retrieve_facts`, which delegates to the
//! retrieval collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use crate::retrieval::Retriever;

use super::registry::ToolRegistry;
use super::tool::{Tool, ToolResult};

/// Number of passages requested from the retriever per lookup
const RETRIEVAL_K: usize = 4;

/// Adds the numbers in a string like "4 and 6"
pub struct AddNumbersTool;

#[async_trait]
impl Tool for AddNumbersTool {
    fn name(&self) -> &str {
        "add_numbers"
    }

    fn description(&self) -> &str {
        "Add two numbers from a string like '4 and 6'"
    }

    async fn execute(&self, input: &str) -> ToolResult {
        let mut sum: i64 = 0;
        for part in input.to_lowercase().split("and") {
            let part = part.trim();
            let n: i64 = match part.parse() {
                Ok(n) => n,
                Err(_) => {
                    return ToolResult::error(format!(
                        "Error: could not parse '{}' as a number",
                        part
                    ));
                }
            };
            sum = match sum.checked_add(n) {
                Some(sum) => sum,
                None => {
                    return ToolResult::error(
                        "Error: sum is out of range for a 64-bit integer",
                    );
                }
            };
        }
        ToolResult::success(sum.to_string())
    }
}

/// Reverses the given string
pub struct ReverseStringTool;

#[async_trait]
impl Tool for ReverseStringTool {
    fn name(&self) -> &str {
        "reverse_string"
    }

    fn description(&self) -> &str {
        "Reverse the given string"
    }

    async fn execute(&self, input: &str) -> ToolResult {
        ToolResult::success(input.chars().rev().collect::<String>())
    }
}

/// Greets the user by name
pub struct GreetUserTool;

#[async_trait]
impl Tool for GreetUserTool {
    fn name(&self) -> &str {
        "greet_user"
    }

    fn description(&self) -> &str {
        "Greet the user by name"
    }

    async fn execute(&self, input: &str) -> ToolResult {
        let name = input.trim();
        let name = if name.is_empty() {
            "User".to_string()
        } else {
            capitalize(name)
        };
        ToolResult::success(format!("Hello, {}! How can I help you today?", name))
    }
}

/// Retrieves the most relevant fact for a query from the fact store
pub struct RetrieveFactsTool {
    retriever: Arc<dyn Retriever>,
}

impl RetrieveFactsTool {
    /// Create the tool over a retrieval backend
    pub fn new(retriever: Arc<dyn Retriever>) -> Self {
        Self { retriever }
    }
}

#[async_trait]
impl Tool for RetrieveFactsTool {
    fn name(&self) -> &str {
        "retrieve_facts"
    }

    fn description(&self) -> &str {
        "Retrieve the most relevant fact related to the query"
    }

    async fn execute(&self, input: &str) -> ToolResult {
        let passages = match self.retriever.retrieve(input, RETRIEVAL_K).await {
            Ok(passages) => passages,
            Err(e) => return ToolResult::error(format!("Retrieval error: {}", e)),
        };

        let top = match passages.first() {
            Some(top) => top,
            None => return ToolResult::success("No relevant facts found."),
        };
        tracing::debug!("Top passage: {}", top);

        // Prefer the line that mentions the query verbatim, else lead with
        // the passage's first line.
        let query = input.to_lowercase();
        let best_line = top
            .lines()
            .find(|line| line.to_lowercase().contains(&query))
            .or_else(|| top.lines().next())
            .unwrap_or("");

        ToolResult::success(best_line.trim())
    }
}

/// Uppercase the first letter of a name, leaving the rest untouched
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build a registry holding the four built-in tools
pub fn builtin_registry(retriever: Arc<dyn Retriever>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(AddNumbersTool);
    registry.register(ReverseStringTool);
    registry.register(GreetUserTool);
    registry.register(RetrieveFactsTool::new(retriever));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::FactStore;

    #[tokio::test]
    async fn test_add_numbers() {
        let result = AddNumbersTool.execute("4 and 6").await;
        assert_eq!(result.output, "10");
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn test_add_numbers_many_segments() {
        let result = AddNumbersTool.execute("1 and 2 and 3").await;
        assert_eq!(result.output, "6");
    }

    #[tokio::test]
    async fn test_add_numbers_overflow_is_an_error() {
        let result = AddNumbersTool
            .execute("9223372036854775807 and 1")
            .await;
        assert!(result.is_error);
        assert!(result.output.starts_with("Error:"));
    }

    #[tokio::test]
    async fn test_add_numbers_negative_overflow_is_an_error() {
        let result = AddNumbersTool
            .execute("-9223372036854775808 and -1")
            .await;
        assert!(result.is_error);
        assert!(result.output.starts_with("Error:"));
    }

    #[tokio::test]
    async fn test_add_numbers_parse_failure() {
        let result = AddNumbersTool.execute("four and 6").await;
        assert!(result.is_error);
        assert!(result.output.contains("four"));
    }

    #[tokio::test]
    async fn test_reverse_string() {
        let result = ReverseStringTool.execute("hello world").await;
        assert_eq!(result.output, "dlrow olleh");
    }

    #[tokio::test]
    async fn test_reverse_round_trip() {
        let once = ReverseStringTool.execute("añejo rust").await.output;
        let twice = ReverseStringTool.execute(&once).await.output;
        assert_eq!(twice, "añejo rust");
    }

    #[tokio::test]
    async fn test_greet_user_capitalizes() {
        let result = GreetUserTool.execute("alice").await;
        assert_eq!(result.output, "Hello, Alice! How can I help you today?");
    }

    #[tokio::test]
    async fn test_greet_user_default_name() {
        let result = GreetUserTool.execute("   ").await;
        assert_eq!(result.output, "Hello, User! How can I help you today?");
    }

    #[tokio::test]
    async fn test_retrieve_facts_picks_matching_line() {
        let store = FactStore::from_documents(vec![
            "Intro line.\nthe capital of france is paris.\nTrailing line.".to_string(),
        ]);
        let tool = RetrieveFactsTool::new(Arc::new(store));
        let result = tool.execute("capital of france").await;
        assert_eq!(result.output, "the capital of france is paris.");
    }

    #[tokio::test]
    async fn test_retrieve_facts_falls_back_to_first_line() {
        let store =
            FactStore::from_documents(vec!["Paris is in France.\nSecond line.".to_string()]);
        let tool = RetrieveFactsTool::new(Arc::new(store));
        let result = tool.execute("what is the capital of france?").await;
        assert_eq!(result.output, "Paris is in France.");
    }

    #[tokio::test]
    async fn test_retrieve_facts_no_match() {
        let store = FactStore::from_documents(Vec::new());
        let tool = RetrieveFactsTool::new(Arc::new(store));
        let result = tool.execute("anything").await;
        assert_eq!(result.output, "No relevant facts found.");
        assert!(!result.is_error);
    }

    #[test]
    fn test_builtin_registry_holds_four_tools() {
        let store = FactStore::from_documents(Vec::new());
        let registry = builtin_registry(Arc::new(store));
        assert_eq!(registry.len(), 4);
        let mut names = registry.tool_names();
        names.sort();
        assert_eq!(
            names,
            vec!["add_numbers", "greet_user", "retrieve_facts", "reverse_string"]
        );
    }
}
