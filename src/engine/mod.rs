//! Rule-based decision engine
//!
//! A deterministic stand-in for a language model in a ReAct-style loop.
//! Given the rendered transcript so far it produces the next protocol step:
//! either a final answer or a tool invocation. The engine is a pure function
//! of the transcript text; no state is retained between calls.

use regex::Regex;

/// Placeholder text the orchestration layer seeds into an unresolved
/// observation slot. An observation carrying this exact text has not been
/// produced by a tool yet and must never be promoted to a final answer.
pub const SENTINEL: &str = "the result of the action";

/// Keywords that mark a question as an explicit fact lookup
const FACT_KEYWORDS: [&str; 6] = [
    "what is", "who is", "define", "capital", "explain", "how does",
];

/// Next protocol step, instructing the loop to finish or to act
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Report a final answer and stop
    Final {
        /// Answer text to return to the caller
        answer: String,
    },
    /// Invoke a tool and feed its output back as an observation
    Act {
        /// Reasoning line the loop records before the action
        thought: String,
        /// Registered tool name
        tool: String,
        /// Raw input string passed to the tool
        input: String,
    },
}

/// Classified question intent
///
/// Categories overlap ("greet alice and add 2 and 3" matches two of them),
/// so classification order is part of the contract: arithmetic, reversal,
/// greeting, fact lookup, then best-effort retrieval as the universal
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Two-number addition
    Addition { a: String, b: String },
    /// String reversal
    Reversal { operand: String },
    /// Greeting by name
    Greeting { name: String },
    /// Fact lookup, either keyword-triggered or the fallback
    FactLookup { question: String, explicit: bool },
}

impl Intent {
    /// Turn this intent into the tool invocation directive
    pub fn directive(&self) -> Directive {
        match self {
            Intent::Addition { a, b } => Directive::Act {
                thought: self.thought(),
                tool: "add_numbers".to_string(),
                input: format!("{} and {}", a, b),
            },
            Intent::Reversal { operand } => Directive::Act {
                thought: self.thought(),
                tool: "reverse_string".to_string(),
                input: operand.clone(),
            },
            Intent::Greeting { name } => Directive::Act {
                thought: self.thought(),
                tool: "greet_user".to_string(),
                input: name.clone(),
            },
            Intent::FactLookup { question, .. } => Directive::Act {
                thought: self.thought(),
                tool: "retrieve_facts".to_string(),
                input: question.clone(),
            },
        }
    }

    /// Protocol "thought" line recorded in the transcript for this intent
    pub fn thought(&self) -> String {
        match self {
            Intent::Addition { a, b } => format!("I should add {} and {}", a, b),
            Intent::Reversal { .. } => "I should reverse the text".to_string(),
            Intent::Greeting { .. } => "I should greet the user".to_string(),
            Intent::FactLookup { explicit: true, .. } => {
                "I should retrieve facts from memory".to_string()
            }
            Intent::FactLookup { explicit: false, .. } => {
                "I should try retrieving something just in case".to_string()
            }
        }
    }
}

/// Deterministic transcript-to-directive engine
pub struct DecisionEngine {
    observation_re: Regex,
    question_re: Regex,
    whitespace_re: Regex,
    addition_re: Regex,
}

impl DecisionEngine {
    /// Create a new engine with its transcript patterns compiled
    pub fn new() -> Self {
        // The patterns are fixed string literals; compilation cannot fail.
        Self {
            observation_re: Regex::new(r"observation:\s*(.+)").unwrap(),
            question_re: Regex::new(r"question:\s*(.+)").unwrap(),
            whitespace_re: Regex::new(r"\s+").unwrap(),
            addition_re: Regex::new(r"add\s+(\d+)\s*(?:and|&)?\s*(\d+)").unwrap(),
        }
    }

    /// Decide the next protocol step for the transcript rendered as text
    ///
    /// Matching is case-insensitive: the whole input is lowercased on entry,
    /// so extracted answers and operands come back lowercased too.
    pub fn decide(&self, transcript_text: &str) -> Directive {
        let text = transcript_text.to_lowercase();

        // A real tool result always wins: once a non-sentinel observation
        // exists, the engine commits to reporting it instead of deriving
        // another action.
        if let Some(caps) = self.observation_re.captures_iter(&text).last() {
            let observation = caps[1].trim();
            if !observation.is_empty() && observation != SENTINEL {
                tracing::debug!("Responding to observation: {}", observation);
                return Directive::Final {
                    answer: observation.to_string(),
                };
            }
        }

        let question = match self.extract_question(&text) {
            Some(q) => q,
            None => {
                tracing::warn!("No valid question found in transcript, returning sentinel");
                return Directive::Final {
                    answer: SENTINEL.to_string(),
                };
            }
        };

        let question = self
            .whitespace_re
            .replace_all(&question, " ")
            .trim()
            .to_string();
        tracing::debug!("Parsed question: {}", question);

        let intent = self.classify(&question);
        tracing::debug!("Classified intent: {:?}", intent);
        intent.directive()
    }

    /// Classify a normalized question, first match wins
    pub fn classify(&self, question: &str) -> Intent {
        if let Some(caps) = self.addition_re.captures(question) {
            return Intent::Addition {
                a: caps[1].to_string(),
                b: caps[2].to_string(),
            };
        }

        if question.contains("reverse") {
            let operand = question.replace("reverse", "").trim().to_string();
            return Intent::Reversal { operand };
        }

        if question.contains("greet") {
            let name = question
                .replace("greet", "")
                .replace("the user", "")
                .trim()
                .to_string();
            let name = if name.is_empty() {
                "User".to_string()
            } else {
                name
            };
            return Intent::Greeting { name };
        }

        let explicit = FACT_KEYWORDS.iter().any(|kw| question.contains(kw));
        Intent::FactLookup {
            question: question.to_string(),
            explicit,
        }
    }

    /// Pull the question out of the transcript, last `question:` label wins.
    /// Unlabeled input that is not an observation fragment is treated as the
    /// question itself.
    fn extract_question(&self, text: &str) -> Option<String> {
        if let Some(caps) = self.question_re.captures_iter(text).last() {
            return Some(caps[1].trim().to_string());
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() && !trimmed.starts_with("observation:") {
            return Some(trimmed.to_string());
        }

        None
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}
