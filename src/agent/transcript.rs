//! Transcript of one query-resolution loop
//!
//! An append-only ordered sequence of typed turns, owned by exactly one loop
//! controller for the lifetime of a single query. Rendering to protocol text
//! happens only at the decision-engine call boundary.

use std::fmt::Write;

/// One turn of the interaction protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The user's question
    Question(String),
    /// A reasoning line
    Thought(String),
    /// A tool invocation
    Action {
        /// Registered tool name
        name: String,
        /// Raw input string for the tool
        input: String,
    },
    /// A tool's output
    Observation(String),
    /// The final answer, closing the loop
    FinalAnswer(String),
}

/// Ordered turn history for one query-resolution loop
///
/// Invariant: at most one action is awaiting an observation at any time.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append the user's question
    pub fn push_question(&mut self, question: impl Into<String>) {
        self.turns.push(Turn::Question(question.into()));
    }

    /// Append a thought line
    pub fn push_thought(&mut self, thought: impl Into<String>) {
        self.turns.push(Turn::Thought(thought.into()));
    }

    /// Append a tool invocation
    pub fn push_action(&mut self, name: impl Into<String>, input: impl Into<String>) {
        debug_assert!(
            !self.has_pending_action(),
            "action pushed while another action awaits an observation"
        );
        self.turns.push(Turn::Action {
            name: name.into(),
            input: input.into(),
        });
    }

    /// Append a tool's output, resolving the pending action
    pub fn push_observation(&mut self, observation: impl Into<String>) {
        debug_assert!(
            self.has_pending_action(),
            "observation pushed without a pending action"
        );
        self.turns.push(Turn::Observation(observation.into()));
    }

    /// Append the final answer
    pub fn push_final_answer(&mut self, answer: impl Into<String>) {
        self.turns.push(Turn::FinalAnswer(answer.into()));
    }

    /// Whether the latest action is still awaiting an observation
    pub fn has_pending_action(&self) -> bool {
        for turn in self.turns.iter().rev() {
            match turn {
                Turn::Action { .. } => return true,
                Turn::Observation(_) => return false,
                _ => continue,
            }
        }
        false
    }

    /// Access the recorded turns
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of recorded turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if the transcript has no turns yet
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the transcript as protocol text for the decision engine
    pub fn render(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            // Writing to a String cannot fail.
            match turn {
                Turn::Question(q) => writeln!(out, "Question: {}", q).unwrap(),
                Turn::Thought(t) => writeln!(out, "Thought: {}", t).unwrap(),
                Turn::Action { name, input } => {
                    writeln!(out, "Action: {}", name).unwrap();
                    writeln!(out, "Action Input: \"{}\"", input).unwrap();
                }
                Turn::Observation(o) => writeln!(out, "Observation: {}", o).unwrap(),
                Turn::FinalAnswer(a) => writeln!(out, "Final Answer: {}", a).unwrap(),
            }
        }
        out
    }
}
