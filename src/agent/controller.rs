//! Interaction loop controller
//!
//! Drives the decision engine against the tool registry for a single query:
//! render transcript, decide, dispatch, append the observation, repeat until
//! a final answer or the iteration budget runs out.

use crate::core::{ProbeError, ProbeResult};
use crate::engine::{DecisionEngine, Directive};
use crate::tools::ToolRegistry;

use super::transcript::Transcript;

/// Default number of decide/dispatch steps before a run is abandoned
pub const DEFAULT_MAX_ITERATIONS: usize = 6;

/// State of one loop controller run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// Deciding the next step
    Running,
    /// A tool is being executed
    AwaitingTool,
    /// A final answer was produced
    Done,
    /// Iteration budget exhausted or unrecoverable dispatch error
    Failed,
}

impl LoopState {
    /// Check if the loop has terminated
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoopState::Done | LoopState::Failed)
    }
}

/// Configuration for a loop controller run
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Maximum decide/dispatch iterations per query
    pub max_iterations: usize,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// State machine owning the transcript for a single query
///
/// A controller is single-use: create one per query and call [`run`] once.
/// There is no external side effect before the `Done` state; a failed run
/// only leaves the discarded transcript behind.
///
/// [`run`]: LoopController::run
pub struct LoopController<'a> {
    engine: &'a DecisionEngine,
    registry: &'a ToolRegistry,
    config: LoopConfig,
    transcript: Transcript,
    state: LoopState,
}

impl<'a> LoopController<'a> {
    /// Create a controller over an engine and a tool registry
    pub fn new(engine: &'a DecisionEngine, registry: &'a ToolRegistry, config: LoopConfig) -> Self {
        Self {
            engine,
            registry,
            config,
            transcript: Transcript::new(),
            state: LoopState::Running,
        }
    }

    /// Current loop state
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Transcript recorded so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Resolve one query to a final answer
    pub async fn run(&mut self, question: &str) -> ProbeResult<String> {
        debug_assert!(self.transcript.is_empty(), "controller reused across queries");
        self.transcript.push_question(question);

        for iteration in 1..=self.config.max_iterations {
            let rendered = self.transcript.render();
            tracing::debug!("Deciding on transcript (iteration {}):\n{}", iteration, rendered);

            match self.engine.decide(&rendered) {
                Directive::Final { answer } => {
                    self.transcript.push_thought("I now know the final answer");
                    self.transcript.push_final_answer(&answer);
                    self.state = LoopState::Done;
                    tracing::info!("Loop finished after {} iteration(s)", iteration);
                    return Ok(answer);
                }
                Directive::Act { thought, tool, input } => {
                    tracing::info!("Directive: call {} with {:?}", tool, input);
                    self.transcript.push_thought(&thought);
                    self.transcript.push_action(&tool, &input);

                    self.state = LoopState::AwaitingTool;
                    let result = match self.registry.execute(&tool, &input).await {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::error!("Tool dispatch failed: {}", e);
                            self.state = LoopState::Failed;
                            return Err(e);
                        }
                    };

                    if result.is_error {
                        tracing::warn!("Tool {} reported an error: {}", tool, result.output);
                    }
                    // Tool failures travel as textual observations, so the
                    // next decision still sees a resolved action.
                    self.transcript.push_observation(&result.output);
                    self.state = LoopState::Running;
                }
            }
        }

        tracing::error!(
            "No final answer after {} iterations, giving up",
            self.config.max_iterations
        );
        self.state = LoopState::Failed;
        Err(ProbeError::IterationBudget(self.config.max_iterations))
    }
}
