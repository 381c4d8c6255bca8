//! Interaction loop: transcript turns and the loop controller

mod controller;
mod transcript;

pub use controller::{LoopConfig, LoopController, LoopState, DEFAULT_MAX_ITERATIONS};
pub use transcript::{Transcript, Turn};
