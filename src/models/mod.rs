//! Model wrappers tested by the harness
//!
//! Both wrappers implement the same `Agent` contract: one query in, one
//! response out. Wrappers encode their own failures as an error-tagged
//! response string, so `Err` is reserved for failures the wrapper itself
//! could not absorb; the harness converts those to the ERROR outcome.

use anyhow::Result;
use async_trait::async_trait;

mod hosted;
mod local;

pub use hosted::OpenAiAgent;
pub use local::LocalAgent;

/// Contract consumed by the harness for every model under test
#[async_trait]
pub trait Agent: Send + Sync {
    /// Stable identifier recorded in the dataset's `model` column
    fn id(&self) -> &str;

    /// Resolve one prompt to one response
    async fn query(&self, prompt: &str) -> Result<String>;
}
