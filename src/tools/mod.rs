//! Tool system
//!
//! This module provides:
//! - `Tool` trait - the `(text) -> text` interface tools implement
//! - `ToolResult` - result type for tool execution
//! - `ToolRegistry` - registry for managing available tools
//! - `builtin` - the four fixed tools the decision engine dispatches to

mod builtin;
mod registry;
mod tool;

pub use builtin::{
    builtin_registry, AddNumbersTool, GreetUserTool, RetrieveFactsTool, ReverseStringTool,
};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolResult};
