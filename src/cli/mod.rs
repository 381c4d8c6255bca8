//! CLI helpers

mod console;

pub use console::Console;
