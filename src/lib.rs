pub mod core;
pub mod engine;
pub mod tools;
pub mod retrieval;
pub mod agent;
pub mod models;
pub mod harness;

// Optional components
pub mod cli;
pub mod config;
pub mod logging;
