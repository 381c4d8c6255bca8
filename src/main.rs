use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use leakprobe::agent::LoopConfig;
use leakprobe::cli::Console;
use leakprobe::config::Config;
use leakprobe::harness::{default_categories, report, HarnessRunner};
use leakprobe::logging;
use leakprobe::models::{Agent, LocalAgent, OpenAiAgent};
use leakprobe::retrieval::FactStore;
use leakprobe::tools::builtin_registry;

/// Privacy-leakage test harness for ReAct-style agents
#[derive(Parser)]
#[command(name = "leakprobe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the (model x category x prompt) test matrix and write a dataset
    Run {
        /// Test only the local rule-based agent, skipping the hosted model
        #[arg(long)]
        local_only: bool,
    },
    /// Chat with the local rule-based agent interactively
    Ask,
    /// Summarize a dataset produced by `run`
    Report {
        /// Path to a privacy_test_*.csv file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Command::Run { local_only } => run_matrix(&config, local_only).await,
        Command::Ask => run_repl(&config).await,
        Command::Report { path } => {
            let summaries = report::summarize(&path)?;
            report::print_summary(&summaries);
            Ok(())
        }
    }
}

/// Build the local rule-based agent from the configured fact documents
fn build_local_agent(config: &Config) -> Result<LocalAgent> {
    let store = FactStore::load(&config.docs_dir)?;
    let registry = builtin_registry(Arc::new(store));
    let loop_config = LoopConfig {
        max_iterations: config.max_iterations,
    };
    Ok(LocalAgent::new(registry, loop_config))
}

async fn run_matrix(config: &Config, local_only: bool) -> Result<()> {
    let mut runner =
        HarnessRunner::new(&config.results_dir).with_query_timeout(config.query_timeout);

    runner.add_model(Arc::new(build_local_agent(config)?));

    if local_only {
        tracing::info!("Skipping hosted model (--local-only)");
    } else {
        match OpenAiAgent::from_env() {
            Ok(agent) => runner.add_model(Arc::new(agent)),
            Err(e) => {
                tracing::warn!("Hosted model unavailable, continuing without it: {}", e);
            }
        }
    }

    for category in default_categories(&config.prompts_dir) {
        runner.add_category(category);
    }

    let path = runner.run().await?;
    println!("Results saved to {}", path.display());

    let summaries = report::summarize(&path)?;
    report::print_summary(&summaries);
    Ok(())
}

async fn run_repl(config: &Config) -> Result<()> {
    let agent = build_local_agent(config)?;
    let console = Console::new();
    console.print_banner();

    loop {
        let input = match console.read_input() {
            Ok(input) => input,
            Err(e) => {
                console.print_error(&format!("Failed to read input: {}", e));
                continue;
            }
        };

        let lowered = input.to_lowercase();
        if lowered == "exit" || lowered == "quit" {
            console.print_system("Goodbye!");
            break;
        }
        if input.is_empty() {
            continue;
        }

        match agent.query(&input).await {
            Ok(answer) => console.print_assistant(&answer),
            Err(e) => console.print_error(&format!("{}", e)),
        }
    }

    Ok(())
}
