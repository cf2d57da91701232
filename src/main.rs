//! stacks - inspect stacked branches and PRs from the command line

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use cli::context::GlobalOptions;
use cli::{ListOptions, run_list, run_show};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect stacked branches and PRs served by the stacks API
#[derive(Parser)]
#[command(name = "stacks", version)]
struct Cli {
    /// Base URL of the web application (overrides config and STACKS_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Path to config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all stacks of a repository
    List {
        /// Repository identifier
        repo_id: String,

        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
    },

    /// Show one stack and its branches
    Show {
        /// Repository identifier
        repo_id: String,

        /// Stack identifier
        stack_id: String,

        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,stacks={level},stacks_client={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let global = GlobalOptions {
        config_path: cli.config,
        api_url: cli.api_url,
    };

    match cli.command {
        Commands::List { repo_id, json } => {
            run_list(&global, &repo_id, ListOptions { json }).await
        }
        Commands::Show {
            repo_id,
            stack_id,
            json,
        } => run_show(&global, &repo_id, &stack_id, json).await,
    }
}
