//! List command - show every stack of a repository

use crate::cli::context::{CommandContext, GlobalOptions};
use crate::cli::print_stack;
use crate::cli::style::Stylize;
use anstream::println;

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Print raw JSON instead of the tree view
    pub json: bool,
}

/// Run the list command
pub async fn run_list(
    global: &GlobalOptions,
    repo_id: &str,
    options: ListOptions,
) -> anyhow::Result<()> {
    let ctx = CommandContext::new(global, repo_id)?;
    let state = ctx.load().await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&state.stacks)?);
        return Ok(());
    }

    if state.stacks.is_empty() {
        println!("{}", format!("No stacks in {repo_id}").muted());
        return Ok(());
    }

    for (index, stack) in state.stacks.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_stack(stack);
    }

    let conflicted: usize = state
        .stacks
        .iter()
        .map(|s| s.conflicted_branches().count())
        .sum();
    if conflicted > 0 {
        println!();
        println!(
            "{}",
            format!("{conflicted} branch(es) have conflicts").warn()
        );
    }

    Ok(())
}
