//! Show command - one stack in detail

use crate::cli::context::{CommandContext, GlobalOptions};
use crate::cli::print_stack;
use crate::cli::style::Stylize;
use anstream::println;
use stacks_client::error::Error;

/// Run the show command
pub async fn run_show(
    global: &GlobalOptions,
    repo_id: &str,
    stack_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let ctx = CommandContext::new(global, repo_id)?;
    let state = ctx.load().await?;

    let stack = state
        .stack(stack_id)
        .ok_or_else(|| Error::StackNotFound(stack_id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(stack)?);
        return Ok(());
    }

    print_stack(stack);

    let open: Vec<String> = stack
        .open_prs()
        .filter_map(|b| b.pr.map(|pr| format!("#{}", pr.number)))
        .collect();
    if !open.is_empty() {
        println!();
        println!("{} {}", "Open PRs:".emphasis(), open.join(", ").accent());
    }

    Ok(())
}
