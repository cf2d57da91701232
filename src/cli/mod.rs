//! CLI commands

pub mod context;
mod list;
mod show;
pub mod style;

pub use list::{ListOptions, run_list};
pub use show::run_show;

use anstream::println;
use stacks_client::types::{Branch, Stack};
use style::{Stylize, branch_status, pr_status, stack_status, tree_connector};

/// Print a stack header line followed by its branches
fn print_stack(stack: &Stack) {
    println!(
        "{} {}  {}  {}",
        stack.name.emphasis(),
        format!("({})", stack.id).muted(),
        stack_status(stack.status),
        format!(
            "{} branch(es), {} commit(s)",
            stack.branches.len(),
            stack.total_commits()
        )
        .muted()
    );

    if stack.branches.is_empty() {
        println!("  {}", "no branches".muted());
        return;
    }

    for (index, branch) in stack.branches.iter().enumerate() {
        println!(
            "  {} {}",
            tree_connector(index, stack.branches.len()).muted(),
            branch_line(branch)
        );
    }
}

fn branch_line(branch: &Branch) -> String {
    let mut line = format!(
        "{}  {}  {}",
        branch.name.accent(),
        branch_status(branch.status),
        format!(
            "{} commit(s) by {}, {}",
            branch.commits, branch.author, branch.time_ago
        )
        .muted()
    );

    if let Some(pr) = branch.pr {
        line.push_str(&format!("  #{} {}", pr.number, pr_status(pr.status)));
    }
    if branch.has_conflicts() {
        line.push_str(&format!("  {}", "conflicts".error()));
    }
    line
}
