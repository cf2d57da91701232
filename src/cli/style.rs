//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips ANSI codes when stdout is not
//! a terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use stacks_client::types::{BranchStatus, PrStatus, StackStatus};
use std::fmt::Display;

/// Check mark used in success lines
pub const CHECK: &str = "✓";

/// Semantic styles for CLI output
pub trait Stylize: Display + Sized {
    /// Bold
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Dimmed, for secondary text
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Cyan, for names and counts
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Green
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Yellow
    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    /// Red
    fn error(&self) -> String {
        self.red().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Tree connector for the branch at `index` of `len`
pub const fn tree_connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len { "└─" } else { "├─" }
}

/// Spinner used while a request is in flight
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner().tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
}

/// Colored stack status
pub fn stack_status(status: StackStatus) -> String {
    match status {
        StackStatus::InProgress => status.warn(),
        StackStatus::Review => status.accent(),
        StackStatus::Complete => status.success(),
    }
}

/// Colored branch status
pub fn branch_status(status: BranchStatus) -> String {
    match status {
        BranchStatus::Ready => status.success(),
        BranchStatus::Review => status.accent(),
        BranchStatus::Draft => status.muted(),
    }
}

/// Colored PR status
pub fn pr_status(status: PrStatus) -> String {
    match status {
        PrStatus::Open => status.success(),
        PrStatus::Draft => status.muted(),
        PrStatus::Merged => status.accent(),
    }
}
