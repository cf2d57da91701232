//! Observable state held by a [`super::StackStore`].

use crate::error::Error;
use crate::types::Stack;
use std::sync::Arc;

/// Snapshot of the stacks view state
#[derive(Debug, Clone)]
pub struct StackState {
    /// Stacks from the last successful fetch (empty until one succeeds)
    pub stacks: Vec<Stack>,
    /// True while a fetch is outstanding, and before the first one settles
    pub loading: bool,
    /// Failure of the last settled fetch, cleared by the next success
    pub error: Option<Arc<Error>>,
}

impl StackState {
    /// State before anything has been fetched
    pub const fn initial() -> Self {
        Self {
            stacks: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Find a stack by id
    pub fn stack(&self, id: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id == id)
    }
}

impl Default for StackState {
    fn default() -> Self {
        Self::initial()
    }
}

/// How a single fetch settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Fetch succeeded and replaced the stack list
    Loaded(usize),
    /// Fetch failed; the error was recorded and the list kept
    Failed,
    /// A newer fetch started first; this result was dropped
    Superseded,
}

impl FetchOutcome {
    /// Whether this fetch changed the state
    pub const fn applied(self) -> bool {
        !matches!(self, Self::Superseded)
    }
}
