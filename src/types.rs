//! Core types for stacks-client
//!
//! These mirror the JSON shapes served by the stacks API. The server owns
//! ordering and uniqueness; nothing here is validated beyond shape.

use serde::{Deserialize, Serialize};

/// A stack: an ordered collection of branches forming one unit of work
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stack {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Lifecycle status of the whole stack
    pub status: StackStatus,
    /// Branches from the bottom of the stack to the top
    pub branches: Vec<Branch>,
}

impl Stack {
    /// Find a branch in this stack by name
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    /// Sum of commit counts across all branches
    pub fn total_commits(&self) -> u64 {
        self.branches.iter().map(|b| u64::from(b.commits)).sum()
    }

    /// Branches the server flagged as conflicting
    pub fn conflicted_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| b.has_conflicts())
    }

    /// Branches whose PR is open (drafts excluded)
    pub fn open_prs(&self) -> impl Iterator<Item = &Branch> {
        self.branches
            .iter()
            .filter(|b| b.pr.as_ref().is_some_and(|pr| pr.status == PrStatus::Open))
    }
}

/// A branch within a stack
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Readiness of this branch
    pub status: BranchStatus,
    /// Number of commits on the branch
    pub commits: u32,
    /// Author display name
    pub author: String,
    /// Relative age, pre-rendered by the server (e.g. "2 hours ago")
    #[serde(rename = "timeago")]
    pub time_ago: String,
    /// Free-form description
    pub description: String,
    /// Whether the server detected conflicts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<bool>,
    /// Linked pull request, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr: Option<PrSummary>,
}

impl Branch {
    /// Whether the conflict flag is present and set
    pub fn has_conflicts(&self) -> bool {
        self.conflicts.unwrap_or(false)
    }
}

/// Pull request summary attached to a branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrSummary {
    /// PR number
    pub number: u64,
    /// PR state
    pub status: PrStatus,
}

/// Lifecycle status of a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackStatus {
    /// Work still in progress
    InProgress,
    /// Under review
    Review,
    /// Fully landed
    Complete,
}

impl std::fmt::Display for StackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in_progress"),
            Self::Review => write!(f, "review"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Readiness status of a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchStatus {
    /// Ready to land
    Ready,
    /// Under review
    Review,
    /// Not yet ready for review
    Draft,
}

impl std::fmt::Display for BranchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Review => write!(f, "review"),
            Self::Draft => write!(f, "draft"),
        }
    }
}

/// PR state as reported by the stacks API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrStatus {
    /// Open for review
    Open,
    /// Draft PR
    Draft,
    /// Merged
    Merged,
}

impl std::fmt::Display for PrStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Draft => write!(f, "draft"),
            Self::Merged => write!(f, "merged"),
        }
    }
}
