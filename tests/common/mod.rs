//! Shared test fixtures

#![allow(dead_code)]

mod mock_api;

pub use mock_api::MockStacksApi;

use stacks_client::types::{
    Branch, BranchStatus, PrStatus, PrSummary, Stack, StackStatus,
};

/// Branch fixture with the given status and no PR
pub fn make_branch(name: &str, status: BranchStatus) -> Branch {
    Branch {
        name: name.to_string(),
        status,
        commits: 2,
        author: "sam".to_string(),
        time_ago: "1 hour ago".to_string(),
        description: format!("Work on {name}"),
        conflicts: None,
        pr: None,
    }
}

/// Attach a PR to a branch fixture
pub fn with_pr(mut branch: Branch, number: u64, status: PrStatus) -> Branch {
    branch.pr = Some(PrSummary { number, status });
    branch
}

/// Stack fixture with ready branches named after `branches`
pub fn make_stack(id: &str, branches: &[&str]) -> Stack {
    Stack {
        id: id.to_string(),
        name: format!("stack {id}"),
        status: StackStatus::InProgress,
        branches: branches
            .iter()
            .map(|b| make_branch(b, BranchStatus::Ready))
            .collect(),
    }
}

/// JSON body for a small two-stack repository
pub const TWO_STACKS_JSON: &str = r#"[
    {
        "id": "s1",
        "name": "auth rework",
        "status": "review",
        "branches": [
            {
                "name": "auth-base",
                "status": "ready",
                "commits": 3,
                "author": "sam",
                "timeago": "2 hours ago",
                "description": "Split session handling",
                "pr": { "number": 41, "status": "open" }
            },
            {
                "name": "auth-tokens",
                "status": "draft",
                "commits": 1,
                "author": "sam",
                "timeago": "5 minutes ago",
                "description": "Token refresh",
                "conflicts": true,
                "pr": null
            }
        ]
    },
    { "id": "s2", "name": "cleanup", "status": "complete", "branches": [] }
]"#;
