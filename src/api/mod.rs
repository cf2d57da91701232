//! Access to the stacks HTTP API
//!
//! The store only talks to the server through [`StacksApi`], so tests can
//! swap in a mock.

mod http;

pub use http::HttpStacksApi;

use crate::error::Result;
use crate::types::Stack;
use async_trait::async_trait;

/// Read access to the stacks of a repository
#[async_trait]
pub trait StacksApi: Send + Sync {
    /// Fetch every stack of a repository, in server order
    async fn list_stacks(&self, repo_id: &str) -> Result<Vec<Stack>>;
}
