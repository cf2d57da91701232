//! Stack list state for one repository
//!
//! A [`StackStore`] owns the stacks of the repository it is pointed at. It is
//! re-derived whenever the repository id changes and can be refreshed on
//! demand. Every fetch carries a generation number; only the most recently
//! started fetch may write its result, so a slow response for an old
//! repository id can never overwrite a newer one.

mod state;

pub use state::{FetchOutcome, StackState};

use crate::api::StacksApi;
use crate::error::{Error, Result};
use crate::types::Stack;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Stacks view state bound to a repository id
pub struct StackStore {
    api: Arc<dyn StacksApi>,
    repo_id: watch::Sender<String>,
    generation: AtomicU64,
    state: watch::Sender<StackState>,
}

impl StackStore {
    /// Create a store in its initial state without fetching.
    pub fn new(api: Arc<dyn StacksApi>, repo_id: impl Into<String>) -> Self {
        let (repo_id, _) = watch::channel(repo_id.into());
        let (state, _) = watch::channel(StackState::initial());
        Self {
            api,
            repo_id,
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Create a store and run the initial fetch.
    pub async fn open(api: Arc<dyn StacksApi>, repo_id: impl Into<String>) -> Self {
        let store = Self::new(api, repo_id);
        store.refresh().await;
        store
    }

    /// Repository id the store currently tracks
    pub fn repo_id(&self) -> String {
        self.repo_id.borrow().clone()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> StackState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<StackState> {
        self.state.subscribe()
    }

    /// Re-fetch the stacks of the current repository.
    ///
    /// Fetch failures are recorded in the state rather than returned.
    pub async fn refresh(&self) -> FetchOutcome {
        // Claim a generation before reading the id so a concurrent
        // `set_repo_id` always lands in a newer generation.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let repo_id = self.repo_id();
        debug!(repo_id = %repo_id, generation, "refreshing stacks");

        self.state.send_if_modified(|state| {
            if !self.is_current(generation) || state.loading {
                return false;
            }
            state.loading = true;
            true
        });

        let result = self.api.list_stacks(&repo_id).await;

        let mut outcome = FetchOutcome::Superseded;
        self.state.send_if_modified(|state| {
            if !self.is_current(generation) {
                return false;
            }
            match result {
                Ok(stacks) => {
                    debug!(repo_id = %repo_id, count = stacks.len(), "stacks loaded");
                    outcome = FetchOutcome::Loaded(stacks.len());
                    state.stacks = stacks;
                    state.error = None;
                }
                Err(e) => {
                    warn!(repo_id = %repo_id, error = %e, "failed to fetch stacks");
                    outcome = FetchOutcome::Failed;
                    state.error = Some(Arc::new(e));
                }
            }
            state.loading = false;
            true
        });

        if outcome == FetchOutcome::Superseded {
            debug!(repo_id = %repo_id, generation, "discarding superseded fetch");
        }
        outcome
    }

    /// Point the store at another repository.
    ///
    /// Fetches once if the id changed and returns how that fetch settled;
    /// returns `None` without fetching if the id is unchanged.
    pub async fn set_repo_id(&self, repo_id: impl Into<String>) -> Option<FetchOutcome> {
        let repo_id = repo_id.into();
        let changed = self.repo_id.send_if_modified(|current| {
            if *current == repo_id {
                return false;
            }
            current.clone_from(&repo_id);
            true
        });

        if !changed {
            debug!(repo_id = %repo_id, "repository unchanged, not refetching");
            return None;
        }

        Some(self.refresh().await)
    }

    /// Create a new stack. Not implemented: sends nothing, changes nothing.
    #[allow(clippy::unused_async)]
    pub async fn create_stack(&self, name: &str) -> Result<Stack> {
        debug!(name, "create_stack requested");
        Err(Error::NotImplemented("create_stack"))
    }

    /// Add a branch to a stack. Not implemented: sends nothing, changes nothing.
    #[allow(clippy::unused_async)]
    pub async fn add_branch(&self, stack_id: &str, branch_name: &str) -> Result<()> {
        debug!(stack_id, branch_name, "add_branch requested");
        Err(Error::NotImplemented("add_branch"))
    }

    /// Sync a stack with its remote. Not implemented: sends nothing, changes nothing.
    #[allow(clippy::unused_async)]
    pub async fn sync_stack(&self, stack_id: &str) -> Result<()> {
        debug!(stack_id, "sync_stack requested");
        Err(Error::NotImplemented("sync_stack"))
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
