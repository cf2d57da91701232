//! Mock stacks API for testing

#![allow(dead_code)]

use async_trait::async_trait;
use stacks_client::api::StacksApi;
use stacks_client::error::{Error, Result};
use stacks_client::types::Stack;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Simple mock stacks API for testing
///
/// Features:
/// - Configurable responses per repository
/// - Call tracking for verification
/// - Error injection per repository
/// - Gates that hold a response until the test releases it
#[derive(Default)]
pub struct MockStacksApi {
    responses: Mutex<HashMap<String, Vec<Stack>>>,
    errors: Mutex<HashMap<String, u16>>,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    list_calls: Mutex<Vec<String>>,
}

impl MockStacksApi {
    /// Create an empty mock; unknown repositories answer with no stacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stacks returned for a repository
    pub fn set_stacks(&self, repo_id: &str, stacks: Vec<Stack>) {
        self.responses
            .lock()
            .unwrap()
            .insert(repo_id.to_string(), stacks);
    }

    /// Make fetches for a repository fail with an HTTP status
    pub fn fail_with_status(&self, repo_id: &str, status: u16) {
        self.errors
            .lock()
            .unwrap()
            .insert(repo_id.to_string(), status);
    }

    /// Stop failing fetches for a repository
    pub fn clear_failure(&self, repo_id: &str) {
        self.errors.lock().unwrap().remove(repo_id);
    }

    /// Hold fetches for a repository until a permit is added to the returned gate
    pub fn gate(&self, repo_id: &str) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.gates
            .lock()
            .unwrap()
            .insert(repo_id.to_string(), Arc::clone(&gate));
        gate
    }

    // === Call verification methods ===

    /// Get all repository ids `list_stacks` was called with
    pub fn get_list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Get count of `list_stacks` calls
    pub fn list_call_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }

    /// Assert that `list_stacks` was called exactly for these ids, in order
    pub fn assert_list_calls(&self, expected: &[&str]) {
        let calls = self.get_list_calls();
        assert_eq!(
            calls, expected,
            "Expected list_stacks calls {expected:?} but got: {calls:?}"
        );
    }
}

#[async_trait]
impl StacksApi for MockStacksApi {
    async fn list_stacks(&self, repo_id: &str) -> Result<Vec<Stack>> {
        self.list_calls.lock().unwrap().push(repo_id.to_string());

        let gate = self.gates.lock().unwrap().get(repo_id).cloned();
        if let Some(gate) = gate {
            let _permit = gate.acquire().await.unwrap();
        }

        if let Some(status) = self.errors.lock().unwrap().get(repo_id) {
            return Err(Error::Status {
                status: *status,
                url: format!("http://mock/api/respositories/{repo_id}/stacks"),
            });
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(repo_id)
            .cloned()
            .unwrap_or_default())
    }
}
