//! stacks-client - client-side state for stacked branches and PRs
//!
//! Fetches the stacks of a repository from the stacks HTTP API and holds them
//! in a [`store::StackStore`] together with loading and error state.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;
