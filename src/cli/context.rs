//! Shared command context for CLI commands
//!
//! Resolves configuration and builds the store both `list` and `show` use.

use crate::cli::style::{Stylize, check, spinner_style};
use indicatif::ProgressBar;
use stacks_client::api::HttpStacksApi;
use stacks_client::config::{StacksConfig, default_config_path, load_config};
use stacks_client::error::Result;
use stacks_client::store::{StackState, StackStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file (defaults to the platform config dir)
    pub config_path: Option<PathBuf>,
    /// Base URL override, takes precedence over file and environment
    pub api_url: Option<String>,
}

/// Shared context for CLI commands that read stacks
pub struct CommandContext {
    /// Resolved configuration
    pub config: StacksConfig,
    /// Store bound to the requested repository
    pub store: StackStore,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// Precedence: `--api-url`, then environment, then config file, then defaults.
    pub fn new(options: &GlobalOptions, repo_id: &str) -> Result<Self> {
        let path = options.config_path.clone().or_else(default_config_path);
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                load_config(&path)?
            }
            None => StacksConfig::default(),
        };
        config.apply_env()?;

        if let Some(url) = &options.api_url {
            config.base_url.clone_from(url);
        }

        let api = HttpStacksApi::new(&config)?;
        let store = StackStore::new(Arc::new(api), repo_id);

        Ok(Self { config, store })
    }

    /// Fetch stacks with a spinner and return the settled state.
    ///
    /// A recorded fetch failure is returned as the error.
    pub async fn load(&self) -> anyhow::Result<StackState> {
        let repo_id = self.store.repo_id();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!("Fetching stacks for {}...", repo_id.emphasis()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        self.store.refresh().await;
        let state = self.store.snapshot();

        if let Some(error) = &state.error {
            spinner.finish_and_clear();
            return Err(Arc::clone(error).into());
        }

        spinner.finish_with_message(format!(
            "{} Fetched {} stack(s) from {}",
            check(),
            state.stacks.len().accent(),
            self.config.base_url.muted()
        ));
        Ok(state)
    }
}
