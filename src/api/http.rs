//! reqwest-backed stacks API client

use crate::api::StacksApi;
use crate::config::StacksConfig;
use crate::error::{Error, Result};
use crate::types::Stack;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

/// Stacks API client using reqwest
pub struct HttpStacksApi {
    client: Client,
    /// Base URL without trailing slash
    base: String,
    repositories_segment: String,
}

impl HttpStacksApi {
    /// Create a client from config
    pub fn new(config: &StacksConfig) -> Result<Self> {
        let base = config.base_url()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base: base.as_str().trim_end_matches('/').to_string(),
            repositories_segment: config.repositories_segment.clone(),
        })
    }

    /// URL of the stack list for a repository
    pub fn stacks_url(&self, repo_id: &str) -> Result<Url> {
        let url = format!(
            "{}/api/{}/{}/stacks",
            self.base,
            self.repositories_segment,
            urlencoding::encode(repo_id)
        );
        Ok(Url::parse(&url)?)
    }
}

#[async_trait]
impl StacksApi for HttpStacksApi {
    async fn list_stacks(&self, repo_id: &str) -> Result<Vec<Stack>> {
        let url = self.stacks_url(repo_id)?;
        debug!(repo_id, %url, "fetching stacks");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(repo_id, %status, "stacks request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Parse separately so malformed bodies surface as Error::Parse
        let body = response.bytes().await?;
        let stacks: Vec<Stack> = serde_json::from_slice(&body)?;

        debug!(repo_id, count = stacks.len(), "fetched stacks");
        Ok(stacks)
    }
}
