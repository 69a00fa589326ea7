//! Divine-Pride API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use mobforge_domain::SourceMonster;

use crate::infrastructure::config::DivinePrideSettings;
use crate::infrastructure::ports::{FetchError, MonsterFetcher};

/// Timeout for Monster endpoint requests.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the Divine-Pride database API.
#[derive(Clone)]
pub struct DivinePrideClient {
    client: Client,
    base_url: String,
    monster_api_prefix: String,
    api_key: Option<String>,
    server: String,
}

impl DivinePrideClient {
    pub fn new(settings: &DivinePrideSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            monster_api_prefix: settings.monster_api_prefix.clone(),
            api_key: settings.api_key.clone(),
            server: settings.server.clone(),
        }
    }

    /// The Monster endpoint URL for one identifier, without query pairs.
    fn monster_url(&self, monster_id: i64) -> String {
        format!("{}/{}/{}", self.base_url, self.monster_api_prefix, monster_id)
    }
}

#[async_trait]
impl MonsterFetcher for DivinePrideClient {
    async fn fetch(&self, monster_id: i64) -> Result<SourceMonster, FetchError> {
        let url = self.monster_url(monster_id);
        tracing::debug!(monster_id, %url, "fetching monster");

        let mut request = self.client.get(&url).query(&[("server", self.server.as_str())]);
        if let Some(api_key) = self.api_key.as_deref() {
            request = request.query(&[("apiKey", api_key)]);
        }

        let response = request.send().await?;
        let response = response.error_for_status()?;

        let monster = response
            .json::<SourceMonster>()
            .await
            .map_err(|e| FetchError::InvalidJson(e.to_string()))?;

        Ok(monster)
    }
}
