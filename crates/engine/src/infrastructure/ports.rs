//! Port traits for infrastructure boundaries.
//!
//! The fetch port is the only abstraction in the engine; everything else is
//! concrete types. It exists so the pipeline driver can be exercised
//! without the Divine-Pride API (and because the remote side could move).

use async_trait::async_trait;

use mobforge_domain::SourceMonster;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::InvalidJson(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Fetches one monster record by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MonsterFetcher: Send + Sync {
    async fn fetch(&self, monster_id: i64) -> Result<SourceMonster, FetchError>;
}
