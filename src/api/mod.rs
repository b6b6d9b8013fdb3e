use crate::api::error::ApiError;
use crate::snapshot::LatestData;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Anything that can produce the latest sensor and nutrient payload.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LatestDataSource: Send + Sync {
    /// Fetch and validate the current `/latest-data` payload.
    async fn latest_data(&self) -> Result<LatestData, ApiError>;
}
