use async_trait::async_trait;

use crate::error::AppResult;

use super::models::InstancePage;

/// Opens one authenticated session per named profile.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    type Session: InventorySession;

    /// Resolves credentials and the account identity for `profile`.
    async fn open(&self, profile: &str) -> AppResult<Self::Session>;
}

/// An authenticated session bound to a single profile.
#[async_trait]
pub trait InventorySession: Send + Sync {
    fn account_id(&self) -> &str;

    /// Fetches one page of database instances in `region`, continuing from
    /// `marker` when given.
    async fn describe_db_instances(
        &self,
        region: &str,
        marker: Option<String>,
    ) -> AppResult<InstancePage>;
}
