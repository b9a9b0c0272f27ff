//! Data source adapter
//!
//! One GET against the user endpoint. [`UserSource`] is the seam the
//! front-end depends on; [`load_users`] is the fire-and-forget wrapper that
//! turns every failure into an empty list.

mod fixed;
mod http;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::UserRecord;

pub use fixed::FixedUserSource;
pub use http::{
    build_url, fetch_users, parse_users, HttpUserSource, SourceConfig, DEFAULT_ENDPOINT,
    DEFAULT_RESULTS, MAX_RESULTS,
};

/// Something that can produce a batch of user records
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the users, exactly as the upstream returned them
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

/// Fetch users, logging and swallowing any failure.
///
/// Resolves to an empty list when the fetch fails. There is no retry.
pub async fn load_users(source: &dyn UserSource) -> Vec<UserRecord> {
    match source.fetch_users().await {
        Ok(users) => {
            log::info!("Fetched {} users", users.len());
            users
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("Error fetching users: {e}");
            } else {
                log::error!("Error fetching users: {e}");
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{users, FailingUserSource};

    #[tokio::test]
    async fn load_users_passes_records_through() {
        let source = FixedUserSource::new(users(&[("Ann", "Lee", "Spain"), ("Bo", "Kim", "France")]));
        let loaded = load_users(&source).await;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].name.first, "Bo");
    }

    #[tokio::test]
    async fn load_users_swallows_errors() {
        let source = FailingUserSource(FetchError::Parse("unexpected end of input".into()));
        assert!(load_users(&source).await.is_empty());

        let source = FailingUserSource(FetchError::Network("connection refused".into()));
        assert!(load_users(&source).await.is_empty());
    }
}
