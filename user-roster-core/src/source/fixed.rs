//! In-memory user source

use async_trait::async_trait;

use super::UserSource;
use crate::error::FetchError;
use crate::types::UserRecord;

/// Source that always returns the same records without touching the network.
#[derive(Debug, Clone, Default)]
pub struct FixedUserSource {
    users: Vec<UserRecord>,
}

impl FixedUserSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserSource for FixedUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        Ok(self.users.clone())
    }
}
