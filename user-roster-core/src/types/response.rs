//! Random-user API response envelope

use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Top-level payload of the user endpoint: `{ "results": [...], "info": {...} }`.
///
/// Only `results` is consumed; `info` and any other keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    pub results: Vec<UserRecord>,
}
