//! User Roster Core Library
//!
//! Provides the platform-independent part of the user list viewer:
//! - the user record model returned by the random-user API
//! - the data source adapter (HTTP fetch, fire-and-forget loading)
//! - the list state reducer (filter, sort, delete, restore, row colouring)
//!
//! Front-ends drive [`ViewState`] exclusively through [`Action`]s and read the
//! memoised filtered view back for rendering.

pub mod error;
pub mod source;
pub mod state;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, FetchError, StateError};
pub use source::{load_users, FixedUserSource, HttpUserSource, SourceConfig, UserSource};
pub use state::{Action, LoadStatus, SortDirections, SortField, ViewState};
pub use types::{Location, Name, Picture, RowId, UserRecord, UserRow};
