//! 测试辅助模块
//!
//! 提供 fixture 工厂方法和失败的 mock 数据源。

use async_trait::async_trait;

use crate::error::FetchError;
use crate::source::UserSource;
use crate::state::{Action, ViewState};
use crate::types::UserRecord;

/// Build records from `(first, last, country)` triples
pub fn users(specs: &[(&str, &str, &str)]) -> Vec<UserRecord> {
    specs
        .iter()
        .map(|(first, last, country)| UserRecord::new(*first, *last, *country))
        .collect()
}

/// A state that has already received `records` from a fetch
pub fn loaded(records: Vec<UserRecord>) -> ViewState {
    ViewState::new().reduce(Action::Loaded(records))
}

/// First names of the working list, in order
pub fn first_names(state: &ViewState) -> Vec<String> {
    state
        .working()
        .iter()
        .map(|row| row.first_name().to_string())
        .collect()
}

/// First names of the filtered view, in order
pub fn visible_first_names(state: &ViewState) -> Vec<String> {
    state
        .visible()
        .map(|row| row.first_name().to_string())
        .collect()
}

/// Source that always fails with the wrapped error
pub struct FailingUserSource(pub FetchError);

#[async_trait]
impl UserSource for FailingUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        Err(self.0.clone())
    }
}
