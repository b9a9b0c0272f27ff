//! 类型定义模块

mod response;
mod user;

pub use response::UsersResponse;
pub use user::{Location, Name, Picture, RowId, UserRecord, UserRow};
