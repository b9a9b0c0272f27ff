//! 应用级消息

use user_roster_core::UserRecord;

use super::{FilterMessage, ModalMessage, TableMessage};

/// 应用级消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 聚焦过滤输入框
    FocusFilter,

    /// 表格消息
    Table(TableMessage),

    /// 过滤输入框消息
    Filter(FilterMessage),

    /// 弹窗消息
    Modal(ModalMessage),

    /// 用户加载完成（失败时为空列表）
    UsersLoaded(Vec<UserRecord>),

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作
    Noop,
}
