//! 表格消息

use user_roster_core::SortField;

/// 表格消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 选择第一行
    SelectFirst,
    /// 选择最后一行
    SelectLast,
    /// 按列排序
    Sort(SortField),
    /// 切换行着色
    ToggleColoring,
    /// 恢复初始状态
    Restore,
    /// 删除选中行（先弹出确认框）
    Delete,
}
