//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 用户表格
    #[default]
    Table,
    /// 国家过滤输入框
    Filter,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Table => FocusPanel::Filter,
            FocusPanel::Filter => FocusPanel::Table,
        }
    }

    /// 是否是表格
    pub fn is_table(&self) -> bool {
        matches!(self, FocusPanel::Table)
    }

    /// 是否是过滤输入框
    pub fn is_filter(&self) -> bool {
        matches!(self, FocusPanel::Filter)
    }
}
