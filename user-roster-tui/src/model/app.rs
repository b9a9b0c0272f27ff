//! 应用主状态结构

use user_roster_core::{UserRow, ViewState};

use super::{FocusPanel, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 用户列表状态
    pub roster: ViewState,

    /// 过滤视图中的选中行
    pub selected: usize,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self::with_row_coloring(false)
    }

    /// 创建应用实例，并预设行着色开关
    pub fn with_row_coloring(enabled: bool) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Table,
            roster: ViewState::with_row_coloring(enabled),
            selected: 0,
            status_message: None,
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前选中的用户
    pub fn selected_row(&self) -> Option<&UserRow> {
        self.roster.visible_row(self.selected)
    }

    /// 选择上一行
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一行
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.roster.visible_len() {
            self.selected += 1;
        }
    }

    /// 选择第一行
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一行
    pub fn select_last(&mut self) {
        self.selected = self.roster.visible_len().saturating_sub(1);
    }

    /// 视图变化后，把选中行限制在可见范围内
    pub fn clamp_selection(&mut self) {
        let len = self.roster.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_roster_core::{Action, UserRecord};

    fn app_with(n: usize) -> App {
        let mut app = App::new();
        let users = (0..n)
            .map(|i| UserRecord::new(format!("user{i}"), "", "Spain"))
            .collect();
        app.roster.dispatch(Action::Loaded(users));
        app
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with(3);
        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        app.select_first();
        assert_eq!(app.selected, 0);
        app.select_last();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn clamp_after_view_shrinks() {
        let mut app = app_with(3);
        app.select_last();
        app.roster.dispatch(Action::SetFilter("nowhere".into()));
        app.clamp_selection();
        assert_eq!(app.selected, 0);
        assert!(app.selected_row().is_none());
    }

    #[test]
    fn empty_table_selects_nothing() {
        let mut app = app_with(0);
        app.select_next();
        app.select_last();
        assert_eq!(app.selected, 0);
        assert!(app.selected_row().is_none());
    }
}
