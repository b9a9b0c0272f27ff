//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use user_roster_core::SortField;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FilterMessage, ModalMessage, TableMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(ref modal) = app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.focus.is_filter() {
        handle_filter_keys(key)
    } else {
        handle_table_keys(key)
    }
}

/// 处理表格的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // 部分终端上 ? 带 SHIFT 修饰
    if DefaultKeymap::HELP.matches(&key) || key.code == KeyCode::Char('?') {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::FOCUS_FILTER.matches(&key) {
        return AppMessage::FocusFilter;
    }
    if DefaultKeymap::SORT_FIRST_NAME.matches(&key) {
        return AppMessage::Table(TableMessage::Sort(SortField::FirstName));
    }
    if DefaultKeymap::SORT_LAST_NAME.matches(&key) {
        return AppMessage::Table(TableMessage::Sort(SortField::LastName));
    }
    if DefaultKeymap::SORT_COUNTRY.matches(&key) {
        return AppMessage::Table(TableMessage::Sort(SortField::Country));
    }
    if DefaultKeymap::TOGGLE_COLORING.matches(&key) {
        return AppMessage::Table(TableMessage::ToggleColoring);
    }
    if DefaultKeymap::RESTORE.matches(&key) {
        return AppMessage::Table(TableMessage::Restore);
    }
    if DefaultKeymap::DELETE.matches(&key) || DefaultKeymap::DELETE_ALT.matches(&key) {
        return AppMessage::Table(TableMessage::Delete);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    match key.code {
        // ↑ 或 k: 上一行
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),
        // ↓ 或 j: 下一行
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),
        // Home: 第一行
        KeyCode::Home => AppMessage::Table(TableMessage::SelectFirst),
        // End: 最后一行
        KeyCode::End => AppMessage::Table(TableMessage::SelectLast),
        // Tab: 切换到过滤输入框
        KeyCode::Tab => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 处理过滤输入框的按键
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_FILTER.matches(&key) {
        return AppMessage::Filter(FilterMessage::Clear);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => AppMessage::Filter(FilterMessage::Leave),
        KeyCode::Backspace => AppMessage::Filter(FilterMessage::Backspace),
        // 字符输入（允许 Shift 输入大写字母）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Filter(FilterMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help => {
            // 帮助弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                    AppMessage::Modal(ModalMessage::Close)
                }
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            AppMessage::Modal(ModalMessage::ToggleFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crossterm::event::KeyEventState;
    use user_roster_core::RowId;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    #[test]
    fn table_shortcuts() {
        let app = App::new();
        assert!(matches!(
            handle_event(press(KeyCode::Char('1')), &app),
            AppMessage::Table(TableMessage::Sort(SortField::FirstName))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('3')), &app),
            AppMessage::Table(TableMessage::Sort(SortField::Country))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c')), &app),
            AppMessage::Table(TableMessage::ToggleColoring)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('r')), &app),
            AppMessage::Table(TableMessage::Restore)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Delete), &app),
            AppMessage::Table(TableMessage::Delete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('/')), &app),
            AppMessage::FocusFilter
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn filter_focus_turns_letters_into_input() {
        let mut app = App::new();
        app.focus = FocusPanel::Filter;
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Filter(FilterMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)),
                &app
            ),
            AppMessage::Filter(FilterMessage::Input('S'))
        ));
        assert!(matches!(
            handle_event(ctrl('u'), &app),
            AppMessage::Filter(FilterMessage::Clear)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Filter(FilterMessage::Leave)
        ));
        assert!(matches!(handle_event(ctrl('c'), &app), AppMessage::Quit));
    }

    #[test]
    fn modal_keys_take_priority() {
        let mut app = App::new();
        app.modal.show_confirm_delete(RowId(0), "Ann Lee");
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleFocus)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(ctrl('c'), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn key_release_is_ignored() {
        let app = App::new();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(matches!(
            handle_event(Event::Key(release), &app),
            AppMessage::Noop
        ));
    }
}
