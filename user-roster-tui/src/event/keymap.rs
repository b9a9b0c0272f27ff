//! 快捷键配置
//!
//! 定义快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 表格
    pub const SORT_FIRST_NAME: KeyBinding = KeyBinding::key(KeyCode::Char('1'));
    pub const SORT_LAST_NAME: KeyBinding = KeyBinding::key(KeyCode::Char('2'));
    pub const SORT_COUNTRY: KeyBinding = KeyBinding::key(KeyCode::Char('3'));
    pub const TOGGLE_COLORING: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const RESTORE: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const FOCUS_FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const DELETE_ALT: KeyBinding = KeyBinding::key(KeyCode::Delete);

    // 过滤输入框
    pub const CLEAR_FILTER: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
