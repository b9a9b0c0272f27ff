//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Table / Filter）
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点（表格 / 过滤输入框）
//!             pub roster: ViewState,              // 用户列表状态（来自 user-roster-core）
//!             pub selected: usize,                // 过滤视图中的选中行
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub modal: ModalState,              // 弹窗状态
//!         }
//!
//!     roster 只能通过 `ViewState::dispatch(Action)` 修改，
//!     过滤、排序、删除、恢复的规则都在 core 中，TUI 只负责把按键翻译成 Action。
//!
//!     selected 指向的是 **过滤后视图** 中的位置，删除时先通过
//!     `roster.visible_row(selected)` 换成 RowId，再以 RowId 删除。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - Table：方向键移动选中行，数字键排序，c/r/d 等快捷键生效
//!     - Filter：可打印字符写入过滤文本，Esc / Enter / Tab 回到表格
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - ConfirmDelete { row_id, user_name, focus }
//!     - Help
//!
//!     弹窗打开时，所有按键优先交给弹窗处理。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{Modal, ModalState};
