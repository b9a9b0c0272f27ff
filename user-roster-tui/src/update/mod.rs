//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod table;          // 表格子消息处理
//!         mod filter;         // 过滤输入框子消息处理
//!         mod modal;          // 弹窗子消息处理
//!
//!
//!     用户列表本身（app.roster）只通过 `ViewState::dispatch(Action)` 修改：
//!
//!         TableMessage::Sort(field)       →   Action::Sort(field)
//!         TableMessage::ToggleColoring    →   Action::ToggleColoring
//!         TableMessage::Restore           →   Action::Restore
//!         FilterMessage::Input(ch)        →   Action::PushFilterChar(ch)
//!         FilterMessage::Backspace        →   Action::PopFilterChar
//!         FilterMessage::Clear            →   Action::ClearFilter
//!         ModalMessage::Confirm（删除）    →   Action::Delete(row_id)
//!         AppMessage::UsersLoaded(users)  →   Action::Loaded(users)
//!
//!     每次 dispatch 之后调用 `app.clamp_selection()`，保证选中行仍在过滤视图之内。
//!

mod filter;
mod modal;
mod table;

use user_roster_core::{Action, UserRecord};

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::FocusFilter => {
            if !app.modal.is_open() {
                app.focus = FocusPanel::Filter;
            }
        }

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
        }

        AppMessage::Filter(filter_msg) => {
            filter::update(app, filter_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::UsersLoaded(users) => {
            handle_users_loaded(app, users);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 启动加载完成
fn handle_users_loaded(app: &mut App, users: Vec<UserRecord>) {
    let count = users.len();
    log::info!("Loaded {count} users");

    app.roster.dispatch(Action::Loaded(users));
    app.select_first();

    let texts = t();
    if count == 0 {
        app.set_status(texts.common.no_users);
    } else {
        app.set_status(format!("{count} {}", texts.status.users));
    }
}
