//! 弹窗更新逻辑

use user_roster_core::Action;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Help) => handle_simple_modal(app, msg),
        None => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        row_id,
        ref user_name,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                // 确认删除
                let user_name = user_name.clone();
                app.modal.close();
                app.roster.dispatch(Action::Delete(row_id));
                app.clamp_selection();
                app.set_status(format!("{}: \"{user_name}\"", t().status.deleted));
            } else {
                // 取消
                app.modal.close();
                app.clear_status();
            }
        }
    }
}

/// 处理帮助弹窗
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        ModalMessage::ToggleFocus => {}
    }
}
