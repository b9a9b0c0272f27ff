//! 过滤输入框更新逻辑

use user_roster_core::Action;

use crate::message::FilterMessage;
use crate::model::{App, FocusPanel};

/// 处理过滤输入框消息
pub fn update(app: &mut App, msg: FilterMessage) {
    match msg {
        FilterMessage::Input(ch) => {
            app.roster.dispatch(Action::PushFilterChar(ch));
        }
        FilterMessage::Backspace => {
            app.roster.dispatch(Action::PopFilterChar);
        }
        FilterMessage::Clear => {
            app.roster.dispatch(Action::ClearFilter);
        }
        FilterMessage::Leave => {
            app.focus = FocusPanel::Table;
            return;
        }
    }
    app.clamp_selection();
}
