//! 表格更新逻辑

use user_roster_core::{Action, SortField};

use crate::i18n::t;
use crate::message::TableMessage;
use crate::model::App;

/// 处理表格消息
pub fn update(app: &mut App, msg: TableMessage) {
    match msg {
        TableMessage::SelectPrevious => app.select_previous(),
        TableMessage::SelectNext => app.select_next(),
        TableMessage::SelectFirst => app.select_first(),
        TableMessage::SelectLast => app.select_last(),

        TableMessage::Sort(field) => {
            app.roster.dispatch(Action::Sort(field));
            app.clamp_selection();

            // 排序后方向标志已翻转，本次使用的是翻转前的值
            let texts = t();
            let direction = if app.roster.sort_directions().get(field) {
                texts.status.descending
            } else {
                texts.status.ascending
            };
            app.set_status(format!(
                "{} {} ({direction})",
                texts.status.sorted_by,
                column_label(field)
            ));
        }

        TableMessage::ToggleColoring => {
            app.roster.dispatch(Action::ToggleColoring);
        }

        TableMessage::Restore => {
            app.roster.dispatch(Action::Restore);
            app.select_first();
            app.set_status(t().status.restored);
        }

        TableMessage::Delete => {
            let target = app
                .selected_row()
                .map(|row| (row.id, row.record.full_name()));
            match target {
                Some((row_id, name)) => app.modal.show_confirm_delete(row_id, &name),
                None => app.set_status(t().status.nothing_selected),
            }
        }
    }
}

/// 列标题
pub fn column_label(field: SortField) -> &'static str {
    let texts = t();
    match field {
        SortField::FirstName => texts.table.first_name,
        SortField::LastName => texts.table.last_name,
        SortField::Country => texts.table.country,
    }
}
