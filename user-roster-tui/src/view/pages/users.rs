//! 用户表格视图

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use user_roster_core::{LoadStatus, SortDirections, SortField, UserRow};

use crate::i18n::t;
use crate::model::App;
use crate::util::truncate_display;
use crate::view::theme::{colors, row_style, Styles};

/// 照片列宽度
const PHOTO_WIDTH: u16 = 28;

/// 渲染用户表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let empty_text = match app.roster.load_status() {
        LoadStatus::Loading => Some(texts.common.loading),
        LoadStatus::Loaded(_) if app.roster.working().is_empty() => Some(texts.common.no_users),
        LoadStatus::Loaded(_) if app.roster.visible_len() == 0 => Some(texts.table.no_match),
        LoadStatus::Loaded(_) => None,
    };

    match empty_text {
        Some(text) => render_empty(frame, area, text),
        None => render_table(app, frame, area),
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {text}"), Style::default().fg(colors().muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染表格
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let directions = app.roster.sort_directions();

    let header = Row::new(vec![
        Cell::from(texts.table.photo),
        Cell::from(sort_header(texts.table.first_name, directions, SortField::FirstName)),
        Cell::from(sort_header(texts.table.last_name, directions, SortField::LastName)),
        Cell::from(sort_header(texts.table.country, directions, SortField::Country)),
        Cell::from(texts.table.actions),
    ])
    .style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let coloring = app.roster.row_coloring();
    let rows: Vec<Row> = app
        .roster
        .visible()
        .enumerate()
        .map(|(i, user)| user_row(user, row_style(i, coloring)))
        .collect();

    let widths = [
        Constraint::Length(PHOTO_WIDTH),
        Constraint::Min(12),
        Constraint::Min(12),
        Constraint::Min(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

/// 单行
fn user_row(user: &UserRow, style: Style) -> Row<'_> {
    Row::new(vec![
        Cell::from(truncate_display(user.thumbnail(), usize::from(PHOTO_WIDTH))),
        Cell::from(user.first_name()),
        Cell::from(user.last_name()),
        Cell::from(user.country()),
        Cell::from(t().table.delete_action),
    ])
    .style(style)
}

/// 带方向箭头的列标题
pub fn sort_header(label: &str, directions: SortDirections, field: SortField) -> String {
    format!("{label} {}", sort_arrow(directions.get(field)))
}

/// `true` 显示 ↑，`false` 显示 ↓
pub fn sort_arrow(flag: bool) -> &'static str {
    if flag {
        "↑"
    } else {
        "↓"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_follows_flag() {
        let mut directions = SortDirections::default();
        assert_eq!(sort_header("Country", directions, SortField::Country), "Country ↓");
        directions.toggle(SortField::Country);
        assert_eq!(sort_header("Country", directions, SortField::Country), "Country ↑");
        assert_eq!(sort_header("Name", directions, SortField::FirstName), "Name ↓");
    }
}
