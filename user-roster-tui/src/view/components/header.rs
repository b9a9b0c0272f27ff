//! 控制栏组件
//!
//! 行着色开关、按国家排序、恢复初始状态与国家过滤输入框

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use user_roster_core::SortField;

use crate::i18n::t;
use crate::model::App;
use crate::view::pages::users::sort_arrow;
use crate::view::theme::{colors, Styles};

/// 渲染控制栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let coloring_label = if app.roster.row_coloring() {
        texts.header.uncolor_rows
    } else {
        texts.header.color_rows
    };
    let country_arrow = sort_arrow(app.roster.sort_directions().get(SortField::Country));

    let filter_focused = app.focus.is_filter();
    let filter_text = app.roster.filter_text();
    let filter_span = if filter_text.is_empty() && !filter_focused {
        Span::styled(texts.header.filter_placeholder, Style::default().fg(c.muted))
    } else {
        let style = if filter_focused {
            Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(c.fg)
        };
        Span::styled(filter_text.to_string(), style)
    };

    let mut spans = vec![
        Span::styled("[c] ", Styles::hint_key()),
        Span::raw(coloring_label),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[3] ", Styles::hint_key()),
        Span::raw(format!("{} {country_arrow}", texts.header.sort_by_country)),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[r] ", Styles::hint_key()),
        Span::raw(texts.header.restore),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[/] ", Styles::hint_key()),
        Span::raw(format!("{}: ", texts.header.filter_label)),
        filter_span,
    ];
    if filter_focused {
        spans.push(Span::styled("▏", Style::default().fg(c.highlight)));
    }

    let border_style = if filter_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}
