//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use user_roster_core::LoadStatus;

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 加载状态
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::raw(load_summary(app)));

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 加载状态摘要，如 "100 users · 12 shown"
fn load_summary(app: &App) -> String {
    let texts = t();
    match app.roster.load_status() {
        LoadStatus::Loading => texts.common.loading.to_string(),
        LoadStatus::Loaded(_) => format!(
            "{} {} · {} {}",
            app.roster.working().len(),
            texts.status.users,
            app.roster.visible_len(),
            texts.status.shown
        ),
    }
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;
    match app.focus {
        FocusPanel::Table => vec![
            ("↑↓", hints.move_selection),
            ("1/2/3", hints.sort),
            ("c", hints.color),
            ("r", hints.restore),
            ("/", hints.filter),
            ("d", hints.delete),
            ("?", hints.help),
            ("q", hints.quit),
        ],
        FocusPanel::Filter => vec![
            ("Esc", hints.done),
            ("Ctrl+U", hints.clear),
        ],
    }
}
