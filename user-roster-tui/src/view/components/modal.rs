//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { .. } => render_confirm_delete(frame, modal),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 去掉边框和内边距后的区域
fn inner_rect(area: Rect, pad_x: u16, pad_y: u16) -> Rect {
    Rect::new(
        area.x + pad_x,
        area.y + pad_y,
        area.width.saturating_sub(pad_x * 2),
        area.height.saturating_sub(pad_y * 2),
    )
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmDelete {
        user_name, focus, ..
    } = modal
    else {
        return;
    };
    let all = t();
    let texts = &all.modal;

    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.confirm_delete_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.confirm_delete_question),
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!("  \"{user_name}\""),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.delete), confirm_style),
        ]),
        Line::from(""),
        Line::styled(
            format!("  Enter {} · Esc {}", all.hints.confirm, all.hints.cancel),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area, 2, 1));
}

/// 快捷键说明行
fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let section = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let area = centered_rect(52, 19, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let hints = &texts.hints;
    let lines = vec![
        Line::styled(texts.modal.help_table_section, section),
        Line::from(""),
        help_line("↑↓/jk", hints.move_selection),
        help_line("1 / 2 / 3", hints.sort),
        help_line("c", hints.color),
        help_line("r", hints.restore),
        help_line("/", hints.filter),
        help_line("d / Del", hints.delete),
        help_line("q", hints.quit),
        Line::from(""),
        Line::styled(texts.modal.help_filter_section, section),
        Line::from(""),
        help_line("Esc", hints.done),
        help_line("Ctrl+U", hints.clear),
        Line::from(""),
        Line::styled(texts.modal.help_close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area, 2, 1));
}
