//! Views
//!
//! Rendering only; every view reads from `AppState` through a view model.

mod new_research_view;
mod report_view;
mod status_bar;
mod task_list_view;

use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use status_bar::StatusBarWidget;

/// Render the whole screen
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Tasks and report
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(state, chunks[0], f);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    task_list_view::render(state, content[0], f);
    report_view::render(state, content[1], f);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), chunks[2]);
    f.render_widget(
        Paragraph::new(status_vm.hint).style(status_vm.metadata_style),
        chunks[3],
    );

    if state.submission.open {
        new_research_view::render(state, area, f);
    }
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let user = state.username.as_deref().unwrap_or("token");
    let mut spans = vec![
        Span::styled(
            " Supply Chain Intelligence ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(format!("signed in as {}", user), Style::default().fg(Color::Gray)),
    ];
    if let Some(report) = state.report_view.report() {
        spans.push(Span::styled(
            format!(" · viewing {}", report.industry),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Rect of `width` x `height` centered in `area`, clamped to it
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
