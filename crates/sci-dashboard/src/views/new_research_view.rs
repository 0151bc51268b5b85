//! New research popup

use super::centered_rect;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: ratatui::layout::Rect, f: &mut Frame) {
    let submission = &state.submission;
    let popup = centered_rect(60, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" New Research ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error or progress
            Constraint::Min(0),    // Presets
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Industry").style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let input = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(submission.input.clone()),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(input), chunks[1]);

    let feedback = if submission.submitting {
        Some(Span::styled("Submitting…", Style::default().fg(Color::Yellow)))
    } else {
        submission
            .error
            .as_ref()
            .map(|e| Span::styled(e.clone(), Style::default().fg(Color::Red)))
    };
    if let Some(feedback) = feedback {
        f.render_widget(Paragraph::new(Line::from(feedback)), chunks[2]);
    }

    let items: Vec<ListItem> = submission
        .presets
        .iter()
        .map(|p| ListItem::new(p.clone()))
        .collect();
    let list = List::new(items)
        .block(Block::bordered().title(" Presets "))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default();
    list_state.select(submission.preset_cursor);
    f.render_stateful_widget(list, chunks[3], &mut list_state);
}
