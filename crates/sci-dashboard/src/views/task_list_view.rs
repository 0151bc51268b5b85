//! Task list panel

use crate::state::AppState;
use crate::view_models::TaskTableViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = TaskTableViewModel::from_state(state);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(vm.title.clone())
        .title(Line::from(vm.status_text.clone()).right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Error line above the table, previous tasks stay visible below it
    let (error_area, table_area) = match &vm.error {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(inner);
            (Some(chunks[0]), chunks[1])
        }
        None => (None, inner),
    };

    if let (Some(error), Some(error_area)) = (&vm.error, error_area) {
        f.render_widget(
            Paragraph::new(format!("🚨 {}", error))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true }),
            error_area,
        );
    }

    if vm.rows.is_empty() {
        f.render_widget(
            Paragraph::new(vm.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            table_area,
        );
        return;
    }

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        ["", "Industry", "Status", "Progress", "Created"]
            .into_iter()
            .map(|h| Cell::from(h).style(header_style)),
    );

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.marker).style(Style::default().fg(Color::Cyan)),
                Cell::from(row.industry.clone()),
                Cell::from(row.status_text).style(Style::default().fg(row.status_color)),
                Cell::from(row.detail.clone()),
                Cell::from(row.created.clone()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(vm.cursor));
    f.render_stateful_widget(table, table_area, &mut table_state);
}
