//! Report panel
//!
//! Fragility gauge, executive summary, critical alerts, risk metrics and
//! sources of the selected report.

use crate::state::AppState;
use crate::view_models::report_panel::score_ratio;
use crate::view_models::{FragilityLevel, ReportPanelViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Wrap},
    Frame,
};
use sci_client::Report;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Report ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match ReportPanelViewModel::from_state(state) {
        ReportPanelViewModel::Placeholder(message) => {
            render_message(message, Style::default().fg(Color::DarkGray), inner, f)
        }
        ReportPanelViewModel::Loading(message) => {
            render_message(&message, Style::default().fg(Color::Yellow), inner, f)
        }
        ReportPanelViewModel::Error(message) => {
            render_message(&message, Style::default().fg(Color::Red), inner, f)
        }
        ReportPanelViewModel::Report(report) => render_report(report, inner, f),
    }
}

fn render_message(message: &str, style: Style, area: Rect, f: &mut Frame) {
    f.render_widget(
        Paragraph::new(message)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_report(report: &Report, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Industry and date
            Constraint::Length(3), // Fragility gauge
            Constraint::Min(0),    // Details
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            report.industry.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  supply chain risk analysis · {}", report.created_at.format("%b %d, %Y")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let level = FragilityLevel::from_score(report.fragility_score);
    let gauge = Gauge::default()
        .block(Block::bordered().title(" Overall fragility "))
        .gauge_style(Style::default().fg(level.color()))
        .ratio(score_ratio(report.fragility_score))
        .label(format!("{:.1} / 10  {}", report.fragility_score, level.label()));
    f.render_widget(gauge, chunks[1]);

    f.render_widget(
        Paragraph::new(detail_lines(report)).wrap(Wrap { trim: false }),
        chunks[2],
    );
}

fn heading(text: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn detail_lines(report: &Report) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("EXECUTIVE SUMMARY", Color::Cyan),
        Line::from(report.executive_summary.clone()),
    ];

    if !report.critical_alerts.is_empty() {
        lines.push(Line::default());
        lines.push(heading("CRITICAL ALERTS", Color::Red));
        for (idx, alert) in report.critical_alerts.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}. ", idx + 1), Style::default().fg(Color::Red)),
                Span::raw(alert.clone()),
            ]));
        }
    }

    if !report.risk_metrics.is_empty() {
        lines.push(Line::default());
        lines.push(heading("RISK METRICS", Color::Magenta));
        for metric in &report.risk_metrics {
            let level = FragilityLevel::from_score(metric.impact_score);
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>4.1} {:<6} ", metric.impact_score, level.label()),
                    Style::default().fg(level.color()),
                ),
                Span::styled(
                    metric.category.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(format!("      {}", metric.description)));
        }
    }

    if !report.sources.is_empty() {
        lines.push(Line::default());
        lines.push(heading("SOURCES", Color::Blue));
        for source in &report.sources {
            lines.push(Line::from(vec![
                Span::raw(format!(" • {} ", source.title)),
                Span::styled(source.url.clone(), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    lines
}
