//! Dashboard screen rendering
//!
//! Composes the summary header, the tenure histogram, and the search results
//! panel into the main dashboard view.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::stats::TermReport;

use super::histogram;

/// Renders the full dashboard for a loaded report
pub fn render(frame: &mut Frame, report: &TermReport) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(results_panel_height(report.matches.len())),
            Constraint::Length(1),
        ])
        .split(area);

    render_summary(frame, chunks[0], report);
    histogram::render(frame, chunks[1], &report.histogram);
    render_search_results(frame, chunks[2], report);

    let hint = Paragraph::new("q/Esc: quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[3]);
}

/// Renders the record count and average tenure header
fn render_summary(frame: &mut Frame, area: Rect, report: &TermReport) {
    let line = Line::from(vec![
        Span::styled("Presidents: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            report.records.len().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            "Average years in office: ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:.2}", report.average),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default().title(" Summary ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Renders the search results panel for the active query
fn render_search_results(frame: &mut Frame, area: Rect, report: &TermReport) {
    let title = format!(
        " Search: '{}' ({} matches) ",
        report.query,
        report.matches.len()
    );

    let lines: Vec<Line> = if report.matches.is_empty() {
        vec![Line::from(Span::styled(
            "No matching presidents",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        report
            .matches
            .iter()
            .map(|record| {
                Line::from(vec![
                    Span::styled(
                        record.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        record.years_in_office.clone(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let block = Block::default().title(title).borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Height of the results panel: matches plus the border rows, bounded so a
/// broad query cannot crowd out the chart
fn results_panel_height(match_count: usize) -> u16 {
    (match_count.max(1) as u16).saturating_add(2).clamp(3, 10)
}
