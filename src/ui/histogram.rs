//! Tenure distribution chart
//!
//! Renders the years-in-office histogram as a bar chart with one bar per
//! tenure length, spanning the observed minimum to maximum.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::stats::Histogram;

/// Chart title matching the reference visualization
const CHART_TITLE: &str = "Distribution of Years in Office";
/// Caption under the bars
const X_AXIS_CAPTION: &str = "Years in Office";
/// Caption above the bars
const Y_AXIS_CAPTION: &str = "Number of Presidents";

/// Renders the histogram into the given area
pub fn render(frame: &mut Frame, area: Rect, histogram: &Histogram) {
    let block = Block::default()
        .title(format!(" {} ", CHART_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if histogram.is_empty() {
        let placeholder = Paragraph::new("No tenure data to chart")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let y_caption = Paragraph::new(Y_AXIS_CAPTION).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(y_caption, chunks[0]);

    let bars = to_bars(histogram);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width_for(chunks[1].width, bars.len()))
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(chart, chunks[1]);

    let x_caption = Paragraph::new(X_AXIS_CAPTION)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(x_caption, chunks[2]);
}

/// Converts histogram buckets into labelled chart bars
fn to_bars(histogram: &Histogram) -> Vec<Bar<'static>> {
    histogram
        .buckets
        .iter()
        .map(|&(length, count)| {
            Bar::default()
                .label(Line::from(length.to_string()))
                .value(count)
        })
        .collect()
}

/// Picks a bar width that fits the available columns
fn bar_width_for(available: u16, bucket_count: usize) -> u16 {
    if bucket_count == 0 {
        return 1;
    }
    let per_bar = available / bucket_count as u16;
    per_bar.saturating_sub(1).clamp(3, 7)
}
