//! Market watch section
//!
//! Renders index cards and the trend sparkline

use super::super::state::DashboardViewState;
use crate::ui::format::{change_color, format_change, format_number};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Sparkline, Wrap};

/// Render the market section: indices on the left, trend chart on the right.
pub fn render_market_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_index_panel(f, chunks[0], state);
    render_trend_sparkline(f, chunks[1], state);
}

fn render_index_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardViewState) {
    let lines: Vec<Line> = if state.data.funds.is_empty() {
        vec![Line::from("Waiting for market data...")]
    } else {
        state
            .data
            .funds
            .iter()
            .map(|fund| {
                let arrow = if fund.change > 0.0 {
                    "▲ "
                } else if fund.change < 0.0 {
                    "▼ "
                } else {
                    "  "
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:<18}", fund.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:<8}", fund.code),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("NAV {:<8.4}", fund.current_nav),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:>10}  ", format_number(fund.value)),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{}{}", arrow, format_change(fund.change, fund.change_percent)),
                        Style::default().fg(change_color(fund.change)),
                    ),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title("MARKET WATCH")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_trend_sparkline(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardViewState) {
    let trends = &state.data.trends;

    // Shift values so the sparkline uses the full vertical range instead of
    // flattening around a large index baseline.
    let min = trends
        .iter()
        .map(|p| p.value)
        .fold(f64::INFINITY, f64::min);
    let series: Vec<u64> = trends
        .iter()
        .map(|p| {
            let shifted = p.value - min + 1.0;
            if shifted.is_finite() && shifted > 0.0 {
                shifted.round() as u64
            } else {
                0
            }
        })
        .collect();

    let title = match trends.last() {
        Some(latest) => format!("INDEX TREND ({} @ {})", format_number(latest.value), latest.time),
        None => "INDEX TREND".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let sparkline = Sparkline::default()
        .block(block)
        .data(&series)
        .style(Style::default().fg(Color::LightBlue));
    f.render_widget(sparkline, area);
}
