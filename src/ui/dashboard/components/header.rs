//! Dashboard header component
//!
//! Renders the title and the market refresh gauge

use super::super::state::DashboardViewState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and refresh countdown.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardViewState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section with version display
    let version = env!("CARGO_PKG_VERSION");
    let title_text = if let Some(latest) = &state.latest_version {
        format!("FUNDWATCH v{} -> {} UPDATE AVAILABLE", version, latest)
    } else {
        format!("FUNDWATCH v{}", version)
    };

    let title_color = if state.latest_version.is_some() {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge: time until the next market refresh tick
    let (progress_percent, remaining_secs) = state.refresh_progress();
    let (progress_text, gauge_color) = if state.last_refresh_timestamp().is_none() {
        ("LIVE - Waiting for first market refresh".to_string(), Color::LightBlue)
    } else if remaining_secs > 0 {
        (
            format!("LIVE - Next market refresh ({}s)", remaining_secs),
            Color::LightGreen,
        )
    } else {
        ("LIVE - Refreshing market data".to_string(), Color::LightGreen)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent.min(100))
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
