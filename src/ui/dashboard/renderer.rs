//! Dashboard main renderer

use super::components::{donations, footer, header, holdings, logs, market, overview};
use super::state::DashboardViewState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

pub fn render_dashboard(f: &mut Frame, state: &DashboardViewState) {
    // Nothing to render until the initial batch has been published.
    if !state.data.loaded {
        let loading = Paragraph::new("Loading your wealth data...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(loading, f.area());
        return;
    }

    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content_chunks[0]);

    overview::render_overview_panel(f, left_chunks[0], state);
    donations::render_donations_panel(f, left_chunks[1], state);
    holdings::render_holdings_table(f, content_chunks[1], state);
    logs::render_logs_panel(f, content_chunks[2], state);

    market::render_market_section(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}
