//! Public good panel
//!
//! Renders donation projects and the user's contribution tally

use super::super::state::DashboardViewState;
use crate::ui::format::format_currency;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the donations panel.
pub fn render_donations_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardViewState,
) {
    let mut lines: Vec<Line> = Vec::new();

    if !state.data.donations_loaded {
        lines.push(Line::from("Loading public-good projects..."));
    } else if state.data.projects.is_empty() {
        lines.push(Line::from("No projects open right now"));
    } else {
        for project in &state.data.projects {
            let percent = (project.progress() * 100.0).round() as u64;
            lines.push(Line::from(vec![Span::styled(
                project.name.clone(),
                Style::default().fg(Color::White),
            )]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>3}% ", percent),
                    Style::default().fg(Color::LightGreen),
                ),
                Span::styled(
                    format!(
                        "{} / {}",
                        format_currency(project.current_virtual_amount),
                        format_currency(project.target_amount)
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(vec![Span::styled(
            format!("My contributions: {}", state.data.contributions.len()),
            Style::default().fg(Color::LightMagenta),
        )]));
    }

    let block = Block::default()
        .title("PUBLIC GOOD")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
