//! Account overview panel
//!
//! Renders balances and the asset allocation breakdown

use super::super::state::DashboardViewState;
use crate::environment::Environment;
use crate::ui::format::format_currency;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the account overview panel.
pub fn render_overview_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardViewState) {
    let mut info_lines = Vec::new();

    info_lines.push(Line::from(vec![Span::styled(
        format!("User: {}", state.user_id()),
        Style::default().fg(Color::LightBlue),
    )]));

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    match &state.data.overview {
        Some(overview) => {
            info_lines.push(Line::from(vec![Span::styled(
                format!("Total assets: {}", format_currency(overview.total_assets)),
                Style::default().fg(Color::White),
            )]));
            info_lines.push(Line::from(vec![Span::styled(
                format!("Available: {}", format_currency(overview.available_balance)),
                Style::default().fg(Color::LightGreen),
            )]));

            info_lines.push(Line::from(Span::raw("")));
            let allocation = overview.asset_allocation;
            for (label, value, color) in [
                ("Stocks", allocation.stocks, Color::LightBlue),
                ("Bonds", allocation.bonds, Color::LightGreen),
                ("Cash", allocation.cash, Color::LightYellow),
                ("Other", allocation.other, Color::LightMagenta),
            ] {
                info_lines.push(Line::from(vec![Span::styled(
                    format!("{:<7}{:>5.1}%", label, value),
                    Style::default().fg(color),
                )]));
            }
        }
        None => {
            info_lines.push(Line::from(Span::raw("Loading account data...")));
        }
    }

    // Uptime with better formatting
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(Span::raw("")));
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightCyan),
    )]));

    let info_block = Block::default()
        .title("ACCOUNT OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
