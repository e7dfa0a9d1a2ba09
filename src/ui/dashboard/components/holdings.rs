//! Holdings table component

use super::super::state::DashboardViewState;
use crate::ui::format::{change_color, format_currency, format_number, format_return_rate};

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Render the holdings table.
pub fn render_holdings_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardViewState) {
    let block = Block::default()
        .title("MY HOLDINGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.data.holdings.is_empty() {
        let empty = Paragraph::new("No holdings yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header_cells = ["Fund", "Qty", "Cost", "Price", "Value", "Return"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = state.data.holdings.iter().map(|holding| {
        let cells = vec![
            Cell::from(format!("{} {}", holding.code, holding.name)),
            Cell::from(format_number(holding.quantity)),
            Cell::from(format_currency(holding.cost_price)),
            Cell::from(format_currency(holding.current_price)),
            Cell::from(format_currency(holding.market_value)),
            Cell::from(format_return_rate(holding.return_rate))
                .style(Style::default().fg(change_color(holding.return_rate))),
        ];
        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(12),
            Constraint::Percentage(14),
            Constraint::Percentage(14),
            Constraint::Percentage(18),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(block)
    .style(Style::default().fg(Color::White));

    f.render_widget(table, area);
}
