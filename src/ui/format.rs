//! Display formatting helpers for money, counts, and change values.

use ratatui::prelude::Color;

/// Group the integer digits of a non-negative decimal string with commas.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a value with thousands separators and a fixed number of decimals.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format an amount as CNY, e.g. `¥1,234.56`.
pub fn format_currency(amount: f64) -> String {
    format!("¥{}", format_grouped(amount, 2))
}

/// Format an index value with two decimals and separators.
pub fn format_number(value: f64) -> String {
    format_grouped(value, 2)
}

/// Format an absolute change plus percentage, with an explicit sign on gains,
/// e.g. `+12.30 (0.35%)`.
pub fn format_change(change: f64, change_percent: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{}{:.2} ({:.2}%)", sign, change, change_percent)
}

/// Format a return rate with an explicit sign on gains, e.g. `+3.20%`.
pub fn format_return_rate(rate: f64) -> String {
    let sign = if rate > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, rate)
}

/// Color for a signed change: gains green, losses red, flat gray.
pub fn change_color(change: f64) -> Color {
    if change > 0.0 {
        Color::Green
    } else if change < 0.0 {
        Color::Red
    } else {
        Color::Gray
    }
}
