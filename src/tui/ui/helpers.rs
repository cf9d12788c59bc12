//! Helper functions for UI rendering
//!
//! Date and rating formatting, text truncation and the rect math used to
//! slide carousel rows.

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Format an API date ("2024-05-01") as "May 1, 2024"
pub fn format_release_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(), // Fallback to raw if parsing fails
    }
}

/// "★ 7.8", or empty for unrated items
pub fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v > 0.0 => format!("★ {v:.1}"),
        _ => String::new(),
    }
}

/// Truncate to `max` characters, ending with an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max - 1).collect();
    format!("{kept}…")
}

/// Place a `width`-wide box at horizontal offset `x` from `area.x`, clipped
/// to `area`. Returns the visible rect and how many columns were cut on the
/// left, or `None` when nothing is visible.
pub fn clip_horizontal(area: Rect, x: i32, width: u16) -> Option<(Rect, u16)> {
    let left = i32::from(area.x) + x;
    let right = left + i32::from(width);
    let area_left = i32::from(area.x);
    let area_right = area_left + i32::from(area.width);

    let visible_left = left.max(area_left);
    let visible_right = right.min(area_right);
    if visible_right <= visible_left {
        return None;
    }

    let rect = Rect {
        x: u16::try_from(visible_left).ok()?,
        y: area.y,
        width: u16::try_from(visible_right - visible_left).ok()?,
        height: area.height,
    };
    let cut = u16::try_from(visible_left - left).ok()?;
    Some((rect, cut))
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
