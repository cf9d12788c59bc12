//! Overlay rendering
//!
//! Help, item detail and the loading popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::app::App;
use super::super::theme::Theme;
use super::helpers::{centered_rect, format_rating, format_release_date};
use crate::catalog::MediaKind;
use crate::catalog::image::{ImageFormat, optional_image_url};

const HELP_KEYS: &[(&str, &[(&str, &str)])] = &[
    (
        "Carousels",
        &[
            ("h/l ←/→", "Previous/next page"),
            ("H/L S-←/→", "Previous/next tile"),
            ("j/k ↓/↑", "Focus next/previous carousel"),
            ("Enter", "Show details"),
            ("b", "Show featured item"),
        ],
    ),
    (
        "Tabs",
        &[
            ("1-3", "Switch to tab"),
            ("Tab", "Next tab"),
            ("S-Tab", "Previous tab"),
        ],
    ),
    (
        "Other",
        &[
            ("/", "Search movies and TV"),
            ("r", "Reload"),
            ("t", "Cycle theme"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ],
    ),
];

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(theme.title).bold(),
        )),
        Line::from(""),
    ];

    for (group, keys) in HELP_KEYS {
        lines.push(Line::from(Span::styled(
            *group,
            Style::default().fg(theme.accent).bold(),
        )));
        for (key, action) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), Style::default().fg(theme.rating)),
                Span::styled(*action, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(theme.dim),
    )));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.title))
                .title(Span::styled(" Help ", Style::default().fg(theme.title).bold()))
                .style(Style::default().bg(theme.base)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render the item detail overlay
pub fn render_detail_overlay(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    // The item can vanish if its list was reloaded underneath
    let Some(item) = app.detail_item() else {
        return;
    };

    let popup_area = centered_rect(70, 70, area);
    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.dim));

    let mut lines = vec![
        Line::from(Span::styled(
            item.title().to_string(),
            Style::default().fg(theme.text).bold(),
        )),
        Line::from(""),
    ];

    if let Some(kind) = app.detail_kind() {
        let kind_name = match kind {
            MediaKind::Movie => "Movie",
            MediaKind::Tv => "TV show",
        };
        lines.push(Line::from(vec![
            label("Type:     "),
            Span::styled(kind_name, Style::default().fg(theme.accent)),
        ]));
    }

    let released = item
        .date()
        .map(format_release_date)
        .unwrap_or_else(|| "Unknown".to_string());
    lines.push(Line::from(vec![
        label("Released: "),
        Span::styled(released, Style::default().fg(theme.date)),
    ]));

    let rating = format_rating(item.vote_average);
    if !rating.is_empty() {
        lines.push(Line::from(vec![
            label("Rating:   "),
            Span::styled(rating, Style::default().fg(theme.rating)),
        ]));
    }

    lines.push(Line::from(""));
    let overview = if item.overview.is_empty() {
        "No overview available."
    } else {
        item.overview.as_str()
    };
    lines.push(Line::from(Span::styled(
        overview.to_string(),
        Style::default().fg(theme.text),
    )));
    lines.push(Line::from(""));

    let images = [
        ("Poster:   ", item.poster_path.as_deref(), ImageFormat::W500),
        ("Backdrop: ", item.backdrop_path.as_deref(), ImageFormat::Original),
    ];
    for (name, path, format) in images {
        if let Some(url) = optional_image_url(&app.image_base_url, path, format) {
            lines.push(Line::from(vec![
                label(name),
                Span::styled(url, Style::default().fg(theme.accent)),
            ]));
        }
    }

    let detail = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(Span::styled(" Details ", Style::default().fg(theme.accent).bold()))
                .title_bottom(Line::from(Span::styled(
                    " Esc to close ",
                    Style::default().fg(theme.dim),
                )))
                .style(Style::default().bg(theme.base)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(detail, popup_area);
}

/// Render the loading overlay
pub fn render_loading_overlay(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some((current, total, title)) = app.loading_progress() else {
        return;
    };
    let popup_area = centered_rect(40, 20, area);

    let bar_width = 20;
    let filled = if total > 0 {
        (current * bar_width) / total
    } else {
        0
    };
    let progress_bar = format!(
        "[{}{}] {}/{}",
        "█".repeat(filled),
        "░".repeat(bar_width - filled),
        current,
        total
    );

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(progress_bar, Style::default().fg(theme.rating))),
        Line::from(""),
        Line::from(Span::styled("Please wait...", Style::default().fg(theme.dim))),
    ];

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.rating))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(theme.rating).bold(),
                ))
                .style(Style::default().bg(theme.base)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
