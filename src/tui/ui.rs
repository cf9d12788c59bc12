//! UI rendering for the TUI

mod carousel;
mod helpers;
mod overlays;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use self::carousel::{CAROUSEL_HEIGHT, HERO_HEIGHT, render_carousel, render_hero};
use self::overlays::{render_detail_overlay, render_help_overlay, render_loading_overlay};
use super::app::{App, InputMode, Tab};
use super::theme::Theme;

/// Main render function
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let theme = app.theme();
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.base)), area);

    // Main layout: header, body, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, app, &theme, chunks[0]);
    render_body(frame, app, &theme, chunks[1], now);
    render_footer(frame, app, &theme, chunks[2]);

    // Render overlays (in order of priority)
    if app.detail.is_some() {
        render_detail_overlay(frame, app, &theme, area);
    }

    if app.show_help {
        render_help_overlay(frame, &theme, area);
    }

    if app.has_background_op() {
        render_loading_overlay(frame, app, &theme, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.tab {
                Style::default().fg(theme.accent).bold()
            } else {
                Style::default().fg(theme.dim)
            };
            Line::from(Span::styled(format!(" {} ", t.title()), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(" reelview ", Style::default().fg(theme.title).bold())),
        )
        .highlight_style(Style::default().fg(theme.accent))
        .select(app.tab.index());

    frame.render_widget(tabs, area);
}

fn render_body(frame: &mut Frame, app: &App, theme: &Theme, area: Rect, now: Instant) {
    if app.tab == Tab::Search && app.last_keyword.is_none() && !app.has_background_op() {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.dim)),
            Span::styled("/", Style::default().fg(theme.accent).bold()),
            Span::styled(" to search movies and TV", Style::default().fg(theme.dim)),
        ]))
        .alignment(Alignment::Center);
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1.min(area.height),
            ..area
        };
        frame.render_widget(hint, middle);
        return;
    }

    let mut rows = area;
    if app.tab.has_hero() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HERO_HEIGHT), Constraint::Min(0)])
            .split(area);
        render_hero(frame, app.hero(), theme, split[0]);
        rows = split[1];
    }

    let carousels = app.current_carousels();
    let (start, count) = visible_carousels(carousels.len(), app.focused, rows.height);

    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Length(CAROUSEL_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(rows);

    for (slot, index) in (start..start + count).enumerate() {
        render_carousel(
            frame,
            &carousels[index],
            index == app.focused,
            theme,
            slots[slot],
            now,
        );
    }
}

/// First carousel to draw and how many fit, keeping the focused one on screen
fn visible_carousels(total: usize, focused: usize, height: u16) -> (usize, usize) {
    let fit = usize::from(height / CAROUSEL_HEIGHT).max(1).min(total);
    let start = (focused + 1).saturating_sub(fit).min(total - fit);
    (start, fit)
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    // Show status message if present (takes priority)
    if let Some(status) = &app.status_message {
        if app.input_mode == InputMode::Normal {
            let color = if status.is_error { theme.error } else { theme.accent };
            let footer = Paragraph::new(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(status.text.as_str(), Style::default().fg(color)),
            ]))
            .style(Style::default().bg(theme.surface));

            frame.render_widget(footer, area);
            return;
        }
    }

    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));
    let hint = |h: &'static str| Span::styled(h, Style::default().fg(theme.dim));

    let spans = match app.input_mode {
        InputMode::Normal => vec![
            key(" h/l"),
            hint(" page "),
            key(" j/k"),
            hint(" row "),
            key(" Enter"),
            hint(" details "),
            key(" /"),
            hint(" search "),
            key(" r"),
            hint(" reload "),
            key(" ?"),
            hint(" help "),
            key(" q"),
            hint(" quit"),
        ],
        InputMode::Search => vec![
            Span::styled(" Search: ", Style::default().fg(theme.rating)),
            Span::styled(app.search_input.as_str(), Style::default().fg(theme.text)),
            Span::styled("│", Style::default().fg(theme.accent)), // Cursor
            key("  Enter"),
            hint(" search "),
            key(" Esc"),
            hint(" cancel"),
        ],
    };

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogItem, ResultList};
    use crate::config::ReelConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn list(titles: &[&str]) -> ResultList {
        ResultList {
            page: 1,
            results: titles
                .iter()
                .enumerate()
                .map(|(id, title)| CatalogItem {
                    id: id as u64,
                    title: Some(title.to_string()),
                    name: None,
                    poster_path: None,
                    backdrop_path: None,
                    overview: format!("About {title}"),
                    release_date: Some("2024-05-01".to_string()),
                    first_air_date: None,
                    vote_average: Some(7.5),
                })
                .collect(),
            total_pages: 1,
            total_results: titles.len() as u32,
            dates: None,
        }
    }

    #[test]
    fn test_visible_carousels_follow_focus() {
        // Room for two of four
        assert_eq!(visible_carousels(4, 0, 12), (0, 2));
        assert_eq!(visible_carousels(4, 1, 12), (0, 2));
        assert_eq!(visible_carousels(4, 3, 12), (2, 2));
        // Everything fits
        assert_eq!(visible_carousels(4, 3, 100), (0, 4));
        // Too short still draws the focused one
        assert_eq!(visible_carousels(4, 2, 3), (2, 1));
    }

    #[test]
    fn test_render_loaded_tab() {
        let mut app = App::new(&ReelConfig::default());
        app.movies[0].set_loaded(list(&["Hero", "Alpha", "Beta", "Gamma"]));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| render(f, &app, Instant::now()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("FEATURED"));
        assert!(text.contains("Hero"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("NOW PLAYING"));
        assert!(text.contains("Not loaded"));
    }

    #[test]
    fn test_render_search_hint_and_overlays() {
        let mut app = App::new(&ReelConfig::default());
        app.switch_tab(Tab::Search);
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| render(f, &app, Instant::now()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_render_oversized_page_size() {
        let mut config = ReelConfig::default();
        config.carousel.page_size = 65536;
        let mut app = App::new(&config);
        app.movies[0].set_loaded(list(&["Hero", "Alpha", "Beta"]));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| render(f, &app, Instant::now()))
            .unwrap();

        // Tiles are too narrow to draw, the rest of the screen still renders
        let text = buffer_text(&terminal);
        assert!(text.contains("NOW PLAYING"));
        assert!(text.contains("FEATURED"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut app = App::new(&ReelConfig::default());
        app.movies[0].set_loaded(list(&["Hero", "Alpha"]));
        app.detail = None;

        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal
            .draw(|f| render(f, &app, Instant::now()))
            .unwrap();
    }
}
