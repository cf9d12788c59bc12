//! Carousel rows and the hero banner

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::app::{Carousel, FetchState};
use super::super::theme::Theme;
use super::helpers::{clip_horizontal, format_rating, truncate};
use crate::catalog::CatalogItem;

/// Rows a carousel needs: borders around a row of bordered tiles
pub const CAROUSEL_HEIGHT: u16 = 6;
pub const HERO_HEIGHT: u16 = 6;

pub fn render_carousel(
    frame: &mut Frame,
    carousel: &Carousel,
    focused: bool,
    theme: &Theme,
    area: Rect,
    now: Instant,
) {
    let border_color = if focused { theme.accent } else { theme.border };
    let title_style = if focused {
        Style::default().fg(theme.accent).bold()
    } else {
        Style::default().fg(theme.text)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(format!(" {} ", carousel.title()), title_style));

    if matches!(carousel.state, FetchState::Loaded(_)) {
        let indicator = format!(" {}/{} ", carousel.pager.index() + 1, carousel.page_count());
        block = block.title(
            Line::from(Span::styled(indicator, Style::default().fg(theme.dim))).right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = match &carousel.state {
        FetchState::Idle => Some(Span::styled("Not loaded", Style::default().fg(theme.dim))),
        FetchState::Loading => Some(Span::styled("Loading...", Style::default().fg(theme.dim))),
        FetchState::Failed(reason) => Some(Span::styled(
            format!("✗ {reason}"),
            Style::default().fg(theme.error),
        )),
        FetchState::Loaded(_) if carousel.visible().is_empty() => {
            Some(Span::styled("No results", Style::default().fg(theme.dim)))
        }
        FetchState::Loaded(_) => None,
    };

    if let Some(span) = message {
        let paragraph = Paragraph::new(Line::from(span)).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let page_size = u16::try_from(carousel.pager.page_size())
        .unwrap_or(u16::MAX)
        .max(1);
    let tile_width = inner.width / page_size;
    if tile_width == 0 {
        return;
    }

    let selected = focused.then_some(carousel.selected);
    match carousel.transition {
        Some(transition) => {
            let (out_dx, in_dx) = transition.offsets(now, inner.width);
            if let Some(outgoing) = carousel.outgoing() {
                render_row(frame, outgoing, out_dx, tile_width, None, theme, inner);
            }
            render_row(frame, carousel.visible(), in_dx, tile_width, selected, theme, inner);
        }
        None => render_row(frame, carousel.visible(), 0, tile_width, selected, theme, inner),
    }
}

fn render_row(
    frame: &mut Frame,
    items: &[CatalogItem],
    dx: i32,
    tile_width: u16,
    selected: Option<usize>,
    theme: &Theme,
    area: Rect,
) {
    for (i, item) in items.iter().enumerate() {
        let x = dx + i as i32 * i32::from(tile_width);
        let Some((rect, cut)) = clip_horizontal(area, x, tile_width) else {
            continue;
        };
        render_tile(frame, item, selected == Some(i), tile_width, cut, theme, rect);
    }
}

fn render_tile(
    frame: &mut Frame,
    item: &CatalogItem,
    is_selected: bool,
    tile_width: u16,
    cut: u16,
    theme: &Theme,
    rect: Rect,
) {
    let text_width = tile_width.saturating_sub(2) as usize;
    let title_style = if is_selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let mut meta = Vec::new();
    if let Some(year) = item.year() {
        meta.push(Span::styled(year.to_string(), Style::default().fg(theme.date)));
        meta.push(Span::raw(" "));
    }
    meta.push(Span::styled(
        format_rating(item.vote_average),
        Style::default().fg(theme.rating),
    ));

    let lines = vec![
        Line::from(Span::styled(truncate(item.title(), text_width), title_style)),
        Line::from(meta),
    ];

    let base = if is_selected {
        Style::default().bg(theme.surface)
    } else {
        Style::default()
    };

    // Tiles cut by the row edge lose their frame while sliding
    if rect.width == tile_width {
        let border_color = if is_selected { theme.accent } else { theme.border };
        let tile = Paragraph::new(lines).style(base).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(tile, rect);
    } else {
        let inner = Rect {
            y: rect.y.saturating_add(1),
            height: rect.height.saturating_sub(2),
            ..rect
        };
        let tile = Paragraph::new(lines)
            .style(base)
            .scroll((0, cut.saturating_sub(1)));
        frame.render_widget(tile, inner);
    }
}

/// Featured item above a tab's carousels
pub fn render_hero(frame: &mut Frame, hero: Option<&CatalogItem>, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(" FEATURED ", Style::default().fg(theme.title).bold()))
        .style(Style::default().bg(theme.surface));

    let Some(item) = hero else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let mut header = vec![Span::styled(
        item.title().to_string(),
        Style::default().fg(theme.text).bold(),
    )];
    if let Some(year) = item.year() {
        header.push(Span::styled(format!("  {year}"), Style::default().fg(theme.date)));
    }
    let rating = format_rating(item.vote_average);
    if !rating.is_empty() {
        header.push(Span::styled(format!("  {rating}"), Style::default().fg(theme.rating)));
    }

    let lines = vec![
        Line::from(header),
        Line::from(Span::styled(item.overview.clone(), Style::default().fg(theme.dim))),
    ];

    let banner = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}
