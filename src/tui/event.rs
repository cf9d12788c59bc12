//! Event handling for the TUI

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, InputMode, Tab};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);
/// Shorter poll while a slide runs so frames keep coming
const ANIMATION_POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Handle all input events
pub fn handle_events(app: &mut App) -> Result<()> {
    let timeout = if app.is_animating() {
        ANIMATION_POLL_TIMEOUT
    } else {
        POLL_TIMEOUT
    };

    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
            Event::Resize(_, _) => {} // Terminal will redraw automatically
            _ => {}
        }
    }
    Ok(())
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    if app.detail.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Backspace
        ) {
            app.close_detail();
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Page turns
        KeyCode::Char('l') | KeyCode::Char(']') => app.next_page(),
        KeyCode::Char('h') | KeyCode::Char('[') => app.prev_page(),
        KeyCode::Right if key.modifiers.contains(KeyModifiers::SHIFT) => app.select_next_tile(),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::SHIFT) => app.select_prev_tile(),
        KeyCode::Right => app.next_page(),
        KeyCode::Left => app.prev_page(),

        // Tile selection within the page
        KeyCode::Char('L') => app.select_next_tile(),
        KeyCode::Char('H') => app.select_prev_tile(),

        // Carousel focus
        KeyCode::Char('j') | KeyCode::Down => app.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => app.focus_prev(),

        // Tabs
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.switch_tab(tab);
            }
        }

        // Overlays
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('b') => app.open_hero_detail(),
        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('t') => app.cycle_theme(),

        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_search(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}
