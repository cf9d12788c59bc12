//! Application state for the TUI

mod carousel;
mod traits;
mod transition;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use tracing::{info, warn};

pub use carousel::{Carousel, CarouselSource, FetchState};
pub use traits::SelectableList;
pub use transition::Transition;

use super::theme::{Theme, ThemeVariant};
use crate::catalog::{CatalogItem, CatalogSource, MediaKind, Section};
use crate::config::ReelConfig;

/// Available tabs in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Movies,
    Tv,
    Search,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Movies, Tab::Tv, Tab::Search]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Movies => "Movies",
            Tab::Tv => "TV",
            Tab::Search => "Search",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Movies => 0,
            Tab::Tv => 1,
            Tab::Search => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::from_index((self.index() + 1) % Self::all().len()).unwrap_or_default()
    }

    pub fn prev(&self) -> Tab {
        let len = Self::all().len();
        Self::from_index((self.index() + len - 1) % len).unwrap_or_default()
    }

    /// Tabs with a hero banner above their carousels
    pub fn has_hero(&self) -> bool {
        !matches!(self, Tab::Search)
    }
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Fetch work executed one step per main-loop iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundOp {
    /// Fetch every section carousel of a tab
    LoadTab { tab: Tab, step: usize },
    /// Run a keyword search, one media kind per step
    Search { keyword: String, step: usize },
}

impl BackgroundOp {
    pub fn title(&self) -> String {
        match self {
            BackgroundOp::LoadTab { tab, .. } => format!("Loading {}", tab.title()),
            BackgroundOp::Search { keyword, .. } => format!("Searching for \"{keyword}\""),
        }
    }

    fn step(&self) -> usize {
        match self {
            BackgroundOp::LoadTab { step, .. } | BackgroundOp::Search { step, .. } => *step,
        }
    }

    fn tab(&self) -> Tab {
        match self {
            BackgroundOp::LoadTab { tab, .. } => *tab,
            BackgroundOp::Search { .. } => Tab::Search,
        }
    }

    fn advance(self) -> Self {
        match self {
            BackgroundOp::LoadTab { tab, step } => BackgroundOp::LoadTab { tab, step: step + 1 },
            BackgroundOp::Search { keyword, step } => BackgroundOp::Search {
                keyword,
                step: step + 1,
            },
        }
    }
}

/// Status message to display temporarily
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// The item shown in the detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTarget {
    pub tab: Tab,
    pub carousel: usize,
    pub item_id: u64,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub tab: Tab,
    pub input_mode: InputMode,
    pub search_input: String,
    pub last_keyword: Option<String>,

    // Carousels per tab
    pub movies: Vec<Carousel>,
    pub tv: Vec<Carousel>,
    pub search: Vec<Carousel>,
    pub focused: usize,

    // Overlays
    pub detail: Option<DetailTarget>,
    pub show_help: bool,

    pub status_message: Option<StatusMessage>,
    pub background_op: Option<BackgroundOp>,

    pub theme_variant: ThemeVariant,
    pub transition_duration: Duration,
    pub image_base_url: String,
}

impl App {
    pub fn new(config: &ReelConfig) -> Self {
        let page_size = config.carousel.page_size;
        let search_page_size = config.carousel.search_page_size;

        let movies = Section::for_kind(MediaKind::Movie)
            .into_iter()
            .map(|s| Carousel::for_section(s, page_size))
            .collect();
        let tv = Section::for_kind(MediaKind::Tv)
            .into_iter()
            .map(|s| Carousel::for_section(s, page_size))
            .collect();
        let search = [MediaKind::Movie, MediaKind::Tv]
            .into_iter()
            .map(|k| Carousel::for_search(k, search_page_size))
            .collect();

        Self {
            running: true,
            tab: Tab::Movies,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            last_keyword: None,
            movies,
            tv,
            search,
            focused: 0,
            detail: None,
            show_help: false,
            status_message: None,
            background_op: None,
            theme_variant: ThemeVariant::from_config_theme(config.tui.theme),
            transition_duration: Duration::from_millis(config.carousel.transition_ms),
            image_base_url: config.api.image_base_url.clone(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn theme(&self) -> Theme {
        self.theme_variant.theme()
    }

    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.set_status(format!("Theme: {}", self.theme_variant.display_name()), false);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ==================== Carousels ====================

    pub fn carousels(&self, tab: Tab) -> &[Carousel] {
        match tab {
            Tab::Movies => &self.movies,
            Tab::Tv => &self.tv,
            Tab::Search => &self.search,
        }
    }

    pub fn carousels_mut(&mut self, tab: Tab) -> &mut [Carousel] {
        match tab {
            Tab::Movies => &mut self.movies,
            Tab::Tv => &mut self.tv,
            Tab::Search => &mut self.search,
        }
    }

    pub fn current_carousels(&self) -> &[Carousel] {
        self.carousels(self.tab)
    }

    pub fn focused_carousel(&self) -> Option<&Carousel> {
        self.current_carousels().get(self.focused)
    }

    pub fn focused_carousel_mut(&mut self) -> Option<&mut Carousel> {
        let focused = self.focused;
        self.carousels_mut(self.tab).get_mut(focused)
    }

    /// The featured item above the current tab's carousels
    pub fn hero(&self) -> Option<&CatalogItem> {
        if !self.tab.has_hero() {
            return None;
        }
        self.current_carousels()
            .first()
            .and_then(|c| c.result_list())
            .and_then(|list| list.hero())
    }

    pub fn focus_next(&mut self) {
        let count = self.current_carousels().len();
        if count > 0 {
            self.focused = (self.focused + 1).min(count - 1);
        }
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        let duration = self.transition_duration;
        if let Some(carousel) = self.focused_carousel_mut() {
            carousel.next_page(duration);
        }
    }

    pub fn prev_page(&mut self) {
        let duration = self.transition_duration;
        if let Some(carousel) = self.focused_carousel_mut() {
            carousel.prev_page(duration);
        }
    }

    pub fn select_next_tile(&mut self) {
        if let Some(carousel) = self.focused_carousel_mut() {
            carousel.select_next();
        }
    }

    pub fn select_prev_tile(&mut self) {
        if let Some(carousel) = self.focused_carousel_mut() {
            carousel.select_prev();
        }
    }

    /// Advance running slides; returns true while any is still animating
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for carousel in self
            .movies
            .iter_mut()
            .chain(self.tv.iter_mut())
            .chain(self.search.iter_mut())
        {
            animating |= carousel.tick(now);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.current_carousels().iter().any(Carousel::is_animating)
    }

    // ==================== Tabs ====================

    /// Switch tabs; the tab being left starts over on its next visit
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        for carousel in self.carousels_mut(self.tab) {
            carousel.reset_view();
        }
        self.tab = tab;
        self.focused = 0;
        self.detail = None;

        let needs_load = tab != Tab::Search
            && self
                .carousels(tab)
                .iter()
                .any(|c| c.state == FetchState::Idle);
        if needs_load {
            self.schedule_tab_load(tab);
        }
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.tab.prev());
    }

    // ==================== Detail Overlay ====================

    pub fn open_detail(&mut self) {
        let Some(item_id) = self.focused_carousel().and_then(|c| c.selected_item()).map(|i| i.id)
        else {
            return;
        };
        self.detail = Some(DetailTarget {
            tab: self.tab,
            carousel: self.focused,
            item_id,
        });
    }

    /// Show the hero item in the detail overlay
    pub fn open_hero_detail(&mut self) {
        if let Some(item_id) = self.hero().map(|i| i.id) {
            self.detail = Some(DetailTarget {
                tab: self.tab,
                carousel: 0,
                item_id,
            });
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail_item(&self) -> Option<&CatalogItem> {
        let target = self.detail?;
        self.carousels(target.tab)
            .get(target.carousel)
            .and_then(|c| c.find(target.item_id))
    }

    pub fn detail_kind(&self) -> Option<MediaKind> {
        let target = self.detail?;
        self.carousels(target.tab).get(target.carousel).map(Carousel::kind)
    }

    // ==================== Search Input ====================

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_input = self.last_keyword.clone().unwrap_or_default();
    }

    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
    }

    pub fn search_push(&mut self, c: char) {
        self.search_input.push(c);
    }

    pub fn search_pop(&mut self) {
        self.search_input.pop();
    }

    /// Run the typed keyword on the Search tab
    pub fn submit_search(&mut self) {
        let keyword = self.search_input.trim().to_string();
        self.exit_search();
        if keyword.is_empty() {
            self.set_status("Type a keyword to search", true);
            return;
        }
        self.switch_tab(Tab::Search);
        self.schedule_search(keyword);
    }

    // ==================== Loading ====================

    /// Mark a tab's carousels loading and queue their fetches
    pub fn schedule_tab_load(&mut self, tab: Tab) {
        for carousel in self.carousels_mut(tab) {
            carousel.set_loading();
        }
        if self.detail.is_some_and(|d| d.tab == tab) {
            self.detail = None;
        }
        self.schedule_op(BackgroundOp::LoadTab { tab, step: 0 });
    }

    pub fn schedule_search(&mut self, keyword: String) {
        for carousel in &mut self.search {
            carousel.set_loading();
        }
        if self.detail.is_some_and(|d| d.tab == Tab::Search) {
            self.detail = None;
        }
        self.last_keyword = Some(keyword.clone());
        self.schedule_op(BackgroundOp::Search { keyword, step: 0 });
    }

    /// Refetch whatever the current tab shows
    pub fn reload(&mut self) {
        match (self.tab, self.last_keyword.clone()) {
            (Tab::Search, Some(keyword)) => self.schedule_search(keyword),
            (Tab::Search, None) => self.set_status("Nothing to reload, press / to search", false),
            (tab, _) => self.schedule_tab_load(tab),
        }
    }

    // ==================== Status ====================

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ==================== Background Operations ====================

    /// Schedule a background operation (will be executed by main loop)
    ///
    /// A pending op for another tab is dropped and its unfinished carousels
    /// go back to idle, so the next visit loads them again.
    pub fn schedule_op(&mut self, op: BackgroundOp) {
        if let Some(previous) = self.background_op.take()
            && previous.tab() != op.tab()
        {
            for carousel in self.carousels_mut(previous.tab()) {
                carousel.cancel_loading();
            }
        }
        self.background_op = Some(op);
    }

    pub fn has_background_op(&self) -> bool {
        self.background_op.is_some()
    }

    /// (current step, total steps, label) for the footer
    pub fn loading_progress(&self) -> Option<(usize, usize, String)> {
        let op = self.background_op.as_ref()?;
        let total = self.carousels(op.tab()).len();
        Some(((op.step() + 1).min(total), total, op.title()))
    }

    /// Execute one step of the pending background operation
    /// Returns true if there are more steps to execute
    pub fn execute_background_step(&mut self, catalog: &dyn CatalogSource) -> bool {
        let Some(op) = self.background_op.take() else {
            return false;
        };

        let tab = op.tab();
        let step = op.step();
        let keyword = match &op {
            BackgroundOp::Search { keyword, .. } => Some(keyword.clone()),
            BackgroundOp::LoadTab { .. } => None,
        };

        if let Some(carousel) = self.carousels_mut(tab).get_mut(step) {
            let result = match (carousel.source, keyword.as_deref()) {
                (CarouselSource::Section(section), _) => catalog.fetch_section(section),
                (CarouselSource::Search(kind), Some(keyword)) => catalog.search(kind, keyword),
                (CarouselSource::Search(_), None) => Ok(Default::default()),
            };
            match result {
                Ok(list) => {
                    info!(carousel = carousel.title(), results = list.len(), "carousel loaded");
                    carousel.set_loaded(list);
                }
                Err(e) => {
                    warn!(carousel = carousel.title(), error = %e, "carousel failed to load");
                    carousel.set_failed(&e);
                }
            }
        }

        let total = self.carousels(tab).len();
        if step + 1 < total {
            self.background_op = Some(op.advance());
            return true;
        }

        self.finish_load(tab);
        false
    }

    fn finish_load(&mut self, tab: Tab) {
        let carousels = self.carousels(tab);
        let failed: Vec<&str> = carousels
            .iter()
            .filter_map(|c| match &c.state {
                FetchState::Failed(reason) => Some(reason.as_str()),
                _ => None,
            })
            .collect();

        if let Some(first) = failed.first() {
            let text = format!(
                "{} of {} lists failed to load ({first})",
                failed.len(),
                carousels.len()
            );
            self.set_status(text, true);
        } else if tab == Tab::Search {
            let found: usize = carousels.iter().map(|c| c.items().len()).sum();
            let keyword = self.last_keyword.clone().unwrap_or_default();
            self.set_status(format!("{found} results for \"{keyword}\""), false);
        }
    }
}
