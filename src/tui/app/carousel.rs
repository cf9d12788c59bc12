//! Carousel state
//!
//! Each carousel owns its fetch state, its pager and the slide animation in
//! flight. The selected tile is an index into the visible page.

use std::time::{Duration, Instant};

use super::traits::SelectableList;
use super::transition::Transition;
use crate::catalog::{CatalogError, CatalogItem, MediaKind, ResultList, Section};
use crate::pager::Pager;

/// Where a carousel's list comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselSource {
    Section(Section),
    Search(MediaKind),
}

/// Lifecycle of one fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded(ResultList),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

fn loaded_items(state: &FetchState) -> &[CatalogItem] {
    match state {
        FetchState::Loaded(list) => &list.results,
        _ => &[],
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    pub source: CarouselSource,
    pub state: FetchState,
    pub pager: Pager,
    pub transition: Option<Transition>,
    pub selected: usize,
}

impl Carousel {
    pub fn for_section(section: Section, page_size: usize) -> Self {
        Self::new(CarouselSource::Section(section), page_size)
    }

    pub fn for_search(kind: MediaKind, page_size: usize) -> Self {
        Self::new(CarouselSource::Search(kind), page_size)
    }

    fn new(source: CarouselSource, page_size: usize) -> Self {
        Self {
            source,
            state: FetchState::Idle,
            pager: Pager::new(page_size),
            transition: None,
            selected: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.source {
            CarouselSource::Section(section) => section.title(),
            CarouselSource::Search(MediaKind::Movie) => "MOVIE",
            CarouselSource::Search(MediaKind::Tv) => "TV",
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self.source {
            CarouselSource::Section(section) => section.kind(),
            CarouselSource::Search(kind) => kind,
        }
    }

    /// All fetched items, empty unless loaded
    pub fn items(&self) -> &[CatalogItem] {
        loaded_items(&self.state)
    }

    pub fn result_list(&self) -> Option<&ResultList> {
        match &self.state {
            FetchState::Loaded(list) => Some(list),
            _ => None,
        }
    }

    /// Items on the current page
    pub fn visible(&self) -> &[CatalogItem] {
        self.pager.window(self.items())
    }

    /// Items on the page sliding out, while a transition runs
    pub fn outgoing(&self) -> Option<&[CatalogItem]> {
        self.transition
            .map(|t| self.pager.window_at(self.items(), t.turn.from))
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.items().len())
    }

    pub fn set_loading(&mut self) {
        self.state = FetchState::Loading;
        self.reset_view();
    }

    pub fn set_loaded(&mut self, list: ResultList) {
        self.state = FetchState::Loaded(list);
        self.reset_view();
    }

    pub fn set_failed(&mut self, error: &CatalogError) {
        self.state = FetchState::Failed(error.summary());
        self.reset_view();
    }

    /// Drop back to idle if a fetch was queued but never ran
    pub fn cancel_loading(&mut self) {
        if self.state.is_loading() {
            self.state = FetchState::Idle;
        }
    }

    /// First page, first tile, no animation
    pub fn reset_view(&mut self) {
        self.pager.reset();
        self.transition = None;
        self.selected = 0;
    }

    /// Turn forward; returns false when the turn was refused
    pub fn next_page(&mut self, duration: Duration) -> bool {
        let Some(turn) = self.pager.next(loaded_items(&self.state)) else {
            return false;
        };
        self.start_transition(Transition::new(turn, duration));
        true
    }

    /// Turn backward; returns false when the turn was refused
    pub fn prev_page(&mut self, duration: Duration) -> bool {
        let Some(turn) = self.pager.prev(loaded_items(&self.state)) else {
            return false;
        };
        self.start_transition(Transition::new(turn, duration));
        true
    }

    fn start_transition(&mut self, transition: Transition) {
        self.transition = Some(transition);
        self.clamp_selection();
    }

    /// Finish the slide once its time is up; returns true while animating
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.transition {
            Some(t) if t.is_finished(now) => {
                self.transition = None;
                self.pager.finish_transition();
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.visible().get(self.selected)
    }

    /// Look up an item by id anywhere in the fetched list
    pub fn find(&self, id: u64) -> Option<&CatalogItem> {
        self.result_list().and_then(|list| list.find(id))
    }
}

impl SelectableList for Carousel {
    fn len(&self) -> usize {
        self.visible().len()
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, idx: usize) {
        self.selected = idx;
    }
}
