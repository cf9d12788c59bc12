//! Tests for the TUI application module

use std::collections::HashMap;
use std::sync::Mutex;

use super::*;
use crate::catalog::{CatalogError, ResultList};

/// In-memory catalog that records every request
#[derive(Default)]
struct FakeCatalog {
    sections: HashMap<Section, ResultList>,
    failing: Vec<Section>,
    searches: HashMap<(MediaKind, String), ResultList>,
    requests: Mutex<Vec<String>>,
}

impl FakeCatalog {
    fn with_all_sections(len: u64) -> Self {
        let mut fake = Self::default();
        for (i, section) in Section::all().iter().enumerate() {
            fake.sections
                .insert(*section, list(i as u64 * 1000, len));
        }
        fake
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl CatalogSource for FakeCatalog {
    fn fetch_section(&self, section: Section) -> Result<ResultList, CatalogError> {
        self.requests.lock().unwrap().push(section.slug().to_string());
        if self.failing.contains(&section) {
            return Err(CatalogError::Status {
                status: 500,
                path: section.path().to_string(),
            });
        }
        Ok(self.sections.get(&section).cloned().unwrap_or_default())
    }

    fn search(&self, kind: MediaKind, keyword: &str) -> Result<ResultList, CatalogError> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("search/{kind}?{keyword}"));
        Ok(self
            .searches
            .get(&(kind, keyword.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

fn list(first_id: u64, len: u64) -> ResultList {
    ResultList {
        page: 1,
        results: (first_id..first_id + len)
            .map(|id| CatalogItem {
                id,
                title: Some(format!("Title {id}")),
                name: None,
                poster_path: Some(format!("/{id}.jpg")),
                backdrop_path: None,
                overview: format!("Overview {id}"),
                release_date: Some("2024-01-01".to_string()),
                first_air_date: None,
                vote_average: Some(7.5),
            })
            .collect(),
        total_pages: 1,
        total_results: len as u32,
        dates: None,
    }
}

fn run_all(app: &mut App, catalog: &dyn CatalogSource) {
    let mut steps = 0;
    while app.has_background_op() {
        app.execute_background_step(catalog);
        steps += 1;
        assert!(steps < 50, "background op did not terminate");
    }
}

fn loaded_app(catalog: &FakeCatalog) -> App {
    let mut app = App::new(&ReelConfig::default());
    app.schedule_tab_load(Tab::Movies);
    run_all(&mut app, catalog);
    app
}

// ==================== Tabs ====================

#[test]
fn test_tab_cycle() {
    assert_eq!(Tab::Movies.next(), Tab::Tv);
    assert_eq!(Tab::Search.next(), Tab::Movies);
    assert_eq!(Tab::Movies.prev(), Tab::Search);
    assert_eq!(Tab::from_index(2), Some(Tab::Search));
    assert_eq!(Tab::from_index(3), None);
}

#[test]
fn test_new_app_layout() {
    let app = App::new(&ReelConfig::default());
    assert_eq!(app.movies.len(), 4);
    assert_eq!(app.tv.len(), 4);
    assert_eq!(app.search.len(), 2);
    assert_eq!(app.search[0].pager.page_size(), 8);
    assert_eq!(app.movies[0].pager.page_size(), 6);
    assert_eq!(app.transition_duration, Duration::from_millis(1000));
}

// ==================== Loading ====================

#[test]
fn test_load_tab_steps_through_sections() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = App::new(&ReelConfig::default());
    app.schedule_tab_load(Tab::Movies);

    assert!(app.movies.iter().all(|c| c.state.is_loading()));
    assert_eq!(app.loading_progress().unwrap().0, 1);

    assert!(app.execute_background_step(&catalog));
    assert!(matches!(app.movies[0].state, FetchState::Loaded(_)));
    assert!(app.movies[1].state.is_loading());

    run_all(&mut app, &catalog);
    assert!(!app.has_background_op());
    assert!(app.loading_progress().is_none());
    assert!(app.movies.iter().all(|c| c.items().len() == 25));
    assert_eq!(
        catalog.requests(),
        vec!["now-playing", "popular", "top-rated", "upcoming"]
    );
    assert!(app.status_message.is_none());
}

#[test]
fn test_failed_section_is_isolated() {
    let mut catalog = FakeCatalog::with_all_sections(25);
    catalog.failing.push(Section::PopularMovies);
    let app = loaded_app(&catalog);

    assert_eq!(app.movies[1].state, FetchState::Failed("HTTP 500".to_string()));
    assert!(matches!(app.movies[2].state, FetchState::Loaded(_)));
    let status = app.status_message.as_ref().unwrap();
    assert!(status.is_error);
    assert!(status.text.starts_with("1 of 4 lists failed"));
}

#[test]
fn test_switching_to_tv_loads_once() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);

    app.switch_tab(Tab::Tv);
    assert!(app.has_background_op());
    run_all(&mut app, &catalog);
    assert_eq!(app.tv[2].items()[0].id, 6000);

    app.switch_tab(Tab::Movies);
    assert!(!app.has_background_op());
    app.switch_tab(Tab::Tv);
    assert!(!app.has_background_op());
    assert_eq!(catalog.requests().len(), 8);
}

#[test]
fn test_interrupted_tab_load_resumes_on_next_visit() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = App::new(&ReelConfig::default());

    // Leave TV before its queued load runs
    app.switch_tab(Tab::Tv);
    app.switch_tab(Tab::Movies);
    assert!(app.tv.iter().all(|c| c.state == FetchState::Idle));
    run_all(&mut app, &catalog);
    assert!(app.movies.iter().all(|c| !c.items().is_empty()));

    app.switch_tab(Tab::Tv);
    assert!(app.has_background_op());
    run_all(&mut app, &catalog);
    assert!(app.tv.iter().all(|c| !c.items().is_empty()));
}

#[test]
fn test_partially_loaded_tab_is_reloaded() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);

    app.switch_tab(Tab::Tv);
    app.execute_background_step(&catalog);
    // Two TV rows fetched, then the search replaces the rest
    app.execute_background_step(&catalog);
    app.schedule_search("heat".to_string());
    assert!(matches!(app.tv[0].state, FetchState::Loaded(_)));
    assert_eq!(app.tv[3].state, FetchState::Idle);
    run_all(&mut app, &catalog);

    app.switch_tab(Tab::Movies);
    assert!(!app.has_background_op());
    app.switch_tab(Tab::Tv);
    assert!(app.has_background_op());
    run_all(&mut app, &catalog);
    assert!(app.tv.iter().all(|c| !c.items().is_empty()));
}

#[test]
fn test_reload_refetches_current_tab() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);
    app.reload();
    assert!(app.movies.iter().all(|c| c.state.is_loading()));
    run_all(&mut app, &catalog);
    assert_eq!(catalog.requests().len(), 8);
}

// ==================== Paging ====================

#[test]
fn test_page_turns_apply_to_focused_carousel() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);

    app.focus_next();
    app.next_page();
    assert_eq!(app.movies[1].pager.index(), 1);
    assert_eq!(app.movies[0].pager.index(), 0);

    // Locked until the slide finishes
    app.next_page();
    assert_eq!(app.movies[1].pager.index(), 1);
    assert!(app.is_animating());

    assert!(!app.tick(Instant::now() + Duration::from_secs(2)));
    assert!(!app.is_animating());
    app.next_page();
    assert_eq!(app.movies[1].pager.index(), 2);
}

#[test]
fn test_four_turns_wrap_around() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);
    app.transition_duration = Duration::ZERO;

    for _ in 0..4 {
        app.next_page();
        app.tick(Instant::now());
    }
    assert_eq!(app.movies[0].pager.index(), 0);

    app.prev_page();
    assert_eq!(app.movies[0].pager.index(), 3);
}

#[test]
fn test_focus_is_clamped() {
    let mut app = App::new(&ReelConfig::default());
    for _ in 0..10 {
        app.focus_next();
    }
    assert_eq!(app.focused, 3);
    for _ in 0..10 {
        app.focus_prev();
    }
    assert_eq!(app.focused, 0);
}

#[test]
fn test_switch_tab_resets_pagers() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);
    app.transition_duration = Duration::ZERO;
    app.next_page();
    app.focus_next();

    app.switch_tab(Tab::Search);
    assert_eq!(app.focused, 0);
    assert_eq!(app.movies[0].pager.index(), 0);
    assert!(!app.movies[0].pager.is_leaving());
}

// ==================== Hero & Detail ====================

#[test]
fn test_hero_is_first_item_of_first_section() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);
    assert_eq!(app.hero().unwrap().id, 0);
    // The hero never appears in a carousel window
    assert!(app.movies[0].visible().iter().all(|i| i.id != 0));

    app.switch_tab(Tab::Search);
    assert!(app.hero().is_none());
}

#[test]
fn test_detail_overlay_tracks_selected_tile() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);

    app.focus_next();
    app.select_next_tile();
    app.select_next_tile();
    app.open_detail();

    let target = app.detail.unwrap();
    assert_eq!(target.carousel, 1);
    let item = app.detail_item().unwrap();
    assert_eq!(item.id, 1003);
    assert_eq!(app.detail_kind(), Some(MediaKind::Movie));

    app.close_detail();
    assert!(app.detail_item().is_none());
}

#[test]
fn test_hero_detail() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);
    app.open_hero_detail();
    assert_eq!(app.detail_item().unwrap().id, 0);
}

#[test]
fn test_detail_needs_loaded_items() {
    let mut app = App::new(&ReelConfig::default());
    app.open_detail();
    assert!(app.detail.is_none());
}

#[test]
fn test_reload_closes_detail() {
    let catalog = FakeCatalog::with_all_sections(25);
    let mut app = loaded_app(&catalog);
    app.open_detail();
    assert!(app.detail.is_some());
    app.reload();
    assert!(app.detail.is_none());
}

// ==================== Search ====================

#[test]
fn test_search_input_editing() {
    let mut app = App::new(&ReelConfig::default());
    app.enter_search();
    assert_eq!(app.input_mode, InputMode::Search);
    for c in "dunee".chars() {
        app.search_push(c);
    }
    app.search_pop();
    assert_eq!(app.search_input, "dune");

    app.exit_search();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.search_input.is_empty());
}

#[test]
fn test_submit_search_fetches_both_kinds() {
    let mut catalog = FakeCatalog::default();
    catalog
        .searches
        .insert((MediaKind::Movie, "dune".to_string()), list(10, 12));
    catalog
        .searches
        .insert((MediaKind::Tv, "dune".to_string()), list(50, 3));

    let mut app = App::new(&ReelConfig::default());
    app.enter_search();
    for c in "  dune ".chars() {
        app.search_push(c);
    }
    app.submit_search();

    assert_eq!(app.tab, Tab::Search);
    assert_eq!(app.last_keyword.as_deref(), Some("dune"));
    run_all(&mut app, &catalog);

    assert_eq!(catalog.requests(), vec!["search/movie?dune", "search/tv?dune"]);
    assert_eq!(app.search[0].items().len(), 12);
    assert_eq!(app.search[1].items().len(), 3);
    assert_eq!(app.status_message.as_ref().unwrap().text, "15 results for \"dune\"");

    // Each row pages on its own
    app.transition_duration = Duration::ZERO;
    app.next_page();
    assert_eq!(app.search[0].pager.index(), 0); // 11 paged items: one page of 8
    app.focus_next();
    app.next_page();
    assert_eq!(app.search[1].pager.index(), 0);
}

#[test]
fn test_empty_search_is_rejected() {
    let mut app = App::new(&ReelConfig::default());
    app.enter_search();
    app.search_push(' ');
    app.submit_search();
    assert!(!app.has_background_op());
    assert!(app.status_message.as_ref().unwrap().is_error);
    assert_eq!(app.tab, Tab::Movies);
}

#[test]
fn test_enter_search_prefills_last_keyword() {
    let mut app = App::new(&ReelConfig::default());
    app.schedule_search("alien".to_string());
    app.enter_search();
    assert_eq!(app.search_input, "alien");
}

#[test]
fn test_reload_search_without_keyword() {
    let mut app = App::new(&ReelConfig::default());
    app.switch_tab(Tab::Search);
    app.reload();
    assert!(!app.has_background_op());
    assert!(app.status_message.is_some());
}

// ==================== Misc ====================

#[test]
fn test_cycle_theme_sets_status() {
    let mut app = App::new(&ReelConfig::default());
    app.cycle_theme();
    assert_eq!(app.theme().name, "Dracula");
    assert_eq!(app.status_message.as_ref().unwrap().text, "Theme: Dracula");
}

#[test]
fn test_quit() {
    let mut app = App::new(&ReelConfig::default());
    assert!(app.running);
    app.quit();
    assert!(!app.running);
}
