//! reelview - a terminal movie and TV catalog browser
//!
//! Catalog lists come from the TMDB v3 API and are shown as paginated,
//! animated carousels. The library target holds everything but the CLI
//! entry point so the pager, client and app state can be tested directly.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod http;
pub mod logging;
pub mod pager;
pub mod tui;

pub use catalog::{CatalogError, CatalogItem, CatalogSource, MediaKind, ResultList, Section, TmdbClient};
pub use config::ReelConfig;
pub use pager::{PageTurn, Pager, TurnDirection};
