//! Catalog commands
//!
//! One-shot versions of what the browser shows: a single carousel page, or
//! the search rows for a keyword.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{CatalogItem, CatalogSource, ResultList, Section};
use crate::cli::SearchKind;
use crate::pager;

/// One page of a section, resolved against the fetched list
#[derive(Debug)]
pub struct ListPage {
    pub items: Vec<CatalogItem>,
    pub page: usize,
    pub page_count: usize,
    pub hero: Option<CatalogItem>,
}

/// Fetch a section and cut out page `page` (1-based) the way a carousel would
pub fn list_page(
    catalog: &dyn CatalogSource,
    section: Section,
    page: usize,
    page_size: usize,
) -> Result<ListPage> {
    if page_size == 0 {
        bail!("Page size must be at least 1");
    }
    if page == 0 {
        bail!("Pages are numbered from 1");
    }

    let list = catalog
        .fetch_section(section)
        .with_context(|| format!("Failed to fetch {}", section.slug()))?;

    let page_count = pager::page_count(list.len(), page_size);
    if page > page_count {
        bail!(
            "Page {} is out of range: {} has {} page{} of {}",
            page,
            section.slug(),
            page_count,
            if page_count == 1 { "" } else { "s" },
            page_size
        );
    }

    Ok(ListPage {
        items: pager::window(&list.results, page - 1, page_size).to_vec(),
        page,
        page_count,
        hero: list.hero().cloned(),
    })
}

/// Print one carousel page
pub fn cmd_list(
    catalog: &dyn CatalogSource,
    section: Section,
    page: usize,
    page_size: usize,
) -> Result<()> {
    let spinner = spinner(format!("Fetching {}...", section.slug()));
    let result = list_page(catalog, section, page, page_size);
    spinner.finish_and_clear();
    let list = result?;

    println!(
        "{} {}",
        section.title().bold(),
        format!("(page {}/{})", list.page, list.page_count).dimmed()
    );
    if let Some(hero) = &list.hero {
        println!("  Featured: {}", hero.title().cyan());
    }
    println!();

    if list.items.is_empty() {
        println!("  No results.");
        return Ok(());
    }

    println!("{}", items_table(&list.items));
    Ok(())
}

/// Print the search rows for a keyword
pub fn cmd_search(catalog: &dyn CatalogSource, keyword: &str, kind: SearchKind) -> Result<()> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        println!("{} Nothing to search for", "!".yellow());
        return Ok(());
    }

    for &media in kind.kinds() {
        let spinner = spinner(format!("Searching {} for \"{}\"...", media.label(), keyword));
        let result = catalog.search(media, keyword);
        spinner.finish_and_clear();
        let list: ResultList =
            result.with_context(|| format!("Search failed for \"{keyword}\""))?;

        println!(
            "{} {}",
            media.label().bold(),
            format!("({} of {} results)", list.len(), list.total_results).dimmed()
        );
        if list.is_empty() {
            println!("  No results.");
        } else {
            println!("{}", items_table(&list.results));
        }
        println!();
    }

    Ok(())
}

fn items_table(items: &[CatalogItem]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Title", "Year", "Rating"]);

    for item in items {
        table.add_row(vec![
            item.id.to_string(),
            item.title().to_string(),
            item.year().unwrap_or("-").to_string(),
            item.vote_average
                .filter(|v| *v > 0.0)
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}

fn spinner(message: String) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        sp.set_style(style);
    }
    sp.set_message(message);
    sp.enable_steady_tick(std::time::Duration::from_millis(80));
    sp
}
