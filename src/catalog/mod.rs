//! Catalog data model
//!
//! Types mirror the TMDB v3 list responses. Movies carry `title` and
//! `release_date`, shows carry `name` and `first_air_date`; [`CatalogItem`]
//! accepts either and exposes one accessor for each.

mod client;
pub mod image;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use client::{CatalogError, CatalogSource, TmdbClient, endpoint_url, search_url};

/// Movie or TV show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the API
    pub fn path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Movie => "Movies",
            MediaKind::Tv => "TV",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One list query family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    NowPlaying,
    PopularMovies,
    TopRatedMovies,
    Upcoming,
    TopRatedTv,
    AiringToday,
    OnTheAir,
    PopularTv,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::NowPlaying,
            Section::PopularMovies,
            Section::TopRatedMovies,
            Section::Upcoming,
            Section::TopRatedTv,
            Section::AiringToday,
            Section::OnTheAir,
            Section::PopularTv,
        ]
    }

    /// Sections listed for one kind, in display order
    pub fn for_kind(kind: MediaKind) -> Vec<Section> {
        Self::all()
            .iter()
            .copied()
            .filter(|s| s.kind() == kind)
            .collect()
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Section::NowPlaying
            | Section::PopularMovies
            | Section::TopRatedMovies
            | Section::Upcoming => MediaKind::Movie,
            Section::TopRatedTv | Section::AiringToday | Section::OnTheAir | Section::PopularTv => {
                MediaKind::Tv
            }
        }
    }

    /// API path relative to the base URL, e.g. `movie/now_playing`
    pub fn path(&self) -> &'static str {
        match self {
            Section::NowPlaying => "movie/now_playing",
            Section::PopularMovies => "movie/popular",
            Section::TopRatedMovies => "movie/top_rated",
            Section::Upcoming => "movie/upcoming",
            Section::TopRatedTv => "tv/top_rated",
            Section::AiringToday => "tv/airing_today",
            Section::OnTheAir => "tv/on_the_air",
            Section::PopularTv => "tv/popular",
        }
    }

    /// Carousel heading
    pub fn title(&self) -> &'static str {
        match self {
            Section::NowPlaying => "NOW PLAYING",
            Section::PopularMovies => "POPULAR",
            Section::TopRatedMovies => "TOP RATED",
            Section::Upcoming => "UPCOMING",
            Section::TopRatedTv => "TOP RATED",
            Section::AiringToday => "AIRING TODAY",
            Section::OnTheAir => "ON THE AIR",
            Section::PopularTv => "POPULAR",
        }
    }

    /// Short CLI name, e.g. `now-playing` or `tv-popular`
    pub fn slug(&self) -> &'static str {
        match self {
            Section::NowPlaying => "now-playing",
            Section::PopularMovies => "popular",
            Section::TopRatedMovies => "top-rated",
            Section::Upcoming => "upcoming",
            Section::TopRatedTv => "tv-top-rated",
            Section::AiringToday => "airing-today",
            Section::OnTheAir => "on-the-air",
            Section::PopularTv => "tv-popular",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Section> {
        let slug = slug.trim().to_lowercase().replace('_', "-");
        Self::all().iter().copied().find(|s| s.slug() == slug)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A movie or show record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl CatalogItem {
    /// Display title, whichever field the API filled in
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
    }

    /// Release or first-air date, if known
    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .filter(|d| !d.is_empty())
    }

    /// Four-digit year from the date
    pub fn year(&self) -> Option<&str> {
        self.date().and_then(|d| d.get(..4))
    }
}

/// Date range attached to now-playing and upcoming lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub minimum: String,
    pub maximum: String,
}

/// One page of API results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultList {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<CatalogItem>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<DateRange>,
}

impl ResultList {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The featured item shown above the carousels
    pub fn hero(&self) -> Option<&CatalogItem> {
        self.results.first()
    }

    pub fn find(&self, id: u64) -> Option<&CatalogItem> {
        self.results.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_PLAYING: &str = r#"{
        "dates": {"maximum": "2024-05-01", "minimum": "2024-03-14"},
        "page": 1,
        "results": [
            {"id": 1, "title": "Dune: Part Two", "poster_path": "/p1.jpg",
             "backdrop_path": "/b1.jpg", "overview": "Paul unites.", "release_date": "2024-02-27",
             "vote_average": 8.2, "adult": false},
            {"id": 2, "title": "Civil War", "poster_path": null, "backdrop_path": null,
             "overview": "", "release_date": "2024-04-10"}
        ],
        "total_pages": 10,
        "total_results": 200
    }"#;

    const ON_THE_AIR: &str = r#"{
        "page": 1,
        "results": [
            {"id": 7, "name": "Shogun", "poster_path": "/s.jpg", "backdrop_path": "/sb.jpg",
             "overview": "Feudal Japan.", "first_air_date": "2024-02-27", "origin_country": ["US"]}
        ],
        "total_pages": 1,
        "total_results": 1
    }"#;

    #[test]
    fn test_decode_movie_list() {
        let list: ResultList = serde_json::from_str(NOW_PLAYING).unwrap();
        assert_eq!(list.page, 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.total_results, 200);
        assert_eq!(list.dates.as_ref().unwrap().maximum, "2024-05-01");

        let first = &list.results[0];
        assert_eq!(first.title(), "Dune: Part Two");
        assert_eq!(first.year(), Some("2024"));
        assert_eq!(first.vote_average, Some(8.2));

        let second = &list.results[1];
        assert!(second.poster_path.is_none());
        assert!(second.overview.is_empty());
    }

    #[test]
    fn test_decode_tv_list() {
        let list: ResultList = serde_json::from_str(ON_THE_AIR).unwrap();
        assert!(list.dates.is_none());
        let show = list.hero().unwrap();
        assert_eq!(show.title(), "Shogun");
        assert_eq!(show.date(), Some("2024-02-27"));
        assert_eq!(list.find(7).map(|i| i.id), Some(7));
        assert!(list.find(8).is_none());
    }

    #[test]
    fn test_untitled_fallback() {
        let item: CatalogItem = serde_json::from_str(r#"{"id": 3, "title": ""}"#).unwrap();
        assert_eq!(item.title(), "Untitled");
        assert!(item.date().is_none());
        assert!(item.year().is_none());
    }

    #[test]
    fn test_sections_by_kind() {
        let movies = Section::for_kind(MediaKind::Movie);
        assert_eq!(
            movies,
            vec![
                Section::NowPlaying,
                Section::PopularMovies,
                Section::TopRatedMovies,
                Section::Upcoming
            ]
        );
        let tv = Section::for_kind(MediaKind::Tv);
        assert_eq!(tv.len(), 4);
        assert!(tv.iter().all(|s| s.path().starts_with("tv/")));
    }

    #[test]
    fn test_section_slugs() {
        for section in Section::all() {
            assert_eq!(Section::from_slug(section.slug()), Some(*section));
        }
        assert_eq!(Section::from_slug("ON_THE_AIR"), Some(Section::OnTheAir));
        assert_eq!(Section::from_slug("trending"), None);
    }
}
