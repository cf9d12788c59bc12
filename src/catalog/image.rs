//! Image CDN URLs
//!
//! TMDB returns image paths like `/abc.jpg`; the full URL is
//! `{image_base}/{size}/abc.jpg`.

use std::fmt;

/// Rendition width requested from the CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    W200,
    W300,
    /// Carousel tiles and the detail backdrop
    W500,
    W780,
    #[default]
    Original,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::W200 => "w200",
            ImageFormat::W300 => "w300",
            ImageFormat::W500 => "w500",
            ImageFormat::W780 => "w780",
            ImageFormat::Original => "original",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a CDN URL for an image path
pub fn image_url(base: &str, path: &str, format: ImageFormat) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        format,
        path.trim_start_matches('/')
    )
}

/// Like [`image_url`], but `None` when the item has no image
pub fn optional_image_url(base: &str, path: Option<&str>, format: ImageFormat) -> Option<String> {
    path.filter(|p| !p.trim().is_empty())
        .map(|p| image_url(base, p, format))
}
