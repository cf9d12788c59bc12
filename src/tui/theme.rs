//! Theme support for the TUI
//!
//! A handful of well-known palettes, selected in the config file and cycled
//! at runtime with `t`.

use ratatui::style::Color;

use crate::config::TuiTheme;

/// Colors by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub base: Color,    // Background
    pub surface: Color, // Selected tile, hero panel
    pub border: Color,  // Unfocused borders
    pub text: Color,
    pub dim: Color,    // Overviews, hints
    pub accent: Color, // Focused carousel, tab highlight
    pub title: Color,  // App and overlay titles
    pub rating: Color, // Vote averages
    pub date: Color,
    pub error: Color,
}

/// Available theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    CatppuccinMocha,
    Dracula,
    Nord,
    Gruvbox,
}

impl ThemeVariant {
    pub fn theme(&self) -> Theme {
        match self {
            Self::CatppuccinMocha => CATPPUCCIN_MOCHA,
            Self::Dracula => DRACULA,
            Self::Nord => NORD,
            Self::Gruvbox => GRUVBOX,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::CatppuccinMocha => Self::Dracula,
            Self::Dracula => Self::Nord,
            Self::Nord => Self::Gruvbox,
            Self::Gruvbox => Self::CatppuccinMocha,
        }
    }

    pub fn from_config_theme(theme: TuiTheme) -> Self {
        match theme {
            TuiTheme::CatppuccinMocha => Self::CatppuccinMocha,
            TuiTheme::Dracula => Self::Dracula,
            TuiTheme::Nord => Self::Nord,
            TuiTheme::Gruvbox => Self::Gruvbox,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.theme().name
    }
}

pub const CATPPUCCIN_MOCHA: Theme = Theme {
    name: "Catppuccin Mocha",
    base: Color::Rgb(30, 30, 46),
    surface: Color::Rgb(49, 50, 68),
    border: Color::Rgb(69, 71, 90),
    text: Color::Rgb(205, 214, 244),
    dim: Color::Rgb(166, 173, 200),
    accent: Color::Rgb(137, 180, 250),
    title: Color::Rgb(203, 166, 247),
    rating: Color::Rgb(249, 226, 175),
    date: Color::Rgb(250, 179, 135),
    error: Color::Rgb(243, 139, 168),
};

pub const DRACULA: Theme = Theme {
    name: "Dracula",
    base: Color::Rgb(40, 42, 54),
    surface: Color::Rgb(68, 71, 90),
    border: Color::Rgb(98, 114, 164),
    text: Color::Rgb(248, 248, 242),
    dim: Color::Rgb(189, 147, 249),
    accent: Color::Rgb(139, 233, 253),
    title: Color::Rgb(255, 121, 198),
    rating: Color::Rgb(241, 250, 140),
    date: Color::Rgb(255, 184, 108),
    error: Color::Rgb(255, 85, 85),
};

pub const NORD: Theme = Theme {
    name: "Nord",
    base: Color::Rgb(46, 52, 64),
    surface: Color::Rgb(59, 66, 82),
    border: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    dim: Color::Rgb(216, 222, 233),
    accent: Color::Rgb(136, 192, 208),
    title: Color::Rgb(180, 142, 173),
    rating: Color::Rgb(235, 203, 139),
    date: Color::Rgb(208, 135, 112),
    error: Color::Rgb(191, 97, 106),
};

pub const GRUVBOX: Theme = Theme {
    name: "Gruvbox",
    base: Color::Rgb(40, 40, 40),
    surface: Color::Rgb(60, 56, 54),
    border: Color::Rgb(80, 73, 69),
    text: Color::Rgb(235, 219, 178),
    dim: Color::Rgb(189, 174, 147),
    accent: Color::Rgb(131, 165, 152),
    title: Color::Rgb(211, 134, 155),
    rating: Color::Rgb(250, 189, 47),
    date: Color::Rgb(254, 128, 25),
    error: Color::Rgb(251, 73, 52),
};
