use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The number of repositories shown before the visitor asks for all of them.
pub const DEFAULT_VISIBLE_REPOSITORIES: u16 = 6;

/// The color theme of the page.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background with green accents.
    #[default]
    Dark,

    /// Light background with green accents.
    Light,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Retrieves the color palette of the theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                bg_primary: "#0F172A",
                bg_secondary: "#1E293B",
                bg_card: "#1E293B",
                text_primary: "#F1F5F9",
                text_secondary: "#94A3B8",
                accent: "#2ECC71",
                accent_hover: "#27AE60",
                border: "#334155",
                glow: "rgba(46, 204, 113, 0.3)",
            },
            Theme::Light => Palette {
                bg_primary: "#F8FAFC",
                bg_secondary: "#FFFFFF",
                bg_card: "#FFFFFF",
                text_primary: "#0F172A",
                text_secondary: "#475569",
                accent: "#27AE60",
                accent_hover: "#2ECC71",
                border: "#E2E8F0",
                glow: "rgba(39, 174, 96, 0.2)",
            },
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// The colors used to style a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub bg_primary: &'static str,
    /// Sidebar background.
    pub bg_secondary: &'static str,
    /// Card background.
    pub bg_card: &'static str,
    /// Headings and body text.
    pub text_primary: &'static str,
    /// Muted text.
    pub text_secondary: &'static str,
    /// Links, buttons and highlights.
    pub accent: &'static str,
    /// Accent color on hover.
    pub accent_hover: &'static str,
    /// Card and input borders.
    pub border: &'static str,
    /// Shadow color around hovered cards.
    pub glow: &'static str,
}

/// The visitor's session state.
///
/// It lives in the query string of the page, so each request carries it explicitly into the
/// render cycle.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct UiState {
    /// Whether every repository is shown instead of the first few.
    pub show_all: bool,

    /// The color theme.
    pub theme: Theme,
}

impl UiState {
    /// The page limit passed to the fetcher for this state.
    pub fn page_limit(&self) -> Option<u16> {
        if self.show_all {
            None
        } else {
            Some(DEFAULT_VISIBLE_REPOSITORIES)
        }
    }

    /// Returns the state with the "show all repositories" flag flipped.
    pub fn toggle_projects(self) -> Self {
        Self {
            show_all: !self.show_all,
            ..self
        }
    }

    /// Returns the state with the theme flipped.
    pub fn toggle_theme(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    /// Encodes the state as a query string for the page URL.
    pub fn to_query(&self) -> String {
        format!("show_all={}&theme={}", self.show_all, self.theme)
    }
}
