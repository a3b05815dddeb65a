//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of auth state so the theme can change
//! without touching identity data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Light or dark skin of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Skin {
    #[default]
    Light,
    Dark,
}

impl Skin {
    /// Value stored in `localStorage` and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Skin::Light => "light",
            Skin::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Skin::Light),
            "dark" => Some(Skin::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Skin::Light => Skin::Dark,
            Skin::Dark => Skin::Light,
        }
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub skin: Skin,
}
