use blogfolio_store::{keys, KvStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle: it advertises the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// Saved preference, light when unset or unrecognised.
    pub fn load(store: &dyn KvStore) -> Theme {
        store
            .get(keys::THEME)
            .and_then(|s| Theme::parse(&s))
            .unwrap_or(Theme::Light)
    }
}

/// The theme switch control in the page header.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    current: Theme,
}

impl ThemeToggle {
    pub fn load(store: &dyn KvStore) -> Self {
        Self {
            current: Theme::load(store),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn icon(&self) -> &'static str {
        self.current.icon()
    }

    /// Flip the theme and persist the new preference.
    pub fn click(&mut self, store: &mut dyn KvStore) -> Theme {
        self.current = self.current.toggled();
        store.set(keys::THEME, self.current.as_str());
        tracing::debug!("theme switched to {}", self.current.as_str());
        self.current
    }
}
