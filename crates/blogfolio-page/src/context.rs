use blogfolio_store::{KvStore, MemoryStore};

use crate::theme::ThemeToggle;

/// The always-visible view counter element.
#[derive(Debug, Clone, Default)]
pub struct CounterDisplay {
    text: String,
}

impl CounterDisplay {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Everything the page components touch: the persistent store, the
/// session-scoped store, the header's theme control and the counter element.
pub struct PageContext {
    pub local: Box<dyn KvStore>,
    pub session: Box<dyn KvStore>,
    /// `None` when the page has no theme switch.
    pub theme: Option<ThemeToggle>,
    pub counter: CounterDisplay,
}

impl PageContext {
    /// Build a context; the theme control is initialised from the saved preference.
    pub fn new(local: Box<dyn KvStore>, session: Box<dyn KvStore>) -> Self {
        let theme = Some(ThemeToggle::load(local.as_ref()));
        Self {
            local,
            session,
            theme,
            counter: CounterDisplay::default(),
        }
    }

    /// In-memory stores, for tests and throwaway sessions.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
    }

    pub fn without_theme_toggle(mut self) -> Self {
        self.theme = None;
        self
    }

    /// Simulate a fresh browser session over the same persistent store.
    pub fn new_session(&mut self, session: Box<dyn KvStore>) {
        self.session = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use blogfolio_store::keys;

    #[test]
    fn test_theme_control_reads_saved_preference() {
        let mut local = MemoryStore::new();
        local.set(keys::THEME, "dark");
        let ctx = PageContext::new(Box::new(local), Box::new(MemoryStore::new()));
        assert_eq!(ctx.theme.as_ref().map(|t| t.current()), Some(Theme::Dark));
    }

    #[test]
    fn test_new_session_keeps_local_store() {
        let mut ctx = PageContext::in_memory();
        ctx.local.set(keys::VIEW_COUNT, "1");
        ctx.session.set(keys::CURRENT_SESSION, "abc");

        ctx.new_session(Box::new(MemoryStore::new()));
        assert_eq!(ctx.local.get(keys::VIEW_COUNT).as_deref(), Some("1"));
        assert_eq!(ctx.session.get(keys::CURRENT_SESSION), None);
    }

    #[test]
    fn test_without_theme_toggle() {
        let ctx = PageContext::in_memory().without_theme_toggle();
        assert!(ctx.theme.is_none());
    }
}
