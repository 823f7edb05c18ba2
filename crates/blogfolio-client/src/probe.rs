//! Environment probes feeding the visitor fingerprint.

use blogfolio_counter::FingerprintSignals;
use std::collections::HashMap;

pub trait Probe: Send + Sync {
    fn key(&self) -> &str;
    fn collect(&self) -> Option<String>;
}

pub struct ProbeSet {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeSet {
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    pub fn add(&mut self, probe: Box<dyn Probe>) {
        self.probes.push(probe);
    }

    pub fn collect_all(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for probe in &self.probes {
            if let Some(value) = probe.collect() {
                map.insert(probe.key().to_string(), value);
            }
        }
        map
    }
}

pub fn default_probes() -> ProbeSet {
    let mut set = ProbeSet::new();
    set.add(Box::new(UserAgentProbe));
    set.add(Box::new(LanguageProbe));
    set.add(Box::new(ScreenProbe));
    set.add(Box::new(TimezoneProbe));
    set.add(Box::new(RenderProbe));
    set
}

pub struct UserAgentProbe;
impl Probe for UserAgentProbe {
    fn key(&self) -> &str { "user_agent" }
    fn collect(&self) -> Option<String> {
        Some(format!(
            "blogfolio/{} ({}; {})",
            blogfolio_common::VERSION,
            std::env::consts::OS,
            std::env::consts::ARCH
        ))
    }
}

pub struct LanguageProbe;
impl Probe for LanguageProbe {
    fn key(&self) -> &str { "language" }
    fn collect(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| locale_to_language_tag(&value))
    }
}

pub struct ScreenProbe;
impl Probe for ScreenProbe {
    fn key(&self) -> &str { "screen" }
    fn collect(&self) -> Option<String> {
        terminal_size().map(|(rows, cols)| format!("{}x{}", cols, rows))
    }
}

pub struct TimezoneProbe;
impl Probe for TimezoneProbe {
    fn key(&self) -> &str { "timezone_offset" }
    fn collect(&self) -> Option<String> {
        let east_secs = chrono::Local::now().offset().local_minus_utc();
        // Minutes west of UTC, like getTimezoneOffset().
        Some((-east_secs / 60).to_string())
    }
}

/// Stands in for a rendered-graphic checksum: how the terminal renders text.
pub struct RenderProbe;
impl Probe for RenderProbe {
    fn key(&self) -> &str { "render" }
    fn collect(&self) -> Option<String> {
        let term = std::env::var("TERM").unwrap_or_default();
        let colorterm = std::env::var("COLORTERM").unwrap_or_default();
        if term.is_empty() && colorterm.is_empty() {
            return None;
        }
        Some(format!("{}/{}", term, colorterm))
    }
}

/// `en_US.UTF-8` -> `en-US`. `C` and `POSIX` carry no language.
pub fn locale_to_language_tag(locale: &str) -> Option<String> {
    let base = locale.split(['.', '@']).next().unwrap_or_default();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Build fingerprint signals from probe output, defaulting what is missing.
pub fn signals_from(values: &HashMap<String, String>) -> FingerprintSignals {
    let get = |key: &str| values.get(key).cloned();
    let (screen_width, screen_height) = get("screen")
        .and_then(|s| {
            let (w, h) = s.split_once('x')?;
            Some((w.parse().ok()?, h.parse().ok()?))
        })
        .unwrap_or((80, 24));

    FingerprintSignals {
        user_agent: get("user_agent").unwrap_or_else(|| "blogfolio".to_string()),
        language: get("language").unwrap_or_else(|| "en-US".to_string()),
        screen_width,
        screen_height,
        timezone_offset_minutes: get("timezone_offset")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0),
        render_checksum: get("render").unwrap_or_default(),
    }
}

/// `(rows, cols)` of the controlling terminal, if stdout is one.
pub fn terminal_size() -> Option<(u16, u16)> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let ret = unsafe { libc::ioctl(1, libc::TIOCGWINSZ, &mut ws) };
    if ret == 0 && ws.ws_col > 0 {
        Some((ws.ws_row, ws.ws_col))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Option<&'static str>);
    impl Probe for Fixed {
        fn key(&self) -> &str { self.0 }
        fn collect(&self) -> Option<String> { self.1.map(|s| s.to_string()) }
    }

    #[test]
    fn test_probe_set_skips_missing() {
        let mut set = ProbeSet::new();
        set.add(Box::new(Fixed("language", Some("de-DE"))));
        set.add(Box::new(Fixed("screen", None)));
        let values = set.collect_all();
        assert_eq!(values.len(), 1);
        assert_eq!(values["language"], "de-DE");
    }

    #[test]
    fn test_locale_to_language_tag() {
        assert_eq!(locale_to_language_tag("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(locale_to_language_tag("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(locale_to_language_tag("fr").as_deref(), Some("fr"));
        assert_eq!(locale_to_language_tag("C"), None);
        assert_eq!(locale_to_language_tag("POSIX.UTF-8"), None);
    }

    #[test]
    fn test_signals_defaults() {
        let signals = signals_from(&HashMap::new());
        assert_eq!(signals.language, "en-US");
        assert_eq!((signals.screen_width, signals.screen_height), (80, 24));
        assert_eq!(signals.timezone_offset_minutes, 0);
    }

    #[test]
    fn test_signals_from_values() {
        let mut values = HashMap::new();
        values.insert("screen".to_string(), "132x43".to_string());
        values.insert("timezone_offset".to_string(), "-120".to_string());
        values.insert("render".to_string(), "xterm-256color/truecolor".to_string());
        let signals = signals_from(&values);
        assert_eq!((signals.screen_width, signals.screen_height), (132, 43));
        assert_eq!(signals.timezone_offset_minutes, -120);
        assert_eq!(signals.render_checksum, "xterm-256color/truecolor");
    }

    #[test]
    fn test_malformed_screen_falls_back() {
        let mut values = HashMap::new();
        values.insert("screen".to_string(), "wide".to_string());
        let signals = signals_from(&values);
        assert_eq!((signals.screen_width, signals.screen_height), (80, 24));
    }

    #[test]
    fn test_user_agent_names_version() {
        let ua = UserAgentProbe.collect().unwrap();
        assert!(ua.starts_with("blogfolio/"));
        assert!(ua.contains(std::env::consts::OS));
    }
}
