//! Storage keys shared by the page chrome, the visitor counter and the terminal.

/// `light` | `dark`.
pub const THEME: &str = "theme";
/// Stringified non-negative integer.
pub const VIEW_COUNT: &str = "blogfolio-view-count";
/// JSON array of fingerprint strings.
pub const VISITORS: &str = "blogfolio-visitors";
/// Locale date string, written once.
pub const FIRST_VISIT: &str = "blogfolio-first-visit";
/// Session store only: fingerprint of the visitor resolved in this session.
pub const CURRENT_SESSION: &str = "blogfolio-current-session";
