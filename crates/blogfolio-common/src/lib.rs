pub mod config;

/// Build version: the crate version, plus `+<short commit>` when built from git.
pub const VERSION: &str = env!("BLOGFOLIO_VERSION");
