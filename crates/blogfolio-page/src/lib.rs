pub mod chrome;
pub mod context;
pub mod theme;

pub use context::{CounterDisplay, PageContext};
pub use theme::{Theme, ThemeToggle};
