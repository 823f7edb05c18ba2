pub mod caret;
pub mod command;
pub mod content;
pub mod history;
pub mod scrollback;
pub mod terminal;

pub use command::{Command, UnknownCommand};
pub use scrollback::{Line, LineStyle, Scrollback};
pub use terminal::{SubmitOutcome, Terminal, TerminalState};
