use blogfolio_common::config::ProfileConfig;
use blogfolio_counter::format_view_count;
use blogfolio_counter::registry;
use blogfolio_page::PageContext;
use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::command::{Command, UnknownCommand};
use crate::content::{self, Block};
use crate::history::CommandHistory;
use crate::scrollback::{Line, LineStyle, Scrollback};

/// Number of entries `history` shows.
pub const HISTORY_SHOWN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    Idle,
    Executing,
    /// Input disabled until the page is reloaded.
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input is disabled; nothing happened.
    Rejected,
    /// Blank line; only the input was cleared.
    Empty,
    Executed(Command),
    NotFound(UnknownCommand),
}

/// The single-line input control.
#[derive(Debug, Default, Clone)]
pub struct InputLine {
    value: String,
    disabled: bool,
}

impl InputLine {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        if !self.disabled {
            self.value = value.into();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// The simulated command terminal.
///
/// Owns the page context so commands can read and reset the visitor registry
/// and click the theme switch. Joke selection draws from `rng`.
pub struct Terminal<R: Rng> {
    ctx: PageContext,
    profile: ProfileConfig,
    rng: R,
    clock: fn() -> DateTime<Local>,
    scrollback: Scrollback,
    history: CommandHistory,
    input: InputLine,
    state: TerminalState,
    scroll_requested: bool,
}

impl<R: Rng> Terminal<R> {
    pub fn new(ctx: PageContext, profile: ProfileConfig, rng: R) -> Self {
        let prompt = prompt_for(&profile);
        Self {
            ctx,
            profile,
            rng,
            clock: Local::now,
            scrollback: Scrollback::welcome(&prompt),
            history: CommandHistory::default(),
            input: InputLine::default(),
            state: TerminalState::Idle,
            scroll_requested: false,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    pub fn prompt(&self) -> String {
        prompt_for(&self.profile)
    }

    pub fn state(&self) -> TerminalState {
        self.state
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut PageContext {
        &mut self.ctx
    }

    /// Whether the view should jump to the end; cleared by reading it.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    /// Submit whatever is in the input control (the Enter key).
    pub fn press_enter(&mut self) -> SubmitOutcome {
        let line = self.input.value().to_string();
        self.submit(&line)
    }

    /// Run one line of user input.
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        if self.input.is_disabled() {
            tracing::debug!("input disabled, ignoring {:?}", line);
            return SubmitOutcome::Rejected;
        }

        let outcome = match Command::parse_line(line.trim()) {
            None => SubmitOutcome::Empty,
            Some(parsed) => {
                let prompt = self.prompt();
                self.push(LineStyle::Prompt, format!("{} {}", prompt, line.trim()));
                self.history.push(line);

                match parsed {
                    Ok(cmd) => {
                        tracing::debug!("dispatching {}", cmd.name());
                        self.state = TerminalState::Executing;
                        self.execute(&cmd);
                        if self.state == TerminalState::Executing {
                            self.state = TerminalState::Idle;
                        }
                        SubmitOutcome::Executed(cmd)
                    }
                    Err(unknown) => {
                        tracing::debug!("unknown command {:?}", unknown.0);
                        self.push(LineStyle::Error, unknown.to_string());
                        self.push(
                            LineStyle::Info,
                            "💡 Tip: Type 'whatnow' to see all available commands",
                        );
                        SubmitOutcome::NotFound(unknown)
                    }
                }
            }
        };

        self.input.clear();
        self.scroll_requested = true;
        outcome
    }

    fn push(&mut self, style: LineStyle, text: impl Into<String>) {
        self.scrollback.push(Line::new(style, text));
    }

    fn push_block(&mut self, block: &Block) {
        self.push(LineStyle::Info, block.title);
        for line in block.lines {
            self.push(LineStyle::Output, *line);
        }
    }

    fn execute(&mut self, cmd: &Command) {
        match cmd {
            Command::WhatNow => self.show_help(),
            Command::About => self.push_block(&content::ABOUT),
            Command::Skills => self.push_block(&content::SKILLS),
            Command::Projects => self.push_block(&content::PROJECTS),
            Command::Contact => self.push_block(&content::CONTACT),
            Command::Social => self.push_block(&content::SOCIAL),
            Command::Resume => self.push_block(&content::RESUME),
            Command::Version => self.push_block(&content::VERSION),
            Command::Clear => {
                let prompt = self.prompt();
                self.scrollback.replace_with_welcome(&prompt);
                self.push(LineStyle::Info, "✨ Terminal cleared successfully!");
            }
            Command::Date => {
                let now = (self.clock)();
                self.push(
                    LineStyle::Output,
                    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
                );
            }
            Command::WhoAmI => {
                let user = self.profile.user.clone();
                self.push(LineStyle::Output, user);
            }
            Command::Ls => {
                self.push(LineStyle::Info, "Files in current directory:");
                for (name, _) in content::FILES {
                    self.push(LineStyle::Output, *name);
                }
            }
            Command::Cat(None) => self.push(LineStyle::Error, "Usage: cat [filename]"),
            Command::Cat(Some(name)) => match content::file(name) {
                Some(text) => self.push(LineStyle::Output, text),
                None => self.push(
                    LineStyle::Error,
                    format!("cat: {}: No such file or directory", name),
                ),
            },
            Command::Echo(words) => self.push(LineStyle::Output, words.join(" ")),
            Command::Pwd => {
                let cwd = self.profile.cwd.clone();
                self.push(LineStyle::Output, cwd);
            }
            Command::Theme => self.toggle_theme(),
            Command::Jokes => {
                let joke = content::JOKES.choose(&mut self.rng).copied().unwrap_or_default();
                self.push(LineStyle::Warning, joke);
            }
            Command::History => self.show_history(),
            Command::Views => self.show_views(),
            Command::ResetViews => {
                registry::reset(&mut self.ctx);
                self.push(
                    LineStyle::Warning,
                    "⚠️ Visitor counter and tracking data has been reset",
                );
                self.push(
                    LineStyle::Info,
                    "💡 Refresh the page to be counted as a new visitor",
                );
            }
            Command::Exit => {
                self.push(
                    LineStyle::Info,
                    "👋 Thanks for visiting! You can close this tab or continue exploring.",
                );
                self.push(LineStyle::Output, "Terminal session ended. Refresh to restart.");
                self.input.disabled = true;
                self.state = TerminalState::Exited;
            }
        }
    }

    fn show_help(&mut self) {
        const INNER: usize = 53;
        self.push(LineStyle::Info, "🖥️  Available Commands:");
        self.push(LineStyle::Output, format!("┌{}┐", "─".repeat(INNER)));
        for (usage, description) in content::COMMAND_REFERENCE {
            let row = format!("  {:<12}- {}", usage, description);
            self.push(LineStyle::Output, format!("│{:<width$}│", row, width = INNER));
        }
        self.push(LineStyle::Output, format!("└{}┘", "─".repeat(INNER)));
        self.push(
            LineStyle::Info,
            "💡 Tip: Use 'ls' to see available files, then 'cat filename' to read them!",
        );
    }

    fn toggle_theme(&mut self) {
        match self.ctx.theme.as_mut() {
            Some(toggle) => {
                toggle.click(self.ctx.local.as_mut());
                self.push(LineStyle::Info, "Theme toggled!");
            }
            None => self.push(LineStyle::Error, "Theme toggle not available"),
        }
    }

    fn show_history(&mut self) {
        self.push(LineStyle::Info, "📜 Command History:");
        if self.history.is_empty() {
            self.push(LineStyle::Output, "No command history available yet.");
            return;
        }
        let lines: Vec<String> = self
            .history
            .recent(HISTORY_SHOWN)
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}. {}", i + 1, cmd))
            .collect();
        for line in lines {
            self.push(LineStyle::Output, line);
        }
    }

    fn show_views(&mut self) {
        let snap = registry::snapshot(&self.ctx);
        let today = (self.clock)().date_naive();
        let first_visit = registry::first_visit_date(&mut self.ctx, today);
        let you_are = if snap.is_new_session {
            "New Visitor"
        } else {
            "Returning in this session"
        };

        self.push(LineStyle::Info, "📊 Website Analytics:");
        self.push(
            LineStyle::Output,
            format!("👁️ Unique Visitors: {}", format_view_count(snap.count)),
        );
        self.push(
            LineStyle::Output,
            format!("🔍 Total Visitor IDs: {}", snap.visitor_ids),
        );
        self.push(LineStyle::Output, format!("🎯 You are: {}", you_are));
        self.push(
            LineStyle::Output,
            format!("📅 First visitor tracked: {}", first_visit),
        );
        self.push(LineStyle::Info, "💡 Counter only increments for unique visitors!");
    }
}

fn prompt_for(profile: &ProfileConfig) -> String {
    format!("{}@{}:~$", profile.user, profile.host)
}
