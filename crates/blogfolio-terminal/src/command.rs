use std::fmt;

/// Every command the terminal understands. Arguments are carried only by the
/// variants that use them; the rest ignore whatever follows the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    WhatNow,
    About,
    Skills,
    Projects,
    Contact,
    Social,
    Resume,
    Version,
    Clear,
    Date,
    WhoAmI,
    Ls,
    /// First argument only.
    Cat(Option<String>),
    /// All arguments.
    Echo(Vec<String>),
    Pwd,
    Theme,
    Jokes,
    History,
    Views,
    ResetViews,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command not found: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl Command {
    /// Accepted command names, aliases included.
    pub const NAMES: &'static [&'static str] = &[
        "whatnow",
        "about",
        "skills",
        "projects",
        "contact",
        "social",
        "resume",
        "version",
        "clear",
        "cls",
        "date",
        "whoami",
        "ls",
        "cat",
        "echo",
        "pwd",
        "theme",
        "jokes",
        "history",
        "views",
        "reset-views",
        "exit",
    ];

    /// Resolve a command token (any letter case) with its arguments.
    pub fn parse(token: &str, args: &[&str]) -> Result<Command, UnknownCommand> {
        Ok(match token.to_lowercase().as_str() {
            "whatnow" => Command::WhatNow,
            "about" => Command::About,
            "skills" => Command::Skills,
            "projects" => Command::Projects,
            "contact" => Command::Contact,
            "social" => Command::Social,
            "resume" => Command::Resume,
            "version" => Command::Version,
            "clear" | "cls" => Command::Clear,
            "date" => Command::Date,
            "whoami" => Command::WhoAmI,
            "ls" => Command::Ls,
            "cat" => Command::Cat(args.first().map(|s| s.to_string())),
            "echo" => Command::Echo(args.iter().map(|s| s.to_string()).collect()),
            "pwd" => Command::Pwd,
            "theme" => Command::Theme,
            "jokes" => Command::Jokes,
            "history" => Command::History,
            "views" => Command::Views,
            "reset-views" => Command::ResetViews,
            "exit" => Command::Exit,
            _ => return Err(UnknownCommand(token.to_string())),
        })
    }

    /// Split a trimmed, non-empty line on whitespace and resolve it.
    pub fn parse_line(line: &str) -> Option<Result<Command, UnknownCommand>> {
        let mut parts = line.split_whitespace();
        let token = parts.next()?;
        let args: Vec<&str> = parts.collect();
        Some(Command::parse(token, &args))
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::WhatNow => "whatnow",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Contact => "contact",
            Command::Social => "social",
            Command::Resume => "resume",
            Command::Version => "version",
            Command::Clear => "clear",
            Command::Date => "date",
            Command::WhoAmI => "whoami",
            Command::Ls => "ls",
            Command::Cat(_) => "cat",
            Command::Echo(_) => "echo",
            Command::Pwd => "pwd",
            Command::Theme => "theme",
            Command::Jokes => "jokes",
            Command::History => "history",
            Command::Views => "views",
            Command::ResetViews => "reset-views",
            Command::Exit => "exit",
        }
    }
}
