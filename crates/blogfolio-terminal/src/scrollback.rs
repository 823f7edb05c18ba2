use crate::content;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Prompt followed by the echoed command.
    Prompt,
    Output,
    Info,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: LineStyle,
    pub text: String,
}

impl Line {
    pub fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Rendered terminal output. Only grows, except when replaced wholesale by
/// the welcome block.
#[derive(Debug, Clone, Default)]
pub struct Scrollback {
    lines: Vec<Line>,
    /// Bumped on every wholesale replacement so renderers know to redraw.
    generation: u64,
}

impl Scrollback {
    /// A scrollback showing the welcome block for `prompt`.
    pub fn welcome(prompt: &str) -> Self {
        let mut sb = Self::default();
        sb.push_welcome(prompt);
        sb
    }

    fn push_welcome(&mut self, prompt: &str) {
        self.push(Line::new(
            LineStyle::Prompt,
            format!("{} {}", prompt, content::WELCOME_COMMAND),
        ));
        for text in content::WELCOME {
            self.push(Line::new(LineStyle::Output, *text));
        }
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn replace_with_welcome(&mut self, prompt: &str) {
        self.lines.clear();
        self.generation += 1;
        self.push_welcome(prompt);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }
}
