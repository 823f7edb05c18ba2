/// Lines entered during this terminal's lifetime, oldest first. Not persisted.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `n` entries in entry order.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}
