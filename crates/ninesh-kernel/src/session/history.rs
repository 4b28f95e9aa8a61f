//! Command history with up/down recall.
//!
//! Entries are kept most-recent-first. Recall only moves a cursor and hands
//! back text for the input line; nothing is re-executed.

/// Submitted lines plus a recall cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor.
    ///
    /// Blank lines are not recorded. Returns whether the line was stored.
    pub fn record(&mut self, line: &str) -> bool {
        self.cursor = None;
        if line.trim().is_empty() {
            return false;
        }
        self.entries.insert(0, line.to_string());
        true
    }

    /// Step towards older entries (arrow up).
    ///
    /// Stops at the oldest entry. Returns `None` when there is no history,
    /// in which case the input line should be left alone.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(idx);
        self.entries.get(idx).map(String::as_str)
    }

    /// Step towards newer entries (arrow down).
    ///
    /// Moving past the newest entry resets the cursor and yields an empty
    /// input line.
    pub fn newer(&mut self) -> &str {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1).map(String::as_str).unwrap_or("")
            }
            _ => {
                self.cursor = None;
                ""
            }
        }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
