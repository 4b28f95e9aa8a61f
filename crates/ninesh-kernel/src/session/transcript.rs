//! The scrollback buffer.

use ninesh_types::TermLine;

/// Append-only list of displayed lines; only `clear` removes anything.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TermLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo a submission with the prompt it was typed at.
    pub fn push_input(&mut self, prompt: impl Into<String>, text: impl Into<String>) {
        self.lines.push(TermLine::input(prompt, text));
    }

    pub fn push_output(&mut self, text: impl Into<String>) {
        self.lines.push(TermLine::output(text));
    }

    pub fn extend_output<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines
            .extend(lines.into_iter().map(|text| TermLine::output(text)));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[TermLine] {
        &self.lines
    }

    /// Lines added since the transcript had `start` lines.
    pub fn since(&self, start: usize) -> &[TermLine] {
        self.lines.get(start..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
