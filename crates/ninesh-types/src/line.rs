//! Transcript lines as rendered by a host.

use serde::{Deserialize, Serialize};

/// One line of the scrollback buffer.
///
/// Input lines carry the prompt that was current when they were submitted,
/// so a later `cd` does not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TermLine {
    /// An echoed submission.
    Input { prompt: String, text: String },
    /// Command or banner output.
    Output { text: String },
}

impl TermLine {
    pub fn input(prompt: impl Into<String>, text: impl Into<String>) -> Self {
        TermLine::Input {
            prompt: prompt.into(),
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        TermLine::Output { text: text.into() }
    }

    /// The line as it appears on screen, prompt included.
    pub fn rendered(&self) -> String {
        match self {
            TermLine::Input { prompt, text } => format!("{prompt}{text}"),
            TermLine::Output { text } => text.clone(),
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, TermLine::Input { .. })
    }
}
