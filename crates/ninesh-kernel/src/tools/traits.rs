//! Core tool traits and types.

use std::collections::HashSet;

use async_trait::async_trait;
use ninesh_types::ExecResult;

use super::context::ExecContext;

/// How a tool presents itself in `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Synopsis, e.g. `ls [path]`.
    pub usage: String,
    /// One-line description.
    pub summary: String,
    /// Whether `help` lists the tool.
    pub listed: bool,
}

impl ToolSchema {
    /// Create a listed schema whose usage is just the name.
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            summary: summary.into(),
            listed: true,
        }
    }

    /// Set the synopsis shown in `help`.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Keep the tool out of `help`.
    pub fn unlisted(mut self) -> Self {
        self.listed = false;
        self
    }

    /// The `help` line for this tool.
    pub fn help_line(&self) -> String {
        format!("  {:<17}- {}", self.usage, self.summary)
    }
}

/// Tokenized arguments ready for tool execution.
///
/// Tokens are kept three ways: verbatim, positional (no leading `-`, or a
/// lone `-`), and as a flag set. A token `-xyz` contributes `xyz` as a whole
/// and each of `x`, `y`, `z`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Every token after the command name, in order.
    pub raw: Vec<String>,
    /// Positional arguments in order.
    pub positional: Vec<String>,
    /// Flags without their leading dash.
    pub flags: HashSet<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build args from already split tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = Self::new();
        for token in tokens {
            args.push(token.into());
        }
        args
    }

    fn push(&mut self, token: String) {
        match token.strip_prefix('-') {
            Some(body) if !body.is_empty() => {
                self.flags.insert(body.to_string());
                for c in body.chars() {
                    self.flags.insert(c.to_string());
                }
            }
            _ => self.positional.push(token.clone()),
        }
        self.raw.push(token);
    }

    /// Get a positional argument by index.
    pub fn get_positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Check if a flag is set.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// A command the session can run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bundle("-la", &["la", "l", "a"])]
    #[case::single("-r", &["r"])]
    #[case::rf("-rf", &["rf", "r", "f"])]
    fn flags_split_into_bundle_and_chars(#[case] token: &str, #[case] expected: &[&str]) {
        let args = ToolArgs::from_tokens([token]);
        for flag in expected {
            assert!(args.has_flag(flag), "missing {flag}");
        }
        assert_eq!(args.flags.len(), expected.len());
        assert!(args.positional.is_empty());
    }

    #[test]
    fn positional_and_raw_keep_order() {
        let args = ToolArgs::from_tokens(["-a", "docs", "-", "logs"]);
        assert_eq!(args.positional, ["docs", "-", "logs"]);
        assert_eq!(args.raw, ["-a", "docs", "-", "logs"]);
        assert_eq!(args.get_positional(0), Some("docs"));
        assert_eq!(args.get_positional(3), None);
    }

    #[test]
    fn help_line_pads_usage() {
        let schema = ToolSchema::new("ls", "List directory contents").usage("ls [path]");
        assert_eq!(schema.help_line(), "  ls [path]        - List directory contents");
        let schema = ToolSchema::new("setdistro", "Change ASCII logo").usage("setdistro <name>");
        assert_eq!(schema.help_line(), "  setdistro <name> - Change ASCII logo");
    }
}
