//! Tool system for ninesh.
//!
//! Every command is a tool. The kernel looks the first word of a line up in
//! the [`ToolRegistry`] and hands the rest to [`Tool::execute`] together with
//! an [`ExecContext`] borrowing the session.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! ├── Files (ls, cd, cat, pwd, tree, mkdir, touch, rm)
//! ├── System (uname, uptime, df, free, top, ps, ping, ...)
//! └── Session (help, setdistro, fastfetch, clear, exit)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolArgs, ToolSchema};
