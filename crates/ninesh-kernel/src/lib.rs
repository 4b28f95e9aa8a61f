//! ninesh-kernel: the core of a simulated SSH session.
//!
//! This crate provides:
//!
//! - **VFS**: an in-memory filesystem tree seeded per session, plus path resolution
//! - **Tools**: the `Tool` trait, registry, and every builtin command
//! - **Session**: working directory, history, display preset, boot banner, transcript
//! - **Kernel**: the facade a terminal host drives
//!
//! Nothing here touches the real filesystem or network.

pub mod config;
pub mod kernel;
pub mod logos;
pub mod session;
pub mod tools;
pub mod vfs;

pub use config::{ConfigError, KernelConfig};
pub use kernel::{COMMAND_NOT_FOUND, Kernel, KernelError};
pub use session::{BootStep, History, Phase, Session, Transcript};
pub use tools::{ExecContext, Tool, ToolArgs, ToolRegistry, ToolSchema};
pub use vfs::{Node, Vfs, VfsError};

/// Kernel release reported by `uname`, `fastfetch` and the banner.
pub const KERNEL_RELEASE: &str = "6.7.4-arch1-1";
