//! Pure data types for ninesh — paths, display presets, command results, transcript lines.
//!
//! This crate is a leaf dependency with no async runtime and no I/O. Hosts that
//! only render a session (a terminal front end, a web view) can depend on it
//! without pulling in the kernel.

pub mod dir_entry;
pub mod distro;
pub mod line;
pub mod path;
pub mod result;

// Flat re-exports for convenience
pub use dir_entry::*;
pub use distro::*;
pub use line::*;
pub use path::*;
pub use result::*;
