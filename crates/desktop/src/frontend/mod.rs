//! Terminal frontend: rendering plus the interactive shell.

pub mod render;
pub mod shell;

pub use shell::{TerminalInput, run as run_shell};
