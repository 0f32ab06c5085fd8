//! A tiny, embeddable command-line interpreter.
//!
//! This crate provides the core of a single-threaded, event-driven shell:
//! a fixed set of built-in commands, user-defined aliases, an in-memory
//! virtual file store, and an arrow-key history stack. It owns no I/O of
//! its own — the host feeds it raw lines and key presses and receives
//! rendered text through the [`Console`] trait, which makes the same core
//! serve a terminal, a test buffer, or an embedded output pane.
//!
//! The main entry point is [`Shell`]. The public modules expose the
//! individual building blocks for hosts that want to inspect state or
//! implement their own console.
//!
//! ```
//! use minishell::{BufferConsole, Shell};
//!
//! let mut shell = Shell::new();
//! let mut console = BufferConsole::new();
//! shell.submit("echo hello world", &mut console);
//! assert_eq!(console.last(), Some("> hello world"));
//! ```

pub mod alias;
mod builtin;
pub mod command;
pub mod console;
pub mod files;
pub mod history;
mod shell;
pub mod text;
mod tokenize;

pub use command::CommandId;
pub use console::{BufferConsole, Console};
pub use shell::{Key, Shell, ShellState};
