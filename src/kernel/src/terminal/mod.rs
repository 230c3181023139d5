//! Terminal subsystem for ScutoidOS.
//!
//! Provides a line-oriented command shell on top of the text console.
//!
//! # Architecture
//!
//! - `shell`: line editor that collects keystrokes into a command line
//! - `commands`: built-in shell commands

pub mod commands;
pub mod shell;

pub use commands::{Command, MemoryLayout};
pub use shell::{CommandShell, LINE_CAPACITY};
