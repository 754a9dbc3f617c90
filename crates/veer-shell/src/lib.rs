//! Command registry and dispatch core for the veer shell toolkit.
//!
//! veer is a registry-based interactive shell: commands are registered by
//! name (plus aliases) into a [`Registry`], and a [`Shell`] drives a
//! read-dispatch-execute loop over a [`Prompt`] until an exit signal fires.
//! Every shell ships with three builtins (`clear`, `exit`/`quit`/`q`, and
//! `help`/`h`); everything else is supplied by the embedding application.
//!
//! The terminal-backed default prompt lives in the `veer-term` crate; this
//! crate only depends on the abstract [`Prompt`] capability, which keeps the
//! whole dispatch path testable with the in-memory [`ScriptedPrompt`].

mod builtins;
mod command;
mod error;
mod prompt;
mod registry;
mod shell;

/// A single named command: identity, behavior, validation, documentation.
pub use command::Command;
/// Registration-time error type and result alias.
pub use error::{Result, ShellError};
/// The I/O capability surface the core depends on, plus a scripted test double.
pub use prompt::{Prompt, ScriptedPrompt};
/// Alphabetically ordered, alias-aware command namespace.
pub use registry::Registry;
/// The dispatch loop and what commands see while running.
pub use shell::{Context, ExitSignal, Shell};
