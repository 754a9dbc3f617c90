//! The prompt capability surface and an in-memory scripted implementation.

use std::collections::VecDeque;

/// User-facing I/O capabilities the shell core depends on.
///
/// Each [`Shell`](crate::Shell) owns a single `Prompt`, used by the dispatch
/// loop to read command lines and handed to every running command (through
/// [`Context`](crate::Context)) for its own interaction.
///
/// End-of-input is reported by [`read_line`](Prompt::read_line) as an empty
/// string, which the shell handles exactly like an empty interactive line
/// (repeat the previous command). An embedder that wants end-of-input to
/// terminate the shell should hold the shell's
/// [`ExitSignal`](crate::ExitSignal) and request exit from a wrapping
/// implementation.
pub trait Prompt {
    /// Write `text` without a trailing newline.
    fn print(&mut self, text: &str);

    /// Write `text` followed by a newline.
    fn println(&mut self, text: &str);

    /// Blocking read of one line of input, without the line terminator.
    fn read_line(&mut self) -> String;

    /// Blocking read of one line with the input masked from display.
    fn read_password(&mut self) -> String;

    /// Best-effort clear of the visible screen. May be a no-op on platforms
    /// that cannot support it.
    fn clear(&mut self);
}

/// An in-memory [`Prompt`] fed from canned input.
///
/// Useful for unit tests and headless embedding: reads pop scripted lines,
/// all output is captured, and `clear()` calls are counted. Once the script
/// is exhausted, reads return empty strings (end-of-input).
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    passwords: VecDeque<String>,
    output: String,
    clears: usize,
}

impl ScriptedPrompt {
    /// Create a prompt that will serve `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue a line to be served by `read_password`.
    pub fn push_password(&mut self, password: impl Into<String>) {
        self.passwords.push_back(password.into());
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of `clear()` calls observed.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of scripted lines not yet read.
    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn println(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn read_line(&mut self) -> String {
        self.lines.pop_front().unwrap_or_default()
    }

    fn read_password(&mut self) -> String {
        self.passwords.pop_front().unwrap_or_default()
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
