//! Terminal-backed [`Prompt`] implementation for the veer shell toolkit.
//!
//! Wraps a rustyline editor: line editing, in-process history, prefix
//! completion over the registered command names, and masked password input
//! via a highlighter that echoes `*` while a password read is in flight.

use std::borrow::Cow;
use std::cell::Cell;
use std::io::{self, Write};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context as LineContext, Editor, Helper};

use veer_shell::Prompt;

/// Candidate command names whose lowercased prefix matches `input`.
///
/// Completion only applies to the command token: once the input contains
/// whitespace the user is typing arguments, which the shell knows nothing
/// about.
fn completion_candidates(commands: &[String], input: &str) -> Vec<String> {
    if input.contains(char::is_whitespace) {
        return Vec::new();
    }
    let prefix = input.to_lowercase();
    commands
        .iter()
        .filter(|name| name.starts_with(&prefix))
        .cloned()
        .collect()
}

/// rustyline helper: command-name completion plus password masking.
struct EditorHelper {
    commands: Vec<String>,
    masking: Cell<bool>,
}

impl Completer for EditorHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &LineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if self.masking.get() {
            return Ok((pos, Vec::new()));
        }
        let candidates = completion_candidates(&self.commands, &line[..pos])
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for EditorHelper {
    type Hint = String;
}

impl Highlighter for EditorHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking.get() {
            Cow::Owned("*".repeat(line.chars().count()))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        // Force a refresh per keystroke while masking so the echoed `*`s
        // track the buffer.
        self.masking.get()
    }
}

impl Validator for EditorHelper {}
impl Helper for EditorHelper {}

/// A [`Prompt`] reading from an interactive terminal through rustyline.
///
/// End-of-input (`Ctrl-D`) and interrupts (`Ctrl-C`) surface as an empty
/// line per the `Prompt` contract; the shell then applies its usual
/// empty-line handling. Non-empty lines are appended to the in-process
/// history; masked reads are not.
pub struct TerminalPrompt {
    prompt: String,
    editor: Editor<EditorHelper, DefaultHistory>,
}

impl TerminalPrompt {
    /// Create a terminal prompt displaying `prompt`, with no completion
    /// candidates yet.
    pub fn new(prompt: impl Into<String>) -> Result<Self, ReadlineError> {
        Self::with_completions(prompt, Vec::new())
    }

    /// Create a terminal prompt completing the given command names.
    pub fn with_completions(
        prompt: impl Into<String>,
        commands: Vec<String>,
    ) -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(EditorHelper {
            commands,
            masking: Cell::new(false),
        }));
        Ok(Self {
            prompt: prompt.into(),
            editor,
        })
    }

    /// Replace the completion candidate list, typically with
    /// `Registry::names()` once registration is complete.
    pub fn set_completions(&mut self, commands: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.commands = commands;
        }
    }

    fn read(&mut self, masked: bool) -> String {
        if let Some(helper) = self.editor.helper_mut() {
            helper.masking.set(masked);
        }
        let result = self.editor.readline(&self.prompt);
        if let Some(helper) = self.editor.helper_mut() {
            helper.masking.set(false);
        }

        match result {
            Ok(line) => {
                if !masked && !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                line
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => String::new(),
            Err(e) => {
                log::warn!("readline failed: {e}");
                String::new()
            }
        }
    }
}

impl Prompt for TerminalPrompt {
    fn print(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    fn println(&mut self, text: &str) {
        println!("{text}");
    }

    fn read_line(&mut self) -> String {
        self.read(false)
    }

    fn read_password(&mut self) -> String {
        self.read(true)
    }

    fn clear(&mut self) {
        // ANSI erase-display plus cursor home; terminals that ignore escape
        // sequences just see a short garbage line, which the contract allows.
        print!("\x1b[2J\x1b[H");
        let _ = io::stdout().flush();
    }
}
