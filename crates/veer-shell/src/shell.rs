//! The interactive shell: exit signaling, command context, dispatch loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::builtins;
use crate::command::Command;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::registry::Registry;

/// One-shot exit flag observed by [`Shell::run`] between reads.
///
/// Handles are cheap clones of a shared flag. Requesting exit is idempotent
/// and safe from inside a running command or from another thread; once set
/// the flag is never cleared.
#[derive(Debug, Clone, Default)]
pub struct ExitSignal(Arc<AtomicBool>);

impl ExitSignal {
    /// Create an unset signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shell exit. Further calls are no-ops.
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Non-blocking poll.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What a running command sees: the shell's prompt for user interaction,
/// plus read access to the registry and the exit signal.
///
/// This is how the builtins work without capturing the shell: `help` reads
/// the registry through the context and `exit` fires the signal through it.
pub struct Context<'a> {
    /// The shell's prompt, for output and nested reads.
    pub prompt: &'a mut dyn Prompt,
    registry: &'a Registry,
    exit: &'a ExitSignal,
}

impl<'a> Context<'a> {
    /// The registry this command was dispatched from.
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Fire the shell's exit signal; the loop stops before its next read.
    pub fn request_exit(&self) {
        self.exit.request();
    }
}

/// The dispatch-miss diagnostic, shared verbatim by the loop and the `help`
/// builtin.
pub(crate) fn unknown_command_message(token: &str) -> String {
    format!("{token} isn't a valid command, run 'help' for a list")
}

/// An interactive shell: a [`Registry`] plus the loop driving it.
///
/// Dispatch is synchronous and single-threaded; reading a line is the only
/// suspension point and commands run one at a time on the calling thread.
pub struct Shell<P: Prompt> {
    registry: Registry,
    prompt: P,
    last_line: String,
    exit: ExitSignal,
}

impl<P: Prompt> Shell<P> {
    /// Create a shell reading from `prompt`, with the builtin commands
    /// (`clear`, `exit`/`quit`/`q`, `help`/`h`) pre-registered.
    pub fn new(prompt: P) -> Self {
        let mut registry = Registry::new();
        registry
            .register(builtins::builtins())
            .expect("builtin command names are unique");
        Self {
            registry,
            prompt,
            last_line: String::new(),
            exit: ExitSignal::new(),
        }
    }

    /// Register commands; see [`Registry::register`]. Registration is meant
    /// to complete before [`run`](Self::run) starts.
    pub fn register(&mut self, cmds: Vec<Command>) -> Result<()> {
        self.registry.register(cmds)
    }

    /// The shell's registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The prompt, for embedder configuration (completion lists) or for
    /// inspecting a scripted prompt in tests.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Mutable access to the prompt.
    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    /// A clone of the exit handle, for requesting exit from outside the
    /// command set.
    pub fn exit_signal(&self) -> ExitSignal {
        self.exit.clone()
    }

    /// Run the dispatch loop until the exit signal fires.
    ///
    /// An unknown command token or a rejected argument list is reported to
    /// the user and the loop continues; a panic inside a command body is not
    /// caught. Once the signal is observed the loop returns without another
    /// read.
    pub fn run(&mut self) {
        while !self.exit.is_set() {
            self.read_command();
        }
    }

    /// Read one line and dispatch it.
    fn read_command(&mut self) {
        let mut line = self.prompt.read_line();

        // An empty or all-whitespace line repeats the previous command.
        if line.trim().is_empty() {
            if self.last_line.is_empty() {
                return;
            }
            line = self.last_line.clone();
        }
        // Recorded before lookup: an unknown command is still the repeat
        // target for the next empty line.
        self.last_line = line.clone();

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&name) = tokens.first() else {
            // Unreachable after the substitution above, but guarded.
            return;
        };

        let Some(cmd) = self.registry.lookup(name) else {
            log::debug!("unknown command token {name:?}");
            let message = unknown_command_message(name);
            self.prompt.println(&message);
            return;
        };

        let args = &tokens[1..];
        let mut ctx = Context {
            prompt: &mut self.prompt,
            registry: &self.registry,
            exit: &self.exit,
        };
        if let Some(validate) = &cmd.validate_args
            && !validate(&mut ctx, args)
        {
            return;
        }
        (cmd.run)(&mut ctx, args);
    }
}
