//! Command descriptors.

use std::fmt;

use crate::shell::Context;

/// Behavior invoked when a command is dispatched: the dispatch context plus
/// the argument tokens (everything after the command token).
pub type RunFn = Box<dyn Fn(&mut Context<'_>, &[&str])>;

/// Optional argument predicate, run before the command body. Returning
/// `false` skips the body; the predicate owns any user-facing message.
pub type ValidateFn = Box<dyn Fn(&mut Context<'_>, &[&str]) -> bool>;

/// A single named command: identity (name plus aliases), behavior, optional
/// argument validation, and the documentation shown by the `help` builtin.
///
/// Built once by the registrant and registered exactly once; the
/// [`Registry`](crate::Registry) owns it for the life of the shell. Names
/// and aliases must be non-empty, contain no whitespace, and be unique
/// across the whole namespace, which registration enforces.
pub struct Command {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) run: RunFn,
    pub(crate) validate_args: Option<ValidateFn>,
    pub(crate) desc: String,
    pub(crate) usage: String,
    pub(crate) help: String,
}

impl Command {
    /// Create a command with the given primary name and behavior.
    pub fn new(
        name: impl Into<String>,
        run: impl Fn(&mut Context<'_>, &[&str]) + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            run: Box::new(run),
            validate_args: None,
            desc: String::new(),
            usage: String::new(),
            help: String::new(),
        }
    }

    /// Add an alias. Aliases resolve through the same index as names.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the one-line description shown in the help listing.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Set the usage string shown by `help <name>`.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Set the long help text shown by `help <name>`.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set the argument predicate, run before the command body.
    pub fn validate_args(
        mut self,
        validate: impl Fn(&mut Context<'_>, &[&str]) -> bool + 'static,
    ) -> Self {
        self.validate_args = Some(Box::new(validate));
        self
    }

    /// Primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aliases in the order they were added.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Display title for the help listing: the name alone, or
    /// `"name (alias: a | b)"` when aliases exist.
    pub fn title(&self) -> String {
        if self.aliases.is_empty() {
            self.name.clone()
        } else {
            format!("{} (alias: {})", self.name, self.aliases.join(" | "))
        }
    }

    /// Name plus all aliases: every index key this command claims.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("desc", &self.desc)
            .finish_non_exhaustive()
    }
}
