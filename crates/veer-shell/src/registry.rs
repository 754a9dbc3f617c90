//! Command registry: an ordered namespace with O(1) alias-aware dispatch.

use std::collections::{HashMap, HashSet};

use crate::command::Command;
use crate::error::{Result, ShellError};

/// Alphabetically ordered, alias-aware command namespace.
///
/// Lookup by name or alias is O(1); iteration yields commands in ascending
/// name order. Names and aliases share a single namespace, so registering
/// any key twice is a configuration error. Commands are never removed.
#[derive(Debug, Default)]
pub struct Registry {
    /// Stable-slot storage; append-only, never reordered.
    commands: Vec<Command>,
    /// Slot indices sorted ascending by command name.
    ordered: Vec<usize>,
    /// Every name and alias mapped to its slot.
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of commands atomically.
    ///
    /// The whole batch is validated up front: every name and alias must be
    /// non-empty, free of whitespace, and unused both by already registered
    /// commands and by the rest of the batch. On any violation no command
    /// from the batch is registered and the registry is left untouched.
    pub fn register(&mut self, cmds: Vec<Command>) -> Result<()> {
        let mut batch_keys: HashSet<&str> = HashSet::new();
        for cmd in &cmds {
            for key in cmd.keys() {
                if key.is_empty() || key.contains(char::is_whitespace) {
                    return Err(ShellError::InvalidName(key.to_string()));
                }
                if self.index.contains_key(key) || !batch_keys.insert(key) {
                    return Err(ShellError::NameConflict(key.to_string()));
                }
            }
        }
        for cmd in cmds {
            self.insert(cmd);
        }
        Ok(())
    }

    /// Insert one pre-validated command, keeping `ordered` sorted by name.
    fn insert(&mut self, cmd: Command) {
        let slot = self.commands.len();
        let pos = self
            .ordered
            .partition_point(|&i| self.commands[i].name < cmd.name);
        let keys: Vec<String> = cmd.keys().map(str::to_string).collect();
        log::debug!(
            "registered command {:?} ({} aliases)",
            cmd.name,
            cmd.aliases.len()
        );
        self.ordered.insert(pos, slot);
        self.commands.push(cmd);
        for key in keys {
            self.index.insert(key, slot);
        }
    }

    /// Resolve a name or alias to its command.
    pub fn lookup(&self, key: &str) -> Option<&Command> {
        self.index.get(key).map(|&slot| &self.commands[slot])
    }

    /// Commands in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.ordered.iter().map(|&slot| &self.commands[slot])
    }

    /// Number of registered commands (aliases not counted).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Primary command names in ascending order. Feeds tab completion in
    /// terminal prompt implementations.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|cmd| cmd.name.clone()).collect()
    }

    /// Render the multi-line help listing: a header, one row per command in
    /// name order with the description column aligned via dash fill, and a
    /// footer pointing at `help <name>`.
    pub fn help_listing(&self) -> String {
        let longest = self.iter().map(|cmd| cmd.title().len()).max().unwrap_or(0);

        let mut out = String::from("The following commands are available:\n");
        for cmd in self.iter() {
            let title = cmd.title();
            out.push_str(&format!(
                "    {} {} {}\n",
                title,
                "-".repeat(longest - title.len() + 1),
                cmd.desc
            ));
        }
        out.push_str("Type 'help' followed by a command's name or alias for full documentation");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Context;

    fn cmd(name: &str) -> Command {
        Command::new(name, |_: &mut Context<'_>, _: &[&str]| {})
    }

    #[test]
    fn iteration_is_alphabetical_regardless_of_registration_order() {
        let mut reg = Registry::new();
        reg.register(vec![cmd("zeta"), cmd("alpha"), cmd("mu")]).unwrap();
        assert_eq!(reg.names(), ["alpha", "mu", "zeta"]);
    }

    #[test]
    fn lookup_resolves_names_and_aliases() {
        let mut reg = Registry::new();
        reg.register(vec![cmd("foo").alias("f")]).unwrap();
        assert_eq!(reg.lookup("foo").unwrap().name(), "foo");
        assert_eq!(reg.lookup("f").unwrap().name(), "foo");
        assert!(reg.lookup("bar").is_none());
    }

    #[test]
    fn duplicate_name_is_a_conflict() {
        let mut reg = Registry::new();
        reg.register(vec![cmd("foo")]).unwrap();
        let err = reg.register(vec![cmd("foo")]).unwrap_err();
        assert!(matches!(err, ShellError::NameConflict(key) if key == "foo"));
    }

    #[test]
    fn alias_colliding_with_name_is_a_conflict() {
        let mut reg = Registry::new();
        reg.register(vec![cmd("foo")]).unwrap();
        let err = reg.register(vec![cmd("bar").alias("foo")]).unwrap_err();
        assert!(matches!(err, ShellError::NameConflict(key) if key == "foo"));
    }

    #[test]
    fn aliases_collide_with_each_other() {
        let mut reg = Registry::new();
        reg.register(vec![cmd("foo").alias("x")]).unwrap();
        let err = reg.register(vec![cmd("bar").alias("x")]).unwrap_err();
        assert!(matches!(err, ShellError::NameConflict(key) if key == "x"));
    }

    #[test]
    fn conflicts_within_a_single_batch_are_caught() {
        let mut reg = Registry::new();
        let err = reg
            .register(vec![cmd("a").alias("dup"), cmd("b").alias("dup")])
            .unwrap_err();
        assert!(matches!(err, ShellError::NameConflict(key) if key == "dup"));
        assert!(reg.is_empty());
    }

    #[test]
    fn failed_batch_leaves_registry_untouched() {
        let mut reg = Registry::new();
        reg.register(vec![cmd("keep")]).unwrap();

        // "fresh" sorts before the conflicting command, but must not land.
        let err = reg.register(vec![cmd("fresh"), cmd("keep")]).unwrap_err();
        assert!(matches!(err, ShellError::NameConflict(_)));
        assert_eq!(reg.len(), 1);
        assert!(reg.lookup("keep").is_some());
        assert!(reg.lookup("fresh").is_none());
        assert_eq!(reg.names(), ["keep"]);
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let mut reg = Registry::new();
        reg.register(Vec::new()).unwrap();
        assert!(reg.is_empty());
    }

    #[test]
    fn whitespace_in_names_is_rejected() {
        let mut reg = Registry::new();
        let err = reg.register(vec![cmd("two words")]).unwrap_err();
        assert!(matches!(err, ShellError::InvalidName(key) if key == "two words"));

        let err = reg.register(vec![cmd("ok").alias("bad alias")]).unwrap_err();
        assert!(matches!(err, ShellError::InvalidName(key) if key == "bad alias"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut reg = Registry::new();
        let err = reg.register(vec![cmd("")]).unwrap_err();
        assert!(matches!(err, ShellError::InvalidName(key) if key.is_empty()));
    }

    #[test]
    fn help_listing_aligns_descriptions() {
        let mut reg = Registry::new();
        reg.register(vec![
            cmd("do").desc("Do the thing"),
            cmd("supercalifragilistic").alias("s").desc("Long one"),
        ])
        .unwrap();

        // Titles: "do" (2) and "supercalifragilistic (alias: s)" (31).
        let expected = concat!(
            "The following commands are available:\n",
            "    do ------------------------------ Do the thing\n",
            "    supercalifragilistic (alias: s) - Long one\n",
            "Type 'help' followed by a command's name or alias for full documentation",
        );
        assert_eq!(reg.help_listing(), expected);
    }

    #[test]
    fn help_listing_on_empty_registry_has_no_rows() {
        let reg = Registry::new();
        let listing = reg.help_listing();
        assert!(listing.starts_with("The following commands are available:\n"));
        assert!(listing.ends_with("full documentation"));
        assert_eq!(listing.lines().count(), 2);
    }
}
