//! Baseline commands registered into every shell.

use crate::command::Command;
use crate::shell::{Context, unknown_command_message};

/// The builtin set: `clear`, `exit` (`quit`, `q`), and `help` (`h`).
pub(crate) fn builtins() -> Vec<Command> {
    vec![
        Command::new("clear", |ctx: &mut Context<'_>, _: &[&str]| {
            ctx.prompt.clear();
        })
        .desc("Clear the screen"),
        Command::new("exit", |ctx: &mut Context<'_>, _: &[&str]| {
            ctx.request_exit();
        })
        .alias("quit")
        .alias("q")
        .desc("Exit the shell"),
        Command::new("help", run_help)
            .alias("h")
            .desc("Get a list of commands or help on each")
            .usage("help [command]")
            .help(
                "Run 'help' to get a list of commands, or help about a specific \
                 command by appending its name",
            ),
    ]
}

/// `help` with no arguments prints the full listing; with an argument it
/// prints that command's documentation sections (description, usage, long
/// help), separated by blank lines, skipping empty sections.
fn run_help(ctx: &mut Context<'_>, args: &[&str]) {
    let Some(&name) = args.first() else {
        let listing = ctx.registry().help_listing();
        ctx.prompt.println(&listing);
        return;
    };

    let Some(cmd) = ctx.registry().lookup(name) else {
        let message = unknown_command_message(name);
        ctx.prompt.println(&message);
        return;
    };

    if !cmd.desc.is_empty() {
        ctx.prompt.println(&cmd.desc);
    }
    if !cmd.usage.is_empty() {
        if !cmd.desc.is_empty() {
            ctx.prompt.println("");
        }
        let usage = format!("    {}", cmd.usage);
        ctx.prompt.println(&usage);
    }
    if !cmd.help.is_empty() {
        if !cmd.desc.is_empty() || !cmd.usage.is_empty() {
            ctx.prompt.println("");
        }
        ctx.prompt.println(&cmd.help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use crate::shell::Shell;

    fn run_lines(lines: &[&str]) -> String {
        let mut shell = Shell::new(ScriptedPrompt::new(lines.iter().copied()));
        shell.run();
        shell.prompt().output().to_string()
    }

    #[test]
    fn clear_invokes_the_prompt_capability() {
        let mut shell = Shell::new(ScriptedPrompt::new(["clear", "clear", "exit"]));
        shell.run();
        assert_eq!(shell.prompt().clear_count(), 2);
    }

    #[test]
    fn help_listing_covers_every_builtin_in_order() {
        let output = run_lines(&["help", "exit"]);

        // Titles: "clear" (5), "exit (alias: quit | q)" (22),
        // "help (alias: h)" (15); longest is 22.
        let expected = concat!(
            "The following commands are available:\n",
            "    clear ------------------ Clear the screen\n",
            "    exit (alias: quit | q) - Exit the shell\n",
            "    help (alias: h) -------- Get a list of commands or help on each\n",
            "Type 'help' followed by a command's name or alias for full documentation\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn help_listing_descriptions_share_a_column() {
        let output = run_lines(&["help", "exit"]);
        let columns: Vec<usize> = output
            .lines()
            .filter(|line| line.starts_with("    "))
            // Description starts after the last dash and one space.
            .map(|line| line.rfind('-').unwrap() + 2)
            .collect();
        assert!(!columns.is_empty());
        assert!(columns.iter().all(|&c| c == columns[0]));
    }

    #[test]
    fn help_with_alias_argument_resolves_through_the_index() {
        let output = run_lines(&["help q", "exit"]);
        assert!(output.contains("Exit the shell"));
    }

    #[test]
    fn help_via_its_own_alias() {
        let output = run_lines(&["h", "exit"]);
        assert!(output.starts_with("The following commands are available:"));
    }

    #[test]
    fn help_sections_are_separated_by_blank_lines() {
        let output = run_lines(&["help help", "exit"]);
        let expected = concat!(
            "Get a list of commands or help on each\n",
            "\n",
            "    help [command]\n",
            "\n",
            "Run 'help' to get a list of commands, or help about a specific ",
            "command by appending its name\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn help_skips_empty_sections_without_leading_blanks() {
        let mut shell = Shell::new(ScriptedPrompt::new(["help bare", "exit"]));
        shell
            .register(vec![
                Command::new("bare", |_: &mut Context<'_>, _: &[&str]| {}).usage("bare <x>"),
            ])
            .unwrap();
        shell.run();
        // No description: the usage line comes first, no blank line before it.
        assert_eq!(shell.prompt().output(), "    bare <x>\n");
    }

    #[test]
    fn help_with_only_a_description_prints_one_line() {
        let mut shell = Shell::new(ScriptedPrompt::new(["help clear", "exit"]));
        shell.run();
        assert_eq!(shell.prompt().output(), "Clear the screen\n");
    }

    #[test]
    fn help_for_unknown_name_matches_the_dispatch_miss_message() {
        let miss = run_lines(&["nope", "exit"]);
        let help_miss = run_lines(&["help nope", "exit"]);
        assert_eq!(miss, help_miss);
        assert!(miss.contains("nope isn't a valid command, run 'help' for a list"));
    }

    #[test]
    fn help_ignores_extra_arguments() {
        let output = run_lines(&["help clear extra junk", "exit"]);
        assert_eq!(output, "Clear the screen\n");
    }

    #[test]
    fn registered_commands_appear_in_the_listing() {
        let mut shell = Shell::new(ScriptedPrompt::new(["help", "exit"]));
        shell
            .register(vec![
                Command::new("alpha", |_: &mut Context<'_>, _: &[&str]| {}).desc("First"),
            ])
            .unwrap();
        shell.run();
        let output = shell.prompt().output();
        let alpha_pos = output.find("    alpha").unwrap();
        let clear_pos = output.find("    clear").unwrap();
        assert!(alpha_pos < clear_pos, "listing must stay alphabetical");
    }

    #[test]
    fn builtin_aliases_dispatch() {
        let mut shell = Shell::new(ScriptedPrompt::new(["quit"]));
        shell.run();
        assert_eq!(shell.prompt().remaining_lines(), 0);
    }
}
