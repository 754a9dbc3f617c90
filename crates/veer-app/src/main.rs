//! veer demo shell.
//!
//! Registers a few sample commands on top of the builtins and runs the
//! interactive loop on a rustyline-backed terminal prompt. Try `help`,
//! tab completion, and an empty line to repeat the previous command.

use anyhow::Result;
use veer_shell::{Command, Context, Shell};
use veer_term::TerminalPrompt;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut shell = Shell::new(TerminalPrompt::new("veer> ")?);
    shell.register(sample_commands())?;

    // Completion candidates after registration, so the list is complete.
    let names = shell.registry().names();
    shell.prompt_mut().set_completions(names);

    log::info!("starting veer demo shell ({} commands)", shell.registry().len());
    shell.run();
    log::info!("shell exited");
    Ok(())
}

fn sample_commands() -> Vec<Command> {
    vec![
        Command::new("echo", |ctx: &mut Context<'_>, args: &[&str]| {
            let line = args.join(" ");
            ctx.prompt.println(&line);
        })
        .desc("Print arguments")
        .usage("echo [text...]"),
        Command::new("sum", |ctx: &mut Context<'_>, args: &[&str]| {
            let total: i64 = args.iter().filter_map(|a| a.parse::<i64>().ok()).sum();
            let line = format!("{total}");
            ctx.prompt.println(&line);
        })
        .validate_args(|ctx: &mut Context<'_>, args: &[&str]| {
            if args.is_empty() || args.iter().any(|a| a.parse::<i64>().is_err()) {
                ctx.prompt.println("usage: sum <integer>...");
                return false;
            }
            true
        })
        .desc("Add up integer arguments")
        .usage("sum <integer>..."),
        Command::new("login", |ctx: &mut Context<'_>, _: &[&str]| {
            ctx.prompt.print("password: ");
            let secret = ctx.prompt.read_password();
            let line = format!("read {} masked characters", secret.chars().count());
            ctx.prompt.println(&line);
        })
        .desc("Demonstrate masked input")
        .help("Reads a line with echo masked and reports its length. Nothing is stored."),
    ]
}
