use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CliMode, CommandError, CommandResult, LoopControl, ShellContext};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::menus::{MainMenu, MenuError};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "Show available commands", "help [command]", cmd_help),
        CommandDefinition::new("menu", "Navigate the main views", "menu", cmd_menu),
        CommandDefinition::new("version", "Version info", "version", cmd_version),
        CommandDefinition::new(
            "login",
            "Unlock the admin views",
            "login [password]",
            cmd_login,
        ),
        CommandDefinition::new("logout", "Lock the admin views", "logout", cmd_logout),
        CommandDefinition::new("exit", "Quit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let definition = context.registry().get(&name.to_lowercase()).ok_or_else(|| {
            CommandError::InvalidArguments(format!("unknown command `{name}`"))
        })?;
        io::print_info(format!("{} — {}", definition.name, definition.description));
        io::print_info(format!("usage: {}", definition.usage));
        return Ok(());
    }

    let lines: Vec<String> = context
        .registry()
        .iter()
        .map(|definition| format!("  {:<10} {}", definition.name, definition.description))
        .collect();
    io::print_info("Commands:");
    for line in lines {
        io::print_info(line);
    }
    Ok(())
}

fn cmd_menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode() != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "the menu is only available in the interactive shell".into(),
        ));
    }

    let banner = format!("{} — main menu", context.state.store.name);
    let selection = MainMenu::new().show(&banner).map_err(|err| match err {
        MenuError::Interrupted => CommandError::Message("Menu interrupted.".into()),
        MenuError::Io(err) => CommandError::Io(err),
    })?;

    let Some(line) = selection else {
        return Ok(());
    };
    // Menu entries are fixed command lines with no quoting to worry about.
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((command, args)) = tokens.split_first() else {
        return Ok(());
    };
    match context.dispatch(command, args)? {
        LoopControl::Exit => Err(CommandError::ExitRequested),
        LoopControl::Continue => Ok(()),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    Ok(())
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.state.gate().is_logged_in() {
        io::print_info("Already logged in.");
        return Ok(());
    }
    let password = match args.first() {
        Some(password) => password.to_string(),
        None if context.mode() == CliMode::Interactive => forms::login_prompt(&context.theme)?,
        None => {
            return Err(CommandError::InvalidArguments(
                "usage: login <password>".into(),
            ))
        }
    };
    context.state.gate_mut().login(&password)?;
    io::print_success("Login successful. Admin views unlocked.");
    Ok(())
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.state.gate_mut().logout();
    io::print_info("Logged out.");
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
