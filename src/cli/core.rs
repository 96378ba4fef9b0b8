use std::io;

use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use uuid::Uuid;

use crate::auth::AuthError;
use crate::cli::commands::{self, CommandRegistry};
use crate::cli::io as cli_io;
use crate::cli::state::CliState;
use crate::config::{Config, ConfigManager};
use crate::demo;
use crate::errors::ShopError;
use crate::services::ServiceError;
use crate::storefront::CheckoutError;

/// How the shell was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Admin access required. Use `login` first.")]
    NotLoggedIn,
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Shop(#[from] ShopError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Shop(err) => CommandError::Shop(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

impl From<CheckoutError> for CommandError {
    fn from(err: CheckoutError) -> Self {
        CommandError::Message(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

/// Carries the runtime state, command registry, and prompt theme through
/// the shell loop.
pub struct ShellContext {
    pub(crate) state: CliState,
    registry: CommandRegistry,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
    mode: CliMode,
}

impl ShellContext {
    pub(crate) fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = load_config();
        let store = demo::sample_store(Local::now().date_naive());
        Ok(Self {
            state: CliState::new(store, config),
            registry: CommandRegistry::new(commands::all_definitions()),
            theme: ColorfulTheme::default(),
            running: true,
            mode,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Shell prompt, marking whether the admin gate is open.
    pub(crate) fn prompt(&self) -> String {
        if self.state.gate().is_logged_in() {
            format!("{} (admin)> ", self.state.store.name)
        } else {
            format!("{}> ", self.state.store.name)
        }
    }

    /// Local calendar date used as "now" for period-scoped reports.
    pub(crate) fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    pub(crate) fn require_admin(&self) -> Result<(), CommandError> {
        if self.state.gate().is_logged_in() {
            Ok(())
        } else {
            Err(CommandError::NotLoggedIn)
        }
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let handler = self.registry.get(command).map(|definition| definition.handler);
        if let Some(handler) = handler {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(command);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };
        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }
        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &args)
    }
}

fn load_config() -> Config {
    match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            cli_io::print_warning(format!("Could not load configuration: {err}. Using defaults."));
            Config::default()
        }
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_quantity(input: &str) -> Result<u32, CommandError> {
    let quantity: u32 = input
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid quantity `{}`", input)))?;
    if quantity == 0 {
        return Err(CommandError::InvalidArguments(
            "Quantity must be at least 1".into(),
        ));
    }
    Ok(quantity)
}

pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    input
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))
}

pub(crate) fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_shell_dispatches_and_suggests() {
        let mut context = ShellContext::new(CliMode::Script).unwrap();
        assert_eq!(context.process_line("version").unwrap(), LoopControl::Continue);
        // Unknown commands never abort the loop.
        assert_eq!(context.process_line("verison").unwrap(), LoopControl::Continue);
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
    }

    #[test]
    fn admin_commands_are_gated_until_login() {
        let mut context = ShellContext::new(CliMode::Script).unwrap();
        let err = context
            .dispatch("product", &["list"])
            .expect_err("gated command must fail");
        assert!(matches!(err, CommandError::NotLoggedIn));

        context
            .process_line(&format!("login {}", crate::config::DEFAULT_ADMIN_PASSWORD))
            .unwrap();
        context.dispatch("product", &["list"]).unwrap();
    }

    #[test]
    fn parse_helpers_reject_malformed_input() {
        assert!(parse_date("2026-03-01").is_ok());
        assert!(parse_date("03/01/2026").is_err());
        assert!(parse_quantity("0").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
