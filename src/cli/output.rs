use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Suppress colors and box-drawing characters.
    pub plain_mode: bool,
    /// Drop informational chatter, keep warnings and errors.
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let prefs = current_preferences();
    if prefs.plain_mode {
        return match kind {
            MessageKind::Section => format!("=== {} ===", text.trim()),
            MessageKind::Info => format!("INFO: {text}"),
            MessageKind::Success => format!("OK: {text}"),
            MessageKind::Warning => format!("WARNING: {text}"),
            MessageKind::Error => format!("ERROR: {text}"),
        };
    }
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
        MessageKind::Info => text.normal().to_string(),
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => text.yellow().to_string(),
        MessageKind::Error => text.red().bold().to_string(),
    }
}

pub fn info(message: impl fmt::Display) {
    if current_preferences().quiet_mode {
        return;
    }
    println!("{}", styled(MessageKind::Info, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", styled(MessageKind::Success, message));
}

pub fn warning(message: impl fmt::Display) {
    eprintln!("{}", styled(MessageKind::Warning, message));
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", styled(MessageKind::Error, message));
}

pub fn section(title: impl fmt::Display) {
    println!("{}", styled(MessageKind::Section, title));
}
