//! Terminal colouring. Disabled when stdout is not a terminal or `NO_COLOR`
//! is set, so piped output and `--format json` stay plain.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use quotedesk_core::FeedbackTone;
use std::sync::OnceLock;

static COLORS: OnceLock<bool> = OnceLock::new();

pub fn colors_enabled() -> bool {
    *COLORS.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
}

pub fn bold(text: &str) -> String {
    if colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if colors_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn cyan(text: &str) -> String {
    if colors_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Status label coloured like the dashboard badges.
pub fn status(label: &str) -> String {
    if !colors_enabled() {
        return label.to_string();
    }
    match label {
        "completed" => label.green().to_string(),
        "pending" => label.yellow().to_string(),
        _ => label.to_string(),
    }
}

pub fn tone(text: &str, tone: FeedbackTone) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    match tone {
        FeedbackTone::Ok => text.green().to_string(),
        FeedbackTone::Warning => text.yellow().to_string(),
        FeedbackTone::Error => text.red().to_string(),
        FeedbackTone::None => text.to_string(),
    }
}
