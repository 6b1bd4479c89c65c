use colored::{Color, Colorize};
use gofinances_core::HighlightKind;
use gofinances_domain::TransactionType;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Forces colors off when `enabled` is false; otherwise defers to the terminal.
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

fn style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("== {} ==", text.trim()).bold().to_string(),
        MessageKind::Info => format!("{} {}", label(kind), text),
        MessageKind::Success => format!("{} {}", label(kind), text).bright_green().to_string(),
        MessageKind::Warning => format!("{} {}", label(kind), text).bright_yellow().to_string(),
        MessageKind::Error => format!("{} {}", label(kind), text).bright_red().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        MessageKind::Error => eprintln!("{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Unlabelled line, used for rendered tables.
pub fn line(text: impl fmt::Display) {
    println!("{text}");
}

pub fn flow_color(kind: TransactionType) -> Color {
    match kind {
        TransactionType::Inflow => Color::Green,
        TransactionType::Outflow => Color::Red,
    }
}

pub fn highlight_color(kind: HighlightKind) -> Option<Color> {
    match kind {
        HighlightKind::Up => Some(Color::Green),
        HighlightKind::Down => Some(Color::Red),
        HighlightKind::Total => None,
    }
}

pub fn painted(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}
