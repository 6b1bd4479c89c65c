use std::str::FromStr;

use gofinances_core::{
    CurrencyFormatter, DateFormatter, Highlights, Locale, NewTransaction, TransactionRepository,
};
use gofinances_domain::{Catalog, TransactionType};

use crate::cli::context::{CliMode, ShellContext};
use crate::cli::error::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "register <title> <up|down> <amount> <category>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "register",
        "Record a new transaction dated today",
        USAGE,
        cmd_register,
    )
    .with_aliases(&["add"])]
}

fn cmd_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = match args {
        [title, kind, amount, category] => NewTransaction {
            title: title.trim().to_string(),
            kind: parse_kind(kind)?,
            amount: parse_amount(amount, context.formatter.locale())?,
            category: resolve_category(context.catalog, category)?,
        },
        [] if context.mode == CliMode::Interactive => prompt_draft(context)?,
        _ => {
            return Err(CommandError::InvalidArguments(format!("usage: {USAGE}")));
        }
    };
    if draft.title.is_empty() {
        return Err(CommandError::InvalidArguments("title must not be empty".into()));
    }

    let record = TransactionRepository::new(&context.store).register(
        &context.config.active_user,
        draft,
        context.clock.as_ref(),
    )?;
    context.highlights = Highlights::NotComputed;

    let amount = record
        .amount_value()
        .map(|value| context.formatter.format_amount(value))
        .unwrap_or_else(|| record.amount.clone());
    io::print_success(format!(
        "Registered `{}` ({} {}) on {}.",
        record.title,
        record.kind,
        amount,
        context.formatter.format_short_date(record.date)
    ));
    Ok(())
}

fn prompt_draft(context: &ShellContext) -> Result<NewTransaction, CommandError> {
    let title = io::prompt_text(&context.theme, "Title")?;
    let kinds = [TransactionType::Inflow, TransactionType::Outflow];
    let kind = kinds[io::prompt_select(&context.theme, "Type", &kinds)?];
    let amount = loop {
        let raw = io::prompt_text(&context.theme, "Amount")?;
        match parse_amount(&raw, context.formatter.locale()) {
            Ok(value) => break value,
            Err(err) => io::print_warning(err),
        }
    };
    let categories: Vec<&str> = context.catalog.iter().map(|c| c.name.as_str()).collect();
    let choice = io::prompt_select(&context.theme, "Category", &categories)?;
    let category = context
        .catalog
        .iter()
        .nth(choice)
        .map(|c| c.key.clone())
        .ok_or_else(|| CommandError::InvalidArguments("no category selected".into()))?;

    Ok(NewTransaction {
        title,
        kind,
        amount,
        category,
    })
}

fn parse_kind(raw: &str) -> Result<TransactionType, CommandError> {
    TransactionType::from_str(raw).map_err(CommandError::InvalidArguments)
}

/// Accepts `1200.50` everywhere, plus `1.200,50` under pt-BR and `1,200.50` under en-US.
///
/// Under pt-BR a dot followed by exactly three digits is a thousands separator
/// (`1.200` is twelve hundred), while `59.9` keeps the dot as a decimal point.
pub(crate) fn parse_amount(raw: &str, locale: Locale) -> Result<f64, CommandError> {
    let trimmed = raw.trim();
    let normalized = match locale {
        Locale::PtBr if trimmed.contains(',') => trimmed.replace('.', "").replace(',', "."),
        Locale::PtBr if is_dotted_thousands(trimmed) => trimmed.replace('.', ""),
        Locale::PtBr => trimmed.to_string(),
        Locale::EnUs => trimmed.replace(',', ""),
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "invalid amount `{raw}`: expected a non-negative number"
            ))
        })
}

/// `1.200` or `1.234.567`: a 1-3 digit head followed by dot-separated 3-digit groups.
fn is_dotted_thousands(text: &str) -> bool {
    let mut groups = text.split('.');
    let head_ok = groups
        .next()
        .is_some_and(|head| (1..=3).contains(&head.len()) && head.bytes().all(|b| b.is_ascii_digit()));
    let mut tail = groups.peekable();
    head_ok
        && tail.peek().is_some()
        && tail.all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Catalog key for `raw`, matched against keys and display names.
pub(crate) fn resolve_category(catalog: &Catalog, raw: &str) -> Result<String, CommandError> {
    catalog
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(raw) || c.name.to_lowercase() == raw.to_lowercase())
        .map(|c| c.key.clone())
        .ok_or_else(|| {
            let keys: Vec<&str> = catalog.iter().map(|c| c.key.as_str()).collect();
            CommandError::InvalidArguments(format!(
                "unknown category `{raw}` (one of: {})",
                keys.join(", ")
            ))
        })
}
