use std::str::FromStr;

use gofinances_core::{resume, transaction_listing, Highlights, Period};

use crate::cli::context::ShellContext;
use crate::cli::error::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::{self, flow_color, highlight_color, painted};
use crate::cli::registry::CommandEntry;
use crate::cli::render;

const FALLBACK_WIDTH: usize = 80;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Show inflow, outflow and net total",
            "dashboard",
            cmd_dashboard,
        ),
        CommandEntry::new(
            "list",
            "List stored transactions, newest first",
            "list",
            cmd_list,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new(
            "resume",
            "Show a month's spending by category",
            "resume [next|prev|today|YYYY-MM]",
            cmd_resume,
        ),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let records = context.records()?;
    context.highlights = Highlights::compute(&records, &context.formatter);
    let Some(cards) = context.highlights.cards() else {
        return Ok(());
    };

    output::section(format!("Dashboard: {}", context.config.active_user));
    let locale = context.formatter.locale();
    for card in [&cards.entries, &cards.expenses, &cards.total] {
        let line = render::highlight_line(card, locale);
        output::line(painted(&line, highlight_color(card.kind)));
    }
    if cards.aggregate.skipped > 0 {
        io::print_warning(format!(
            "{} record(s) with an unreadable amount were left out.",
            cards.aggregate.skipped
        ));
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let records = context.records()?;
    let rows = transaction_listing(&records, context.catalog, &context.formatter);
    if rows.is_empty() {
        io::print_info(format!(
            "No transactions stored for `{}`.",
            context.config.active_user
        ));
        return Ok(());
    }

    output::section(format!("Transactions ({})", rows.len()));
    for row in &rows {
        output::line(painted(&render::listing_line(row), Some(flow_color(row.kind))));
    }
    Ok(())
}

fn cmd_resume(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(target) = args.first() {
        context.period = resolve_period(context, target)?;
    }
    let records = context.records()?;
    let view = resume(
        &records,
        context.period,
        context.catalog,
        &context.formatter,
    );

    output::section(&view.label);
    if view.is_empty() {
        io::print_info(context.formatter.no_movement_caption());
        return Ok(());
    }
    for line in render::resume_lines(&view, terminal_width()) {
        output::line(line);
    }
    Ok(())
}

fn resolve_period(context: &ShellContext, target: &str) -> Result<Period, CommandError> {
    match target.to_lowercase().as_str() {
        "next" | ">" => Ok(context.period.next()),
        "prev" | "previous" | "<" => Ok(context.period.previous()),
        "today" | "now" => Ok(Period::containing(context.clock.today())),
        other => Period::from_str(other).map_err(|_| {
            CommandError::InvalidArguments(format!(
                "invalid month `{target}` (use next, prev, today or YYYY-MM)"
            ))
        }),
    }
}

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns))
        .unwrap_or(FALLBACK_WIDTH)
}
