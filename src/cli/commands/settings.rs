use gofinances_core::Locale;

use crate::cli::context::ShellContext;
use crate::cli::error::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::render;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "categories",
            "Show the category catalog",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "user",
            "Show or switch the active user",
            "user [id]",
            cmd_user,
        ),
        CommandEntry::new(
            "locale",
            "Show or change display locale and currency",
            "locale [pt-BR|en-US] [currency]",
            cmd_locale,
        ),
    ]
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    for line in render::catalog_lines(context.catalog) {
        output::line(line);
    }
    Ok(())
}

fn cmd_user(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            io::print_info(format!("Active user: {}", context.config.active_user));
            let others: Vec<String> = context
                .store
                .users()?
                .into_iter()
                .filter(|user| *user != context.config.active_user)
                .collect();
            if !others.is_empty() {
                io::print_info(format!("Other stored users: {}", others.join(", ")));
            }
            Ok(())
        }
        [id] => {
            let id = id.trim();
            if id.is_empty() {
                return Err(CommandError::InvalidArguments("user id must not be empty".into()));
            }
            context.switch_user(id)?;
            io::print_success(format!("Active user is now `{id}`."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments("usage: user [id]".into())),
    }
}

fn cmd_locale(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(tag) = args.first() else {
        io::print_info(format!(
            "Locale: {}, currency: {}",
            context.formatter.locale().tag(),
            context.formatter.currency()
        ));
        return Ok(());
    };
    if args.len() > 2 {
        return Err(CommandError::InvalidArguments(
            "usage: locale [pt-BR|en-US] [currency]".into(),
        ));
    }
    let locale = Locale::from_tag(tag).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unsupported locale `{tag}` (pt-BR or en-US)"))
    })?;
    context.switch_locale(locale, args.get(1).copied())?;
    io::print_success(format!(
        "Locale set to {} ({}).",
        locale.tag(),
        context.formatter.currency()
    ));
    Ok(())
}
