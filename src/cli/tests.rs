use chrono::NaiveDate;
use gofinances_config::ConfigManager;
use gofinances_core::{FixedClock, Locale, Period};
use gofinances_domain::TransactionType;
use tempfile::TempDir;

use super::context::{CliMode, LoopControl, ShellContext};
use super::error::CommandError;
use super::shell::handle_line;

fn shell() -> (TempDir, ShellContext) {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 6, 9).unwrap());
    let context =
        ShellContext::with_parts(CliMode::Script, manager, Box::new(clock)).expect("context");
    (dir, context)
}

fn run(context: &mut ShellContext, lines: &[&str]) {
    for line in lines {
        handle_line(context, line).expect(line);
    }
}

#[test]
fn starts_on_the_current_month_without_highlights() {
    let (_dir, context) = shell();
    assert_eq!(context.period, Period::new(2021, 6).unwrap());
    assert!(!context.highlights.is_computed());
    assert_eq!(context.config.active_user, "default");
}

#[test]
fn register_then_dashboard_reflects_new_records() {
    let (_dir, mut context) = shell();
    run(
        &mut context,
        &[
            "register Salário up 5000 salary",
            "register \"Pizza de sexta\" down 59,90 food",
            "dashboard",
        ],
    );

    let records = context.records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].title, "Pizza de sexta");
    assert_eq!(records[1].kind, TransactionType::Outflow);
    assert_eq!(records[1].amount_value(), Some(59.9));

    let cards = context.highlights.cards().expect("dashboard computed");
    assert_eq!(cards.entries.amount, "R$ 5.000,00");
    assert_eq!(cards.total.amount, "R$ 4.940,10");
}

#[test]
fn registering_invalidates_computed_highlights() {
    let (_dir, mut context) = shell();
    run(&mut context, &["dashboard"]);
    assert!(context.highlights.is_computed());

    run(&mut context, &["register Uber down 20 car"]);
    assert!(!context.highlights.is_computed());
}

#[test]
fn register_rejects_bad_arguments() {
    let (_dir, mut context) = shell();
    for line in [
        "register only-title",
        "register Uber sideways 20 car",
        "register Uber down -20 car",
        "register Uber down 20 pets",
    ] {
        let err = handle_line(&mut context, line).expect_err(line);
        assert!(matches!(err, CommandError::InvalidArguments(_)), "{line}");
    }
    assert!(context.records().unwrap().is_empty());
}

#[test]
fn resume_navigates_months() {
    let (_dir, mut context) = shell();
    run(&mut context, &["resume prev", "resume prev"]);
    assert_eq!(context.period, Period::new(2021, 4).unwrap());

    run(&mut context, &["resume next"]);
    assert_eq!(context.period, Period::new(2021, 5).unwrap());

    run(&mut context, &["resume 2020-12", "resume next"]);
    assert_eq!(context.period, Period::new(2021, 1).unwrap());

    run(&mut context, &["resume today"]);
    assert_eq!(context.period, Period::new(2021, 6).unwrap());

    assert!(matches!(
        handle_line(&mut context, "resume 2021-13"),
        Err(CommandError::InvalidArguments(_))
    ));
}

#[test]
fn users_keep_separate_lists_and_persist() {
    let (dir, mut context) = shell();
    run(
        &mut context,
        &["register Aluguel down 1200 housing", "user maria"],
    );
    assert!(context.records().unwrap().is_empty());

    run(&mut context, &["register Freela up 800 salary"]);
    assert_eq!(context.records().unwrap().len(), 1);

    let saved = ConfigManager::with_base_dir(dir.path().to_path_buf())
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(saved.active_user, "maria");
    let mut users = context.store.users().unwrap();
    users.sort();
    assert_eq!(users, ["default", "maria"]);
}

#[test]
fn locale_switch_changes_formatting() {
    let (_dir, mut context) = shell();
    run(&mut context, &["register Salary up 1200.5 salary", "locale en-US USD", "dashboard"]);

    assert_eq!(context.formatter.locale(), Locale::EnUs);
    assert_eq!(context.config.currency, "USD");
    let cards = context.highlights.cards().unwrap();
    assert_eq!(cards.entries.amount, "$1,200.50");

    assert!(handle_line(&mut context, "locale fr-FR").is_err());
}

#[test]
fn exit_and_unknown_commands() {
    let (_dir, mut context) = shell();
    assert_eq!(
        handle_line(&mut context, "dashbord").unwrap(),
        LoopControl::Continue
    );
    assert_eq!(handle_line(&mut context, "# note").unwrap(), LoopControl::Continue);
    assert_eq!(handle_line(&mut context, "quit").unwrap(), LoopControl::Exit);
    assert!(!context.running);
}
