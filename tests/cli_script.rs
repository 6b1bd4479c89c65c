use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;

fn shell(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gofinances_cli").unwrap();
    cmd.env("GOFINANCES_HOME", home.path())
        .env("GOFINANCES_CLI_SCRIPT", "1")
        .env("GOFINANCES_TODAY", "2021-04-13")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn seed(home: &TempDir, user: &str, records: serde_json::Value) {
    let key = format!("@gofinances:transactions_user:{user}");
    let store = json!({ key: records.to_string() });
    home.child("data/storage.json")
        .write_str(&store.to_string())
        .unwrap();
}

fn sample_records() -> serde_json::Value {
    json!([
        {
            "id": "1",
            "name": "Desenvolvimento de site",
            "type": "up",
            "amount": "17400",
            "category": "salary",
            "date": "2021-04-13T12:00:00.000Z"
        },
        {
            "id": "2",
            "name": "Hamburgueria Pizzy",
            "type": "down",
            "amount": "59",
            "category": "food",
            "date": "2021-04-03T12:00:00.000Z"
        },
        {
            "id": "3",
            "name": "Aluguel do apartamento",
            "type": "down",
            "amount": "1200",
            "category": "housing",
            "date": "2021-04-01T12:00:00.000Z"
        }
    ])
}

#[test]
fn register_persists_and_dashboard_reports_it() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin("register \"Desenvolvimento de site\" up 17400 salary\ndashboard\nexit\n")
        .assert()
        .success()
        .stdout(contains("Registered `Desenvolvimento de site`"))
        .stdout(contains("R$ 17.400,00"))
        .stdout(contains("Última entrada dia 13 de abril"))
        .stdout(contains("Não há transações"));

    let stored = std::fs::read_to_string(home.path().join("data/storage.json")).unwrap();
    assert!(stored.contains("@gofinances:transactions_user:default"));
    assert!(stored.contains("2021-04-13"));
}

#[test]
fn seeded_store_renders_listing_and_resume() {
    let home = TempDir::new().unwrap();
    seed(&home, "default", sample_records());

    shell(&home)
        .write_stdin("list\nresume\nresume next\n")
        .assert()
        .success()
        .stdout(contains("13/04/21  Desenvolvimento de site"))
        .stdout(contains("- R$ 59,00"))
        .stdout(contains("== abril, 2021 =="))
        .stdout(contains("Alimentação"))
        .stdout(contains("95.31%"))
        .stdout(contains("== maio, 2021 =="))
        .stdout(contains("Não há transações"));
}

#[test]
fn corrupt_records_do_not_stop_the_shell() {
    let home = TempDir::new().unwrap();
    let key = "@gofinances:transactions_user:default";
    home.child("data/storage.json")
        .write_str(&json!({ key: "not json at all" }).to_string())
        .unwrap();

    shell(&home)
        .write_stdin("dashboard\nlist\n")
        .assert()
        .success()
        .stdout(contains("R$ 0,00"))
        .stdout(contains("No transactions stored for `default`."));
}

#[test]
fn unreadable_store_file_still_renders_the_dashboard() {
    let home = TempDir::new().unwrap();
    home.child("data/storage.json").write_str("{ truncated").unwrap();

    shell(&home)
        .write_stdin("dashboard\nregister Uber down 20 car\n")
        .assert()
        .success()
        .stdout(contains("R$ 0,00"));

    home.child("data/storage.json")
        .assert(predicate::str::diff("{ truncated"));
}

#[test]
fn bad_input_is_reported_and_the_loop_continues() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin("dashbord\nregister lunch\nresume 2021-13\ncategories\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `dashboard`?"))
        .stderr(contains("usage: register"))
        .stderr(contains("invalid month `2021-13`"))
        .stdout(contains("Moradia"));
}

#[test]
fn locale_and_user_choices_survive_restarts() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin("user maria\nlocale en-US USD\nregister Paycheck up 1200.5 salary\n")
        .assert()
        .success();

    home.child("config.json")
        .assert(predicate::str::contains("\"active_user\": \"maria\""));

    shell(&home)
        .write_stdin("user\ndashboard\n")
        .assert()
        .success()
        .stdout(contains("Active user: maria"))
        .stdout(contains("$1,200.50"))
        .stdout(contains("Last inflow on April 13"));
}

#[test]
fn version_reports_package_version() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains(format!("gofinances {}", env!("CARGO_PKG_VERSION"))));
}
