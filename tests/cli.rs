//! End-to-end tests for the `ledger` binary

use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::prelude::*;
use tempfile::TempDir;

use hearth_ledger::models::{Category, Expense, Money, Payer};
use hearth_ledger::storage::HouseholdSnapshot;

struct Household {
    config_dir: TempDir,
    data_file: std::path::PathBuf,
}

fn household() -> Household {
    let config_dir = TempDir::new().unwrap();
    let alice = Payer::new("Alice");
    let bob = Payer::new("Bob");
    let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();

    let mut removed = Expense::new(bob.id, day(9), Money::from_cents(99900), "Rent");
    removed.deleted = true;

    let snapshot = HouseholdSnapshot {
        categories: vec![
            Category::with_display_order("Rent", 0),
            Category::with_display_order("Groceries", 1),
        ],
        expenses: vec![
            Expense::new(alice.id, day(3), Money::from_cents(4000), "Groceries"),
            Expense::new(alice.id, day(3), Money::from_cents(3000), "Rent"),
            Expense::new(bob.id, day(20), Money::from_cents(2000), "Groceries"),
            removed,
        ],
        payers: vec![alice, bob],
    };

    let data_file = config_dir.path().join("household.json");
    std::fs::write(&data_file, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    Household {
        config_dir,
        data_file,
    }
}

fn ledger(household: &Household) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("HEARTH_LEDGER_DIR", household.config_dir.path())
        .env_remove("HEARTH_LEDGER_DATA")
        .env_remove("RUST_LOG")
        .arg("--data")
        .arg(&household.data_file);
    cmd
}

#[test]
fn balance_names_who_owes_whom() {
    let household = household();

    ledger(&household)
        .args(["report", "balance", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob owes Alice $25.00"));
}

#[test]
fn summary_ignores_deleted_expenses() {
    let household = household();

    ledger(&household)
        .args(["report", "summary", "-m", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $90.00"))
        .stdout(predicate::str::contains("$999.00").not());
}

#[test]
fn breakdown_as_json() {
    let household = household();

    let output = ledger(&household)
        .args(["--format", "json", "report", "breakdown", "--month", "2025-01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items[0]["name"], "Groceries");
    assert_eq!(items[0]["amount"], 6000);
    assert_eq!(items[0]["percentage"], 67);
    assert_eq!(items[1]["name"], "Rent");
    assert_eq!(items[1]["percentage"], 33);
}

#[test]
fn trend_lists_requested_months() {
    let household = household();

    let output = ledger(&household)
        .args(["--format", "json", "report", "trend", "-m", "2025-02", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let months: Vec<&str> = report["months"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["month"].as_str().unwrap())
        .collect();
    assert_eq!(months, vec!["2024-12", "2025-01", "2025-02"]);
    assert_eq!(report["months"][1]["total"], 9000);
}

#[test]
fn month_report_exports_csv() {
    let household = household();
    let out = household.config_dir.path().join("january.csv");

    ledger(&household)
        .args(["report", "month", "--month", "2025-01", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Month report exported to"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Month,Section,Name,Amount,Detail"));
    assert!(csv.contains("2025-01,settlement,Bob -> Alice,25.00,"));
}

#[test]
fn invalid_month_is_rejected() {
    let household = household();

    ledger(&household)
        .args(["report", "summary", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month: 13"));
}

#[test]
fn missing_data_file_fails() {
    let household = household();

    Command::cargo_bin("ledger")
        .unwrap()
        .env("HEARTH_LEDGER_DIR", household.config_dir.path())
        .env_remove("HEARTH_LEDGER_DATA")
        .args(["report", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load household data"));
}

#[test]
fn config_shows_settings() {
    let household = household();

    ledger(&household)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Split policy:    rounded-equal"))
        .stdout(predicate::str::contains("Trend months:    6"));
}

#[test]
fn split_flag_takes_known_policies_only() {
    let household = household();

    ledger(&household)
        .args(["--format", "json", "report", "balance", "-m", "2025-01"])
        .args(["--split", "largest-remainder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"split_policy\": \"largest_remainder\""));

    ledger(&household)
        .args(["report", "balance", "-m", "2025-01", "--split", "halves"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'halves'"));
}

#[test]
fn trend_before_year_one_is_rejected() {
    let household = household();

    ledger(&household)
        .args(["report", "trend", "-m", "0001-03", "-n", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Year out of range: 0"));

    ledger(&household)
        .args(["report", "trend", "-m", "2025-01", "-n", "3200000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Year out of range"));
}

#[test]
fn config_set_persists_settings() {
    let household = household();

    ledger(&household)
        .args(["config", "set", "--split", "largest-remainder", "--currency", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));
    assert!(household.config_dir.path().join("config.json").exists());

    ledger(&household)
        .args(["report", "balance", "-m", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob owes Alice €25.00"));

    ledger(&household)
        .args(["config", "reset"])
        .assert()
        .success();
    ledger(&household)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Split policy:    rounded-equal"));
}
