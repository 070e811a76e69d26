//! End-to-end tests for the growthspring binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "data": {
        "monthlySummaries": {
            "January 2025": {
                "records": [
                    {"date": "2025-01-10", "type": "Deposit", "name": "A. Member", "amount": "1,234", "destination": "Club Account"},
                    {"date": "2025-01-15", "type": "Loan", "name": "B. Member", "amount": 5000, "source": "Club Account"}
                ]
            },
            "February 2025": {
                "records": [
                    {"date": "2025-02-03", "type": "Loan Payment", "name": "B. Member", "amount": 800, "destination": "Club Account"}
                ]
            }
        },
        "clubFundAnnualSummaries": {
            "2024": {
                "records": [
                    {"date": "2024-06-01", "name": "Donation", "reason": "Annual gala", "amount": 50000, "account": "Main"}
                ]
            }
        }
    }
}"#;

fn cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("growthspring").unwrap();
    cmd.env("GROWTHSPRING_DATA_DIR", config_dir.path());
    cmd
}

fn write_snapshot(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("dashboard.json");
    std::fs::write(&path, SNAPSHOT).unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    let config = TempDir::new().unwrap();
    cmd(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_config_prints_paths() {
    let config = TempDir::new().unwrap();
    cmd(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("GrowthSpring CLI Configuration"))
        .stdout(predicate::str::contains("Brand name"));
}

#[test]
fn test_report_financial() {
    let config = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let snapshot = write_snapshot(&data);

    cmd(&config)
        .args(["report", "financial", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2025"))
        .stdout(predicate::str::contains("Total Inflow:"))
        .stdout(predicate::str::contains("1,234"));
}

#[test]
fn test_report_with_range_filter() {
    let config = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let snapshot = write_snapshot(&data);

    cmd(&config)
        .args(["report", "financial", "--from", "February 2025", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2025"))
        .stdout(predicate::str::contains("January 2025").not());
}

#[test]
fn test_export_csv() {
    let config = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let snapshot = write_snapshot(&data);
    let output = data.path().join("out.csv");

    cmd(&config)
        .args(["export", "financial", "--format", "csv", "--snapshot"])
        .arg(&snapshot)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 period(s)"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("A. Member"));
}

#[test]
fn test_export_workbook_and_document() {
    let config = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let snapshot = write_snapshot(&data);

    let xlsx = data.path().join("fund.xlsx");
    cmd(&config)
        .args(["export", "fund", "--format", "workbook", "--snapshot"])
        .arg(&snapshot)
        .arg("--output")
        .arg(&xlsx)
        .assert()
        .success();
    assert!(xlsx.exists());

    let pdf = data.path().join("fund.pdf");
    cmd(&config)
        .args(["export", "fund", "--format", "document", "--snapshot"])
        .arg(&snapshot)
        .arg("--output")
        .arg(&pdf)
        .assert()
        .success();
    let bytes = std::fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_missing_snapshot_fails() {
    let config = TempDir::new().unwrap();
    cmd(&config)
        .args(["report", "financial", "--snapshot", "/nonexistent/dashboard.json"])
        .assert()
        .failure();
}

#[test]
fn test_api_error_envelope_fails() {
    let config = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let path = data.path().join("error.json");
    std::fs::write(&path, r#"{"error": "Unauthorized"}"#).unwrap();

    cmd(&config)
        .args(["report", "financial", "--snapshot"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unauthorized"));
}
