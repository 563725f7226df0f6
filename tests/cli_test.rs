use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("run").arg("tests/fixtures/library.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("contact João Silva registered"))
        .stdout(predicate::str::contains("book 'Dom Casmurro' registered"))
        .stdout(predicate::str::contains("item 'Drill' lent to Maria Santos"))
        .stdout(predicate::str::contains("item 'Drill' is already on loan"))
        .stdout(predicate::str::contains("item 'Dom Casmurro' returned"))
        .stdout(predicate::str::contains(
            "ID: 123 - 'Dom Casmurro' - kind: book - available",
        ))
        .stdout(predicate::str::contains("ID: 001 - 'Drill' - kind: tool - on loan"))
        .stdout(predicate::str::contains(
            "Item: 'Drill' - borrowed by Maria Santos (phone: 11999887755)",
        ))
        .stdout(predicate::str::contains("Item: 'Dom Casmurro' -").not());

    Ok(())
}

#[test]
fn test_demo_session() {
    let mut cmd = Command::new(cargo_bin!("lendlog"));
    cmd.arg("demo");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("item 'Dom Casmurro' lent to João Silva"))
        .stdout(predicate::str::contains("ID: 002 - 'Switch' - kind: videogame - available"))
        .stdout(predicate::str::is_match(
            r"Item: 'Drill' - borrowed by Maria Santos \(phone: 11999887755\) - lent: \d{2}/\d{2}/\d{4} - due: \d{2}/\d{2}/\d{4}",
        ).unwrap());
}

#[test]
fn test_demo_lists_loans_before_the_return() {
    let mut cmd = Command::new(cargo_bin!("lendlog"));
    cmd.arg("demo");

    // Both loans are listed, then the book comes back and shows as available.
    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"(?s)ID: 123 - 'Dom Casmurro' - kind: book - on loan.*Item: 'Dom Casmurro' - borrowed by João Silva.*item 'Dom Casmurro' returned.*ID: 123 - 'Dom Casmurro' - kind: book - available",
        ).unwrap());
}

#[test]
fn test_demo_json_has_one_report_per_stage() {
    let mut cmd = Command::new(cargo_bin!("lendlog"));
    cmd.arg("demo").arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stages: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let stages = stages.as_array().unwrap();

    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0]["active_loans"].as_array().unwrap().len(), 2);
    assert_eq!(stages[1]["outcomes"][0]["message"], "item 'Dom Casmurro' returned");
    assert_eq!(stages[1]["active_loans"].as_array().unwrap().len(), 1);
}

#[test]
fn test_missing_script_fails() {
    let mut cmd = Command::new(cargo_bin!("lendlog"));
    cmd.arg("run").arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
