use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_demo_end_to_end() {
    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.arg("demo").arg("--instant");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Purchase Amount: $299.99"))
        .stdout(predicate::str::contains("Current Payment Method: Credit Card"))
        .stdout(predicate::str::contains("Current Payment Method: Bank Transfer"))
        .stdout(predicate::str::contains(
            "Expected error: Payment strategy not set",
        ))
        .stdout(predicate::str::contains("=== Strategy Pattern Demo Complete ==="));
}

#[test]
fn test_demo_custom_amount_over_every_limit() {
    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.args(["demo", "--instant", "--amount", "20000"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment validation failed - payment not processed"))
        .stdout(predicate::str::contains("Payment Result: SUCCESS").not());
}

#[test]
fn test_batch_end_to_end() {
    let file = common::write_requests(&[
        "credit_card, 299.99, 1234567890123456, 5000, John Doe, 12/25, 123, ,",
        "credit_card, 299.99, 1111222233334444, 100, Jane Smith, 06/26, 456, ,",
        "paypal, 299.99, john.doe@email.com, 1500",
        "bank_transfer, 1.00, 9876543210, 10000, , , , Chase Bank, 021000021",
    ]);

    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.arg("batch").arg(file.path()).arg("--instant");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("method,amount,approved,reason,reference"))
        .stdout(predicate::str::contains("Credit Card,299.99,true,,****3456"))
        .stdout(predicate::str::contains("Credit Card,299.99,false,limit_exceeded,"))
        .stdout(predicate::str::contains("PayPal,299.99,true,,john.doe@email.com"))
        .stdout(predicate::str::contains("Bank Transfer,1.00,true,,****3210"));
}

#[test]
fn test_batch_skips_malformed_rows() {
    let file = common::write_requests(&[
        "cheque, 10, 123456, 100",
        "paypal, not_a_number, john.doe@email.com, 1500",
        "credit_card, 10, 1234567890123456, 5000",
        "paypal, 10, john.doe@email.com, 1500",
    ]);

    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.arg("batch").arg(file.path()).arg("--instant");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading request"))
        .stderr(predicate::str::contains("missing field `holder`"))
        .stdout(predicate::str::contains("PayPal,10.00,true,,john.doe@email.com"));
}

#[test]
fn test_batch_with_only_malformed_rows_prints_header() {
    let file = common::write_requests(&["cheque, 10, 123456, 100"]);

    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.arg("batch").arg(file.path()).arg("--instant");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading request"))
        .stdout(predicate::eq("method,amount,approved,reason,reference\n"));
}

#[test]
fn test_batch_sub_cent_amounts_are_not_rounded() {
    let file = common::write_requests(&[
        "bank_transfer, 0.999, 9876543210, 10000, , , , Chase Bank, 021000021",
        "credit_card, 300.004, 1234567890123456, 300, John Doe, 12/25, 123, ,",
    ]);

    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.arg("batch").arg(file.path()).arg("--instant");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bank Transfer,0.999,false,below_minimum,"))
        .stdout(predicate::str::contains("Credit Card,300.004,false,limit_exceeded,"));
}

#[test]
fn test_batch_with_latency_profile() {
    let file = common::write_requests(&[
        "bank_transfer, 50, 9876543210, 10000, , , , Chase Bank, 021000021",
    ]);
    let mut profile = NamedTempFile::new().unwrap();
    writeln!(
        profile,
        r#"{{ "credit_card_ms": 0, "paypal_ms": 0, "bank_transfer_ms": 1 }}"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.arg("batch")
        .arg(file.path())
        .arg("--latency-profile")
        .arg(profile.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bank Transfer,50.00,true,,****3210"));
}

#[test]
fn test_batch_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.args(["batch", "does/not/exist.csv", "--instant"]);

    cmd.assert().failure();
}

#[test]
fn test_instant_conflicts_with_latency_profile() {
    let mut cmd = Command::new(cargo_bin!("strategy-payments"));
    cmd.args([
        "demo",
        "--instant",
        "--latency-profile",
        "profile.json",
    ]);

    cmd.assert().failure();
}
