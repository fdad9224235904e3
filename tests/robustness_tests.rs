use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_malformed_rows_are_skipped() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "gateway, amount").unwrap();
    writeln!(csv, "stripe, 1.0").unwrap();
    // Not a number
    writeln!(csv, "stripe, not_a_number").unwrap();
    // Negative
    writeln!(csv, "razorpay, -3").unwrap();
    writeln!(csv, "razorpay, 2").unwrap();

    let mut cmd = Command::new(cargo_bin!("paydispatch"));
    cmd.env_remove("PAYDISPATCH_GATEWAY")
        .arg("batch")
        .arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment"))
        .stdout(predicate::str::contains("Stripe,1\n"))
        .stdout(predicate::str::contains("Razorpay,2\n"))
        .stdout(predicate::str::contains("-3").not());
}

#[test]
fn test_unknown_gateway_rows_are_skipped() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "gateway, amount").unwrap();
    writeln!(csv, "paypal, 10").unwrap();
    writeln!(csv, "razorpay, 20").unwrap();

    let mut cmd = Command::new(cargo_bin!("paydispatch"));
    cmd.env_remove("PAYDISPATCH_GATEWAY")
        .arg("batch")
        .arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error processing payment"))
        .stderr(predicate::str::contains("paypal"))
        .stdout(predicate::str::contains("Razorpay,20\n"));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("paydispatch"));
    cmd.args(["batch", "does/not/exist.csv"]);

    cmd.assert().failure();
}
