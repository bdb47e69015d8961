use assert_cmd::Command;
use predicates::prelude::*;

// These run the binary with real timers; each scenario takes a few seconds.

#[test]
fn test_manual_scenario_end_to_end() {
    Command::cargo_bin("remit-hub")
        .unwrap()
        .args(["--scenario", "manual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("screen: PAYMENT_FORM"))
        .stdout(predicate::str::contains("UETR: a2b7c1d8-4421-49f9-91c0-"))
        .stdout(predicate::str::contains("SUCCESS: payment submitted"))
        .stdout(predicate::str::contains("advice ADVC-2026-001"))
        .stdout(predicate::str::contains(
            "tracking TXN9001: current stage Intermediary Bank Routing",
        ));
}

#[test]
fn test_pay_again_scenario() {
    Command::cargo_bin("remit-hub")
        .unwrap()
        .args(["--scenario", "pay-again"])
        .assert()
        .success()
        .stdout(predicate::str::contains("screen: PAYMENT_FORM"))
        .stdout(predicate::str::contains("SUCCESS: payment submitted"));
}

#[test]
fn test_rejected_credentials() {
    Command::cargo_bin("remit-hub")
        .unwrap()
        .args(["--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Incorrect username or password. Please try again.",
        ));
}
