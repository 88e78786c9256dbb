//! Integration tests for the `secirba` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn secirba() -> Command {
    let mut cmd = Command::cargo_bin("secirba").unwrap();
    cmd.env_remove("SECIRBA_CONFIG");
    cmd
}

#[test]
fn kirb_minimal() {
    secirba()
        .args(["kirb", "--rwa", "100", "--ead", "100", "--format", "minimal"])
        .assert()
        .success()
        .stdout("0.08\n");
}

#[test]
fn kirb_degenerate_pool_reports_zero() {
    secirba()
        .args(["kirb", "--rwa", "100", "--ead", "0", "-f", "minimal"])
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("EAD is not positive"));
}

#[test]
fn kirb_quiet_suppresses_warning() {
    secirba()
        .args(["kirb", "--ead", "0", "-f", "minimal", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn kssa_mezzanine() {
    secirba()
        .args(["kssa", "--k", "0.10", "--a", "0.05", "--d", "0.30", "--p", "0.5", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.0585"));
}

#[test]
fn kssa_rejects_zero_capital_base() {
    secirba()
        .args(["kssa", "--k", "0", "--a", "0.05", "--d", "0.30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be positive"));
}

#[test]
fn kssa_rejects_inverted_tranche() {
    secirba()
        .args(["kssa", "--a", "0.5", "--d", "0.4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tranche"));
}

#[test]
fn evaluate_straddling_tranche_json() {
    secirba()
        .args([
            "evaluate", "--k", "0.10", "--a", "0.05", "--d", "0.30", "--p", "0.5", "-f", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"regime\": 2"))
        .stdout(predicate::str::contains("\"risk_weight_percent\": 15.0"))
        .stdout(predicate::str::contains("\"p_raw\": null"));
}

#[test]
fn evaluate_within_capital_tranche() {
    secirba()
        .args(["evaluate", "--k", "0.35", "--a", "0.05", "--d", "0.30", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("regime"))
        .stdout(predicate::str::contains(",3,12.5,15.0,"));
}

#[test]
fn evaluate_degenerate_pool_fails() {
    secirba()
        .args(["evaluate", "--rwa", "10", "--ead", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("EAD"));
}

#[test]
fn evaluate_rejects_k_with_pool() {
    secirba()
        .args(["evaluate", "--k", "0.1", "--rwa", "10"])
        .assert()
        .failure();
}

#[test]
fn evaluate_calibrated_table() {
    secirba()
        .args([
            "evaluate",
            "--k",
            "0.10",
            "--calibrate",
            "--exposure",
            "retail",
            "--seniority",
            "senior",
            "--n",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tranche Evaluation"))
        .stdout(predicate::str::contains("retail / senior / granular"));
}

#[test]
fn param_retail_senior_floor_binds() {
    secirba()
        .args([
            "param",
            "--exposure",
            "retail",
            "--seniority",
            "senior",
            "--n",
            "30",
            "--lgd",
            "0.45",
            "--k",
            "0.10",
            "--maturity",
            "3",
            "-f",
            "minimal",
        ])
        .assert()
        .success()
        .stdout("0.3\n");
}

#[test]
fn param_rejects_maturity_out_of_range() {
    secirba()
        .args(["param", "--maturity", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid maturity"));
}

#[test]
fn param_rejects_fractional_effective_count() {
    for n in ["0.5", "0.01"] {
        secirba()
            .args(["param", "--exposure", "non-retail", "--n", n, "-f", "minimal"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid n"))
            .stderr(predicate::str::contains("Must be at least 1"));
    }
}

#[test]
fn evaluate_calibrated_rejects_fractional_effective_count() {
    secirba()
        .args(["evaluate", "--k", "0.1", "--calibrate", "--n", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be at least 1"));
}

#[test]
fn param_rejects_unknown_exposure() {
    secirba()
        .args(["param", "--exposure", "sovereign"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exposure type"));
}

#[test]
fn weight_within_capital_floored() {
    secirba()
        .args([
            "weight", "--k", "0.35", "--kssa", "0.5", "--a", "0.05", "--d", "0.30", "-f", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"regime\": 3"))
        .stdout(predicate::str::contains("\"risk_weight_percent\": 15.0"));
}

#[test]
fn table_lists_six_rows() {
    let output = secirba().args(["table", "-f", "csv"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "exposure_type,seniority,granularity,a,b,c,d,e");
    assert_eq!(lines.len(), 7);
    assert!(stdout.contains("retail,non-senior,granular"));
}

#[test]
fn sweep_preset_csv() {
    let output = secirba()
        .args(["sweep", "--a", "0.2", "--d", "0.8", "--preset", "COARSE_GRID", "-f", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "maturity_years,kirb,p,kssa");
    // 30 points x 3 maturities
    assert_eq!(lines.len(), 91);
}

#[test]
fn sweep_table_has_maturity_columns() {
    secirba()
        .args(["sweep", "--points", "5", "--maturities", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M=1"))
        .stdout(predicate::str::contains("M=2"))
        .stdout(predicate::str::contains("M=3").not());
}

#[test]
fn sweep_rejects_single_point() {
    secirba()
        .args(["sweep", "--points", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("points"));
}

#[test]
fn sweep_rejects_empty_k_range() {
    secirba()
        .args(["sweep", "--k-min", "0.1", "--k-max", "0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("k_max"));
}

#[test]
fn sweep_unknown_preset() {
    secirba()
        .args(["sweep", "--preset", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found: NOPE"));
}

#[test]
fn config_file_supplies_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[evaluation]\nkirb = 0.10\nattachment = 0.05\ndetachment = 0.30\np = 0.5"
    )
    .unwrap();

    secirba()
        .arg("--config")
        .arg(file.path())
        .args(["kssa", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.0585"));
}

#[test]
fn invalid_config_file_fails() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"evaluation": {{"p": -1.0}}}}"#).unwrap();

    secirba()
        .arg("--config")
        .arg(file.path())
        .arg("table")
        .assert()
        .failure()
        .stderr(predicate::str::contains("evaluation.p"));
}
