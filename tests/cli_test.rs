use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_drone_rf_cli"))
}

#[test]
fn run_writes_plots_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli()
        .args(["run", "--num-samples", "10", "--output-dir"])
        .arg(dir.path())
        .output()
        .expect("failed to run drone_rf_cli run");
    assert!(
        output.status.success(),
        "CLI exited with {:?}",
        output.status.code()
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    assert!(stdout.contains("Chosen energy threshold"), "got {stdout}");
    assert!(stdout.contains("Detection Result"), "got {stdout}");
    for name in [
        "simulated_rf_activity",
        "feature_space_separation",
        "decision_boundary",
    ] {
        assert!(
            dir.path().join(format!("{name}.json")).exists(),
            "missing artifact {name}"
        );
    }
}

#[test]
fn run_json_is_deterministic() {
    let run = || {
        let output = cli()
            .args(["run", "--no-plots", "--json", "--seed", "7", "--num-samples", "8"])
            .output()
            .expect("failed to run drone_rf_cli run --json");
        assert!(output.status.success());
        String::from_utf8(output.stdout).expect("stdout UTF-8")
    };

    let first = run();
    assert_eq!(first, run());

    let json: Value = serde_json::from_str(first.trim()).expect("run report JSON payload");
    assert_eq!(json["seed"], 7);
    assert_eq!(json["threshold_study"]["counts"]["total_drone"], 8);
    assert!(json.get("artifacts").is_none());
}

#[test]
fn single_reports_verdict() {
    let output = cli()
        .args(["single", "--json"])
        .output()
        .expect("failed to run drone_rf_cli single");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("single-run JSON payload");
    assert_eq!(json["verdict"], "detected");
    assert!(json["thresholds"]["variance"].is_number());
}

#[test]
fn invalid_override_fails() {
    let output = cli()
        .args(["calibrate", "--num-samples", "0"])
        .output()
        .expect("failed to run drone_rf_cli calibrate");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(stderr.contains("num_samples"), "got {stderr}");
}

#[test]
fn dump_config_prints_defaults() {
    let output = cli()
        .arg("dump-config")
        .output()
        .expect("failed to run dump-config");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("config JSON");
    assert_eq!(json["simulation"]["seed"], 42);
    assert_eq!(json["calibration"]["energy_multiplier"], 1.3);
}
