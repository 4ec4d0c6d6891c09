use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn scratch_settings(name: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join("orbitviz-cli").join(name);
    fs::create_dir_all(&dir).unwrap();
    let settings = dir.join("settings.json");
    let body = serde_json::json!({ "width": 200, "height": 120, "output_dir": dir });
    fs::write(&settings, body.to_string()).unwrap();
    (dir, settings)
}

fn orbitviz(settings: &PathBuf, log: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_orbitviz"))
        .env("RUST_LOG", log)
        .arg("--settings")
        .arg(settings)
        .args(args)
        .output()
        .unwrap()
}

const ELLIPSE: [&str; 10] = [
    "--a", "7000", "--e", "0.1", "--i", "28.5", "--raan", "40", "--argp", "90",
];

#[test]
fn rejected_entry_is_reported_once() {
    let (_, settings) = scratch_settings("rejected_entry");
    let out = orbitviz(
        &settings,
        "off",
        &["--a", "7000", "--e", "0.1x", "--i", "0", "--raan", "0", "--argp", "0"],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("Error:").count(), 1);
    assert!(stderr.contains("0.1x"));
    assert!(out.stdout.is_empty());
}

#[test]
fn failed_calculation_is_reported_through_status_only() {
    let (_, settings) = scratch_settings("failed_calculation");
    let out = orbitviz(
        &settings,
        "off",
        &["--strict", "--a", "-7000", "--e", "0.1", "--i", "0", "--raan", "0", "--argp", "0"],
    );
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("Error:").count(), 1);
    assert!(stdout.contains("Calculation failed."));
    assert!(out.stderr.is_empty());
}

#[test]
fn logs_go_to_stderr_and_json_to_stdout() {
    let (dir, settings) = scratch_settings("json_summary");
    let mut args = ELLIPSE.to_vec();
    args.push("--json");
    let out = orbitviz(&settings, "info", &args);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(r#""class": "Elliptic""#));
    assert!(stdout.contains(r#""points": 800"#));
    assert!(stdout.contains("Figure saved."));
    assert!(!stdout.contains("orbit generated"));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("orbit generated"));
    assert!(dir.join("orbita.png").exists());
}
