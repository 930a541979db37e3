//! 命令行端到端测试

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn byd_cli() -> Command {
    Command::cargo_bin("byd-cli").unwrap()
}

#[test]
fn test_checksum_command() {
    byd_cli()
        .args(["checksum", "12", "34", "56", "78", "9A", "BC", "DE", "00"])
        .assert()
        .success()
        .stdout("0xB7\n");
}

#[test]
fn test_checksum_verify_mismatch_fails() {
    byd_cli()
        .args(["checksum", "--verify", "0000000000000000"])
        .assert()
        .failure();
}

#[test]
fn test_decode_command() {
    let dir = TempDir::new().unwrap();
    let pt = dir.path().join("pt.json");
    fs::write(
        &pt,
        r#"{"DRIVE_STATE": {"GEAR": 4}, "WHEEL_SPEED": {"WHEELSPEED_FL": 36, "WHEELSPEED_BL": 36}}"#,
    )
    .unwrap();
    let config = dir.path().join("vehicle.toml");
    fs::write(&config, "variant = \"adas_camera\"\n").unwrap();

    let output = byd_cli()
        .args(["decode", "--compact", "--config"])
        .arg(&config)
        .arg("--pt")
        .arg(&pt)
        .output()
        .unwrap();
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["gear_shifter"], "drive");
    let v_ego_raw = state["v_ego_raw"].as_f64().unwrap();
    assert!((v_ego_raw - 10.0).abs() < 1e-9);
}

#[test]
fn test_decode_missing_file() {
    byd_cli()
        .args(["decode", "--pt", "/nonexistent/pt.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pt.json"));
}

#[test]
fn test_replay_command() {
    let dir = TempDir::new().unwrap();
    let cycles = dir.path().join("cycles.jsonl");
    fs::write(
        &cycles,
        concat!(
            r#"{"pt": {"WHEEL_SPEED": {"WHEELSPEED_FL": 72, "WHEELSPEED_BL": 72}}, "actuation": {"steering_angle_deg": 10, "lat_active": true}}"#,
            "\n\n",
            r#"{"pt": {"WHEEL_SPEED": {"WHEELSPEED_FL": 72, "WHEELSPEED_BL": 72}}, "actuation": {"steering_angle_deg": 10, "lat_active": true, "cruise_button": true}}"#,
            "\n",
        ),
    )
    .unwrap();

    let output = byd_cli().arg("replay").arg(&cycles).output().unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    // 第一周期：转向 + HUD；第二周期额外一帧按键
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0]["message"], "STEERING_MODULE_ADAS");
    assert_eq!(lines[0]["cycle"], 0);
    assert_eq!(lines[0]["bus"], "powertrain");
    assert_eq!(lines[1]["message"], "LKAS_HUD_ADAS");
    assert_eq!(lines[4]["message"], "PCM_BUTTONS");
    assert_eq!(lines[4]["cycle"], 1);
    assert_eq!(lines[2]["signals"]["COUNTER"], 1);
}
