use std::process::{Command, Stdio};

use assert_cmd::prelude::*;

fn wm2str() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("wm2str"))
}

#[test]
fn resolves_mixed_inputs() {
    wm2str()
        .args(["0x0001", "2", "WM_MOUSEMOVE", "0xFFFF"])
        .assert()
        .success()
        .stdout("0x0001\tWM_CREATE\n0x0002\tWM_DESTROY\n0x0200\tWM_MOUSEMOVE\n0xffff\t-\n");
}

#[test]
fn hide_frequent_blanks_noisy_messages() {
    wm2str()
        .args(["--hide-frequent", "0x0020", "0x0200", "0x000F"])
        .assert()
        .success()
        .stdout("0x0020\t-\n0x0200\t-\n0x000f\tWM_PAINT\n");
}

#[test]
fn json_output() {
    let output = wm2str()
        .args(["--json", "--hide-frequent", "WM_SETCURSOR", "0x0010"])
        .output()
        .expect("run wm2str");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(
        value,
        serde_json::json!([
            { "id": 32, "hex": "0x0020", "name": null, "frequent": true },
            { "id": 16, "hex": "0x0010", "name": "WM_CLOSE", "frequent": false },
        ])
    );
}

#[test]
fn list_prints_the_whole_table() {
    let output = wm2str().arg("--list").output().expect("run wm2str");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), wm2str::messages().count());
    assert_eq!(lines[0], "0x0001\tWM_CREATE");
    assert!(lines.contains(&"0x001a\tWM_SETTINGCHANGE"));
}

#[test]
fn invalid_message_exits_2() {
    let output = wm2str()
        .args(["0x0001", "not-a-message"])
        .output()
        .expect("run wm2str");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid window message \"not-a-message\""),
        "stderr:\n{stderr}"
    );
}

#[test]
fn requires_a_message_or_list() {
    wm2str().assert().failure();
}

#[test]
fn does_not_fail_on_broken_pipe() {
    let mut child = Command::new(assert_cmd::cargo::cargo_bin!("wm2str"))
        .arg("--list")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn wm2str");

    // Closing the read end forces stdout writes to return EPIPE / BrokenPipe.
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("wait for wm2str");
    assert!(
        output.status.success(),
        "expected success even when stdout is closed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
