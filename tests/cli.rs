use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const BINARY_NAME: &str = "senlin_client";

/// Binary isolated from any operator configuration.
fn senlin(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_STATE_HOME", home.path().join("state"));
    cmd
}

#[test]
fn help_displays_usage() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Classify and render Senlin service error payloads"));
}

#[test]
fn not_found_payload_renders_normal_line() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .arg(r#"{"error":{"code":404,"message":"Cluster not found"}}"#)
        .assert()
        .code(10)
        .stderr(contains("ERROR(404): Cluster not found"));
}

#[test]
fn verbose_flag_renders_traceback() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .arg("--verbose")
        .arg(r#"{"error":{"code":502,"message":"upstream","traceback":"at node.py"}}"#)
        .assert()
        .code(11)
        .stderr(contains("ERROR: upstream\nat node.py"));
}

#[test]
fn verbose_from_config_file() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("senlin.toml");
    std::fs::write(&config, "[output]\nverbose = true\n").unwrap();
    senlin(&home)
        .arg("--config")
        .arg(&config)
        .arg(r#"{"error":{"code":400,"message":"bad"}}"#)
        .assert()
        .code(10)
        .stderr(contains("ERROR: bad\n"));
}

#[test]
fn sdk_details_in_legacy_format() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .args(["--sdk", r#"{"code":409,"message":"conflict"}"#])
        .assert()
        .code(10)
        .stderr(contains("ERROR(409): conflict"));
}

#[test]
fn unknown_status_exits_with_generic_code() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .arg(r#"{"error":{"code":418,"message":"teapot"}}"#)
        .assert()
        .code(12)
        .stderr(contains("ERROR(418): teapot"));
}

#[test]
fn malformed_record_is_reported_without_failing() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .arg(r#"{"message":"no code"}"#)
        .assert()
        .success()
        .stderr(contains(r#"Malformed exception record, missing field "code""#))
        .stderr(contains("Original error record"));
}

#[test]
fn invalid_json_is_a_serialization_failure() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .arg("<html>502 Bad Gateway</html>")
        .assert()
        .code(31)
        .stderr(contains("Failed to decode error payload"));
}

#[test]
fn payload_from_file_and_stdin() {
    let home = tempfile::tempdir().unwrap();
    let payload = home.path().join("error.json");
    std::fs::write(&payload, r#"{"error":{"code":503,"message":"busy"}}"#).unwrap();
    senlin(&home)
        .arg("--file")
        .arg(&payload)
        .assert()
        .code(11)
        .stderr(contains("ERROR(503): busy"));

    senlin(&home)
        .arg("--stdin")
        .write_stdin(r#"{"error":{"code":401,"message":"token expired"}}"#)
        .assert()
        .code(10)
        .stderr(contains("ERROR(401): token expired"));
}

#[test]
fn binary_file_is_a_file_format_error() {
    let home = tempfile::tempdir().unwrap();
    let payload = home.path().join("error.bin");
    std::fs::write(&payload, [0xff, 0xfe, 0x00]).unwrap();
    senlin(&home)
        .arg("--file")
        .arg(&payload)
        .assert()
        .code(3)
        .stderr(contains("is not valid UTF-8 text"));
}

#[test]
fn ambiguous_input_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .assert()
        .code(2)
        .stderr(contains("Provide exactly one of PAYLOAD, --file or --stdin"));

    senlin(&home)
        .args(["--stdin", "{}"])
        .assert()
        .code(2);
}

#[test]
fn missing_config_file_is_a_config_error() {
    let home = tempfile::tempdir().unwrap();
    senlin(&home)
        .args(["--config", "/nonexistent/senlin.toml", "{}"])
        .assert()
        .code(20)
        .stderr(contains("Configuration"));
}

#[test]
fn session_log_and_digest_are_written() {
    let home = tempfile::tempdir().unwrap();
    let log = home.path().join("logs").join("session.log");
    senlin(&home)
        .arg("--log")
        .arg(&log)
        .arg(r#"{"error":{"code":404,"message":"gone"}}"#)
        .assert()
        .code(10);

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("[INIT]"));
    assert!(predicate::path::exists().eval(&home.path().join("logs").join("session.log.hash")));
}
