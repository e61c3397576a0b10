//! Integration tests for `ketgraph matchings`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `ketgraph` binary.
fn ketgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like .../deps/cmd_matchings-<hash>
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("ketgraph");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn ketgraph(args: &[&str]) -> std::process::Output {
    Command::new(ketgraph_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("KETGRAPH_MAX_NODES")
        .env_remove("KETGRAPH_MAX_FILE_SIZE")
        .output()
        .expect("run ketgraph")
}

fn path_of(name: &str) -> String {
    fixture(name).to_str().expect("path").to_owned()
}

// ---------------------------------------------------------------------------
// matchings: human mode
// ---------------------------------------------------------------------------

#[test]
fn square_human_lists_two_matchings() {
    let out = ketgraph(&["matchings", &path_of("square.json")]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "(0, 1, 0, 0) (2, 3, 0, 0)\n(0, 2, 0, 0) (1, 3, 0, 0)\n"
    );
}

#[test]
fn triangle_is_empty_but_succeeds() {
    let out = ketgraph(&["matchings", &path_of("triangle.json")]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("no perfect matchings"), "stdout: {stdout}");
}

#[test]
fn count_flag_prints_number_only() {
    let out = ketgraph(&["matchings", "--count", &path_of("complete8.json")]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "105\n");
}

#[test]
fn document_input_is_accepted() {
    let out = ketgraph(&["matchings", "--count", &path_of("ghz4.json")]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "4\n");
}

// ---------------------------------------------------------------------------
// matchings: JSON mode
// ---------------------------------------------------------------------------

#[test]
fn square_json_is_parseable() {
    let out = ketgraph(&["matchings", "--format", "json", &path_of("square.json")]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["count"], 2);
    assert_eq!(value["uncolored"], 2);
    assert_eq!(
        value["matchings"],
        serde_json::json!([
            [[0, 1, 0, 0], [2, 3, 0, 0]],
            [[0, 2, 0, 0], [1, 3, 0, 0]]
        ])
    );
}

#[test]
fn min_degree_pivot_finds_the_same_count() {
    let out = ketgraph(&[
        "matchings",
        "--pivot",
        "min-degree",
        "--count",
        &path_of("complete8.json"),
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "105\n");
}

// ---------------------------------------------------------------------------
// matchings: engine limits (exit 1)
// ---------------------------------------------------------------------------

#[test]
fn node_limit_exits_1() {
    let out = ketgraph(&["matchings", "--max-nodes", "6", &path_of("complete8.json")]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("8 nodes"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn matching_limit_exits_1() {
    let out = ketgraph(&["matchings", "--max-matchings", "100", &path_of("complete8.json")]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("100"), "stderr: {stderr}");
}

#[test]
fn zero_timeout_exits_1() {
    let out = ketgraph(&["matchings", "--timeout-ms", "0", &path_of("complete8.json")]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("deadline"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// matchings: input failures (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn missing_file_exits_2() {
    let out = ketgraph(&["matchings", "/no/such/graph.json"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn malformed_input_exits_2() {
    let out = ketgraph(&["matchings", &path_of("not_json.txt")]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 1"), "stderr: {stderr}");
}

#[test]
fn oversized_input_exits_2() {
    let out = ketgraph(&["--max-file-size", "10", "matchings", &path_of("square.json")]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}

#[test]
fn max_file_size_from_env() {
    let out = Command::new(ketgraph_bin())
        .args(["matchings", &path_of("square.json")])
        .env_remove("RUST_LOG")
        .env("KETGRAPH_MAX_FILE_SIZE", "10")
        .output()
        .expect("run ketgraph");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn invalid_utf8_exits_2() {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(&[b'[', 0xFF, b']']).expect("write");
    let out = ketgraph(&["matchings", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("UTF-8"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// matchings: stdin
// ---------------------------------------------------------------------------

#[test]
fn stdin_input_is_read() {
    let mut child = Command::new(ketgraph_bin())
        .args(["matchings", "--count", "-"])
        .env_remove("RUST_LOG")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .expect("spawn ketgraph matchings -");

    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(b"[[0, 1, 0, 0], [0, 1, 1, 1]]")
        .expect("write stdin");

    let out = child.wait_with_output().expect("wait");
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "2\n");
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_logs_to_stderr_only() {
    let out = ketgraph(&["-v", "matchings", "--count", &path_of("square.json")]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "2\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("enumeration complete"), "stderr: {stderr}");
}

#[test]
fn quiet_keeps_stderr_empty() {
    let out = ketgraph(&["-q", "matchings", &path_of("square.json")]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}
