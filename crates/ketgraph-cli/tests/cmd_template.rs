//! Integration tests for `ketgraph template`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `ketgraph` binary.
fn ketgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("ketgraph");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path.to_str().expect("path").to_owned()
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

#[test]
fn open_edges_become_nodes2connect() {
    let out = ketgraph(&["template", "-f", "json", &fixture("open_edges.json")]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["init_graph"], serde_json::json!([[0, 1, 1, 2]]));
    assert_eq!(value["nodes2connect"], serde_json::json!([[2, 3], [0, 3]]));
    assert_eq!(value["removed_connections"], serde_json::json!([]));
    assert!(value.get("description").is_none());
}

#[test]
fn topology_lists_removed_connections() {
    let out = ketgraph(&[
        "template",
        "--format",
        "json",
        "--description",
        "path of four",
        &fixture("topology.json"),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["description"], "path of four");
    assert_eq!(value["init_graph"], serde_json::json!([]));
    assert_eq!(
        value["removed_connections"],
        serde_json::json!([[0, 2], [0, 3], [1, 3]])
    );
}

#[test]
fn template_human_mode() {
    let out = ketgraph(&["template", &fixture("open_edges.json")]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("init_graph:          1"), "stdout: {stdout}");
    assert!(stdout.contains("  (0, 1, 1, 2)"), "stdout: {stdout}");
    assert!(stdout.contains("nodes2connect:       2"), "stdout: {stdout}");
}
