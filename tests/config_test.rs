mod common;

use common::BoardTest;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_defaults_without_file() {
    let board = BoardTest::new();

    let output = board.run_success(&["config"]);
    assert!(output.contains("does not exist"));
    assert!(output.contains("theme: light"));
    assert!(output.contains("default_filter: all"));
    assert!(output.contains("default_order: desc"));
}

#[test]
fn test_config_reads_file() {
    let board = BoardTest::new();
    board.write_config("theme: dark\ndefault_filter: high\n");

    let output = board.run_success(&["config"]);
    assert!(output.contains("loaded from"));
    assert!(output.contains("theme: dark"));
    assert!(output.contains("default_filter: high"));
}

#[test]
fn test_config_json() {
    let board = BoardTest::new();
    board.write_config("default_order: asc\nlog:\n  level: debug\n");

    let output = board.run_success(&["config", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["config"]["default_order"], "asc");
    assert_eq!(value["config"]["log"]["level"], "debug");
    assert_eq!(value["config"]["theme"], "light");
    assert!(value["path"].as_str().unwrap().ends_with("config.yaml"));
}

#[test]
fn test_config_rejects_bad_filter() {
    let board = BoardTest::new();
    board.write_config("default_filter: critical\n");

    let stderr = board.run_failure(&["config"]);
    assert!(stderr.contains("configuration error"));
    assert!(stderr.contains("critical"));
}

#[test]
fn test_config_rejects_bad_log_level() {
    let board = BoardTest::new();
    board.write_config("log:\n  level: loud\n");

    let stderr = board.run_failure(&["ls"]);
    assert!(stderr.contains("invalid log level"));
}

#[test]
fn test_config_rejects_malformed_yaml() {
    let board = BoardTest::new();
    board.write_config("theme: [unclosed\n");

    let stderr = board.run_failure(&["config"]);
    assert!(stderr.contains("YAML parse error"));
}

#[test]
fn test_config_rejects_unknown_theme() {
    let board = BoardTest::new();
    board.write_config("theme: neon\n");

    let stderr = board.run_failure(&["config"]);
    assert!(stderr.starts_with("error:"));
}
