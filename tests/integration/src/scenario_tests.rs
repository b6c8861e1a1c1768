//! End-to-end scenarios over the built-in catalog
//!
//! Each scenario goes through the same path the shell uses: build the
//! registry, open a session, feed input, execute.

use devformat_core::{ExecuteOutcome, ExecutionSession, FailureKind, ToolCategory, ToolResult, search};
use devformat_tools::builtin_registry;
use pretty_assertions::assert_eq;
use regex::Regex;
use serde_json::json;

fn open(id: &str) -> ExecutionSession {
    let registry = builtin_registry().unwrap();
    ExecutionSession::open(&registry, id).unwrap()
}

#[tokio::test]
async fn scenario_json_formatter_pretty_prints() {
    let session = open("json-formatter");
    session.set_indent_size(2).unwrap();
    session.set_input(r#"{"b":1,"a":2}"#).unwrap();

    let outcome = session.execute().await;
    let result = outcome.result().unwrap();
    assert!(result.is_success());

    let parsed: serde_json::Value = serde_json::from_str(result.output()).unwrap();
    assert_eq!(parsed, json!({"b": 1, "a": 2}));
    // Key order is kept
    assert_eq!(result.output(), "{\n  \"b\": 1,\n  \"a\": 2\n}");
    assert_eq!(session.output(), result.output());
}

#[tokio::test]
async fn scenario_json_formatter_rejects_invalid_input() {
    let session = open("json-formatter");
    session.set_input("{invalid").unwrap();

    let outcome = session.execute().await;
    let result = outcome.result().unwrap();
    let error = result.error().unwrap();
    assert!(!error.is_empty());
    assert_eq!(result.failure_kind(), Some(FailureKind::InvalidInput));
    assert_eq!(session.output(), error);
    assert_eq!(session.last_result(), Some(result.clone()));
}

#[tokio::test]
async fn scenario_uuid_generator_uses_sample_count() {
    let session = open("uuid-generator");
    assert_eq!(session.tool().definition().sample_input, "5");
    session.set_input("").unwrap();

    let ExecuteOutcome::Completed(ToolResult::Success { output }) = session.execute().await else {
        panic!("uuid-generator should succeed on empty input");
    };

    let shape = Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert_eq!(line.len(), 36);
        assert!(shape.is_match(line), "not a uuid: {line}");
    }
}

#[test]
fn scenario_search_hash_groups_by_category() {
    let registry = builtin_registry().unwrap();
    let results = search(&registry, "hash");

    let encoders = results
        .groups()
        .iter()
        .find(|g| g.category == ToolCategory::Encoders)
        .unwrap();
    let encoder_ids: Vec<&str> = encoders.tools.iter().map(|t| t.id()).collect();
    assert_eq!(encoder_ids, vec!["md5-generator", "sha256-generator"]);

    let ids = results.ids();
    assert!(!ids.contains(&"json-formatter".to_string()));
    assert!(!ids.contains(&"uuid-generator".to_string()));

    // Groups appear in display order with no empty group
    let order: Vec<ToolCategory> = results.groups().iter().map(|g| g.category).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
    assert!(results.groups().iter().all(|g| !g.tools.is_empty()));
}
