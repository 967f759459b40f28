//! Tests for shared tool helpers

use rmcp::model::{ErrorCode, RawContent};
use serde_json::json;

use super::{json_result, map_db_error, offload};
use crate::db::DbError;

#[test]
fn test_map_db_error_validation_is_invalid_params() {
    let err = map_db_error(DbError::Validation {
        message: "The property_id cannot be empty.".to_string(),
    });
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "The property_id cannot be empty.");
}

#[test]
fn test_map_db_error_store_fault_is_internal() {
    let err = map_db_error(DbError::Database {
        message: "disk I/O error".to_string(),
    });
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("disk I/O error"));
}

#[test]
fn test_json_result_is_pretty_text() {
    let result = json_result(&json!({"a": 1})).unwrap();

    let text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    assert_eq!(text, "{\n  \"a\": 1\n}");
    assert_ne!(result.is_error, Some(true));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_offload_returns_worker_output() {
    let value = offload(async { Ok::<_, rmcp::ErrorData>(42) }).await.unwrap();
    assert_eq!(value, 42);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_offload_turns_panic_into_internal_error() {
    let err = offload(async {
        if true {
            panic!("worker blew up");
        }
        Ok::<u8, rmcp::ErrorData>(0)
    })
    .await
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("Tool worker failed"));
}
