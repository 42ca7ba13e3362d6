//! Behavioral tests for catalogue loading

use crate::app::error_message;
use crate::error::{ExplorerError, FetchError};
use crate::state::{decode_catalogue, fetch_catalogue};

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/sample.json");

#[tokio::test]
async fn given_bundled_sample_when_fetched_then_both_files_load() {
    // Given
    let url = SAMPLE;

    // When
    let result = fetch_catalogue(url).await;

    // Then
    let files = result.unwrap_or_default();
    assert_eq!(files.len(), 2, "sample.json should hold two files");
}

#[tokio::test]
async fn given_missing_document_when_fetched_then_network_error() {
    // Given
    let url = "does/not/exist.json";

    // When
    let result = fetch_catalogue(url).await;

    // Then
    assert!(matches!(result, Err(FetchError::Network { .. })));
}

#[test]
fn given_not_found_status_when_decoding_then_status_error() {
    // Given
    let body = "<html>not found</html>";

    // When
    let result = decode_catalogue("sample.json", 404, body);

    // Then
    assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
}

#[test]
fn given_record_without_filename_when_decoding_then_nothing_loads() {
    // Given
    let body = r#"[{"tests": []}]"#;

    // When
    let result = decode_catalogue("sample.json", 200, body);

    // Then
    assert!(matches!(result, Err(FetchError::Decode { .. })));
}

#[test]
fn given_empty_array_when_decoding_then_empty_catalogue() {
    // Given / When
    let result = decode_catalogue("sample.json", 200, "[]");

    // Then
    assert_eq!(result, Ok(Vec::new()));
}

#[test]
fn given_fetch_failure_when_reported_then_console_mentions_json_data() {
    // Given
    let error = ExplorerError::from(FetchError::Status {
        url: "sample.json".to_string(),
        status: 500,
    });

    // When
    let message = error_message(&error);

    // Then
    assert_eq!(message, "Error fetching JSON data: 'sample.json' returned HTTP 500");
}

#[test]
fn given_missing_container_when_reported_then_console_names_the_container() {
    // Given
    let error = ExplorerError::ContainerNotFound {
        id: "test-list".to_string(),
    };

    // When
    let message = error_message(&error);

    // Then
    assert_eq!(message, "Explorer not mounted: container element #test-list not found");
    assert!(!message.contains("JSON"));
}
