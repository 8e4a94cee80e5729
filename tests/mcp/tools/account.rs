use std::sync::atomic::Ordering;

use pretty_assertions::assert_eq;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use slidespeak_mcp::mcp::types::UploadParams;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_me_returns_the_account() {
    let fixture = McpTestFixture::new().await.unwrap();
    let server = fixture.server();

    let result = server.get_me().await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["user_name"], "Jane");
    assert_eq!(json_result["credits"], 120);
    assert_eq!(json_result["email"], "jane@example.com");
}

#[tokio::test]
async fn test_upload_document_returns_the_document_uuid() {
    let fixture = McpTestFixture::new().await.unwrap();
    let server = fixture.server();

    let path = fixture.write_file("notes.txt", "quarterly notes").unwrap();
    let params = Parameters(UploadParams {
        file_path: path.to_string_lossy().to_string(),
    });
    let result = server.upload_document(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["document_uuid"], "d5a3c09f");
    assert_eq!(json_result["task_id"], "upload-task-1");
}

#[tokio::test]
async fn test_upload_document_rejects_a_blank_path() {
    let fixture = McpTestFixture::new().await.unwrap();
    let server = fixture.server();

    let params = Parameters(UploadParams {
        file_path: String::new(),
    });
    let err = server.upload_document(params).await.unwrap_err();

    assert_eq!(err.code, McpError::invalid_params("invalid", None).code);
    assert_eq!(fixture.state.requests.load(Ordering::SeqCst), 0);
}
