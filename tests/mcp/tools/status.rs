use std::sync::atomic::Ordering;

use pretty_assertions::assert_eq;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use slidespeak_mcp::mcp::types::TaskStatusParams;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_task_status_passes_the_report_through() {
    let fixture = McpTestFixture::new().await.unwrap();
    let server = fixture.server();

    let params = Parameters(TaskStatusParams {
        task_id: "task-1".to_owned(),
    });
    let result = server.get_task_status(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["task_id"], "task-1");
    assert_eq!(json_result["task_status"], "SUCCESS");
    assert_eq!(json_result["task_result"]["url"], "https://cdn/x.pptx");
}

#[tokio::test]
async fn test_get_task_status_preserves_unknown_states() {
    let fixture = McpTestFixture::with_status(json!({
        "task_id": "task-1",
        "task_status": "QUEUED"
    }))
    .await
    .unwrap();
    let server = fixture.server();

    let params = Parameters(TaskStatusParams {
        task_id: "task-1".to_owned(),
    });
    let result = server.get_task_status(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["task_status"], "QUEUED");
}

#[tokio::test]
async fn test_get_task_status_rejects_a_blank_task_id() {
    let fixture = McpTestFixture::new().await.unwrap();
    let server = fixture.server();

    let params = Parameters(TaskStatusParams {
        task_id: "   ".to_owned(),
    });
    let err = server.get_task_status(params).await.unwrap_err();

    assert_eq!(err.code, McpError::invalid_params("invalid", None).code);
    assert_eq!(fixture.state.requests.load(Ordering::SeqCst), 0);
}
