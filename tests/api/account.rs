use std::path::Path;
use std::sync::atomic::Ordering;

use pretty_assertions::assert_eq;
use slidespeak_mcp::api::ApiError;

use crate::stub::StubServer;

#[tokio::test]
async fn me_returns_account_and_credits() {
    let server = StubServer::start(Vec::new()).await;
    let client = server.client("sk-test");

    let account = client.me().await.unwrap();

    assert_eq!(account.user_name.as_deref(), Some("Jane"));
    assert_eq!(account.credits, Some(120.into()));
    assert_eq!(account.extra["email"], "jane@example.com");
}

#[tokio::test]
async fn upload_document_sends_multipart_and_returns_the_receipt() {
    let server = StubServer::start(Vec::new()).await;
    let client = server.client("sk-test");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "quarterly notes").unwrap();

    let receipt = client.upload_document(&path).await.unwrap();

    assert_eq!(receipt.document_uuid.as_deref(), Some("d5a3c09f"));
    assert_eq!(receipt.task_id, Some("upload-task-1".into()));

    let content_types = server.state.upload_content_types.lock().unwrap();
    assert_eq!(content_types.len(), 1);
    assert!(content_types[0].starts_with("multipart/form-data"));
}

#[tokio::test]
async fn upload_of_a_missing_file_fails_without_a_request() {
    let server = StubServer::start(Vec::new()).await;
    let client = server.client("sk-test");

    let err = client
        .upload_document(Path::new("definitely/not/here.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidRequest(_)));
    assert_eq!(server.state.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_key_is_a_client_error() {
    let server = StubServer::start_rejecting(401).await;
    let client = server.client("sk-wrong");

    let err = client.me().await.unwrap_err();

    match &err {
        ApiError::UpstreamRejected { status, .. } => assert_eq!(*status, 401),
        other => panic!("expected UpstreamRejected, got {other:?}"),
    }
    assert!(err.is_client_error());
}
