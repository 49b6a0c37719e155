use anyhow::Result;
use helm_kanvas_snapshot::adapters::http::build_client;
use helm_kanvas_snapshot::domain::model::{AssetLocation, DesignId, DispatchRequest};
use helm_kanvas_snapshot::domain::ports::SnapshotDispatcher;
use helm_kanvas_snapshot::{ApiError, GitHubWorkflowClient};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const DISPATCH_PATH: &str =
    "/repos/meshery-extensions/helm-kanvas-snapshot/actions/workflows/kanvas.yaml/dispatches";

fn dispatcher(server: &MockServer) -> GitHubWorkflowClient {
    let client = build_client(Duration::from_secs(5)).unwrap();
    GitHubWorkflowClient::new(client, server.url(DISPATCH_PATH), "ghp_test")
}

fn dispatch_request(email: Option<&str>) -> DispatchRequest {
    let id = DesignId::new("abc123").unwrap();
    let location = AssetLocation::for_design(&id);
    DispatchRequest::new(id, location, email)
}

#[tokio::test]
async fn test_dispatch_sends_github_headers_and_payload() -> Result<()> {
    let server = MockServer::start_async().await;
    let dispatch_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(DISPATCH_PATH)
                .header("accept", "application/vnd.github+json")
                .header("authorization", "Bearer ghp_test")
                .header("x-github-api-version", "2022-11-28")
                .json_body(json!({
                    "ref": "master",
                    "inputs": {
                        "contentID": "abc123",
                        "assetLocation": "https://raw.githubusercontent.com/layer5labs/meshery-extensions-packages/master/action-assets/helm-plugin-assets/abc123.png",
                        "email": "a@b.co"
                    }
                }));
            then.status(204);
        })
        .await;

    dispatcher(&server)
        .dispatch_snapshot(&dispatch_request(Some("a@b.co")))
        .await?;

    dispatch_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_dispatch_forbidden_is_workflow_auth_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(DISPATCH_PATH);
            then.status(403).body("Bad credentials");
        })
        .await;

    let err = dispatcher(&server)
        .dispatch_snapshot(&dispatch_request(None))
        .await
        .unwrap_err();

    match err {
        ApiError::WorkflowAuthFailed { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Bad credentials");
        }
        other => panic!("expected WorkflowAuthFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dispatch_unauthorized_is_workflow_auth_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(DISPATCH_PATH);
            then.status(401).body(r#"{"message":"Requires authentication"}"#);
        })
        .await;

    let err = dispatcher(&server)
        .dispatch_snapshot(&dispatch_request(None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::WorkflowAuthFailed { status: 401, .. }));
}

#[tokio::test]
async fn test_dispatch_other_failure_is_unexpected_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(DISPATCH_PATH);
            then.status(422)
                .body(r#"{"message":"Unexpected inputs provided"}"#);
        })
        .await;

    let err = dispatcher(&server)
        .dispatch_snapshot(&dispatch_request(None))
        .await
        .unwrap_err();

    match err {
        ApiError::UnexpectedResponseCode { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("Unexpected inputs provided"));
        }
        other => panic!("expected UnexpectedResponseCode, got {other:?}"),
    }
}

/// 2xx 的回應內容不需解析
#[tokio::test]
async fn test_dispatch_ignores_success_body() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(DISPATCH_PATH);
            then.status(200).body("not json at all");
        })
        .await;

    dispatcher(&server)
        .dispatch_snapshot(&dispatch_request(None))
        .await?;
    Ok(())
}
