use crate::adapters::http::{classify_send_error, parse_url, read_error_body};
use crate::config::Settings;
use crate::domain::model::DispatchRequest;
use crate::domain::ports::SnapshotDispatcher;
use crate::utils::error::ApiError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// 透過 `workflow_dispatch` 觸發 Kanvas 截圖工作流程
pub struct GitHubWorkflowClient {
    client: Client,
    dispatch_url: String,
    access_token: String,
}

impl GitHubWorkflowClient {
    pub fn new(client: Client, dispatch_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client,
            dispatch_url: dispatch_url.into(),
            access_token: access_token.into(),
        }
    }

    pub fn from_settings(client: Client, settings: &Settings) -> Self {
        Self::new(
            client,
            settings.dispatch_url(),
            settings.workflow_access_token.clone(),
        )
    }
}

#[async_trait]
impl SnapshotDispatcher for GitHubWorkflowClient {
    async fn dispatch_snapshot(&self, request: &DispatchRequest) -> Result<(), ApiError> {
        let url = parse_url(&self.dispatch_url)?;
        tracing::debug!(
            "📡 Dispatching snapshot workflow for design {} via {}",
            request.inputs.content_id,
            url
        );

        let response = self
            .client
            .post(url.clone())
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await
            .map_err(|e| classify_send_error(&url, e))?;

        let status = response.status();
        tracing::debug!("GitHub response status: {}", status);
        if status.is_success() {
            return Ok(());
        }

        Err(interpret_failure(status, read_error_body(response).await))
    }
}

/// 401/403 代表權杖問題，和其他失敗分開回報
fn interpret_failure(status: StatusCode, body: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::WorkflowAuthFailed {
            status: status.as_u16(),
            body,
        },
        _ => ApiError::UnexpectedResponseCode {
            status: status.as_u16(),
            body,
        },
    }
}
