use crate::adapters::http::{classify_send_error, parse_url, read_error_body};
use crate::config::Settings;
use crate::domain::model::{DesignId, DesignRequest};
use crate::domain::ports::DesignImporter;
use crate::utils::error::ApiError;
use async_trait::async_trait;
use reqwest::header::{COOKIE, ORIGIN};
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use url::Url;

pub const IMPORT_PATH: &str = "/api/pattern/import";
pub const PROVIDER: &str = "Layer5";

pub struct MesheryClient {
    client: Client,
    base_url: String,
    provider_token: String,
}

impl MesheryClient {
    pub fn new(client: Client, base_url: impl Into<String>, provider_token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            provider_token: provider_token.into(),
        }
    }

    pub fn from_settings(client: Client, settings: &Settings) -> Self {
        Self::new(
            client,
            settings.meshery_api_base_url.clone(),
            settings.provider_token.clone(),
        )
    }

    pub fn import_url(&self) -> Result<Url, ApiError> {
        parse_url(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            IMPORT_PATH
        ))
    }

    fn cookie(&self) -> String {
        format!("token={};meshery-provider={}", self.provider_token, PROVIDER)
    }
}

#[async_trait]
impl DesignImporter for MesheryClient {
    async fn import_design(&self, request: &DesignRequest) -> Result<DesignId, ApiError> {
        let url = self.import_url()?;
        tracing::debug!("📡 Importing design '{}' from {} via {}", request.name, request.url, url);

        let response = self
            .client
            .post(url.clone())
            .header(COOKIE, self.cookie())
            .header(ORIGIN, self.base_url.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| classify_send_error(&url, e))?;

        let status = response.status();
        tracing::debug!("Meshery response status: {}", status);

        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedResponseCode {
                status: status.as_u16(),
                body: read_error_body(response).await,
            });
        }

        let body = response.text().await?;
        let design_id = parse_design_id(&body)?;
        tracing::info!("Successfully created Meshery design. ID: {}", design_id);
        Ok(design_id)
    }
}

/// 回應應為物件陣列，取第一筆的 `id`
pub fn parse_design_id(body: &str) -> Result<DesignId, ApiError> {
    let records: Vec<Map<String, Value>> =
        serde_json::from_str(body).map_err(|e| ApiError::DecodingFailed {
            message: format!("failed to decode json: {}", e),
            body: body.to_string(),
        })?;

    let id = records
        .first()
        .and_then(|record| record.get("id"))
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::DecodingFailed {
            message: "failed to extract design ID from response".to_string(),
            body: body.to_string(),
        })?;

    DesignId::new(id).ok_or_else(|| ApiError::DecodingFailed {
        message: "design ID in response is empty".to_string(),
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_design_id() {
        let id = parse_design_id(r#"[{"id":"abc123","name":"foo"},{"id":"ignored"}]"#).unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_parse_design_id_rejects_unexpected_shapes() {
        for body in [
            "[{}]",
            "[]",
            r#"[{"id":42}]"#,
            r#"[{"id":""}]"#,
            r#"{"id":"abc123"}"#,
            "server error",
            "",
        ] {
            let err = parse_design_id(body).unwrap_err();
            match err {
                ApiError::DecodingFailed { body: captured, .. } => assert_eq!(captured, body),
                other => panic!("unexpected error for {body:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_import_url_handles_trailing_slash() {
        let client = MesheryClient::new(Client::new(), "https://meshery.example/", "token");
        assert_eq!(
            client.import_url().unwrap().as_str(),
            "https://meshery.example/api/pattern/import"
        );
    }

    #[test]
    fn test_cookie_carries_provider() {
        let client = MesheryClient::new(Client::new(), "https://meshery.example", "t0k3n");
        assert_eq!(client.cookie(), "token=t0k3n;meshery-provider=Layer5");
    }
}
