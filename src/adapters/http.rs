use crate::utils::error::ApiError;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

pub fn parse_url(url: &str) -> Result<Url, ApiError> {
    Url::parse(url).map_err(|e| ApiError::InvalidRequest {
        url: url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}

/// builder 錯誤（例如 header 含換行）屬於請求建構失敗，其餘是傳輸失敗
pub fn classify_send_error(url: &Url, error: reqwest::Error) -> ApiError {
    if error.is_builder() {
        ApiError::InvalidRequest {
            url: url.to_string(),
            reason: error.to_string(),
        }
    } else {
        ApiError::HttpRequestFailed(error)
    }
}

/// 失敗回應的內容只用於回報，讀取失敗也不能蓋掉狀態碼
pub async fn read_error_body(response: Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Failed to read error response body: {}", e);
            format!("<failed to read body: {}>", e)
        }
    }
}
