#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{Result, SnapshotError};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_WORKFLOW_OWNER: &str = "meshery-extensions";
pub const DEFAULT_WORKFLOW_REPO: &str = "helm-kanvas-snapshot";
pub const DEFAULT_WORKFLOW_FILE: &str = "kanvas.yaml";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const ENV_PROVIDER_TOKEN: &str = "PROVIDER_TOKEN";
pub const ENV_MESHERY_API_BASE_URL: &str = "MESHERY_API_BASE_URL";
pub const ENV_MESHERY_CLOUD_API_BASE_URL: &str = "MESHERY_CLOUD_API_BASE_URL";
pub const ENV_WORKFLOW_ACCESS_TOKEN: &str = "WORKFLOW_ACCESS_TOKEN";
pub const ENV_GITHUB_API_BASE_URL: &str = "GITHUB_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "KANVAS_REQUEST_TIMEOUT_SECS";

/// 執行一次所需的憑證與端點，啟動時建立一次後傳入各 client
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub provider_token: String,
    pub meshery_api_base_url: String,
    /// 目前流程用不到，但仍是必要設定
    pub meshery_cloud_api_base_url: String,
    pub workflow_access_token: String,
    pub github_api_base_url: String,
    pub workflow_owner: String,
    pub workflow_repo: String,
    pub workflow_file: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider_token: String::new(),
            meshery_api_base_url: String::new(),
            meshery_cloud_api_base_url: String::new(),
            workflow_access_token: String::new(),
            github_api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            workflow_owner: DEFAULT_WORKFLOW_OWNER.to_string(),
            workflow_repo: DEFAULT_WORKFLOW_REPO.to_string(),
            workflow_file: DEFAULT_WORKFLOW_FILE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(value: &str) -> &'static str {
            if value.is_empty() {
                "<empty>"
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("Settings")
            .field("provider_token", &redact(&self.provider_token))
            .field("meshery_api_base_url", &self.meshery_api_base_url)
            .field("meshery_cloud_api_base_url", &self.meshery_cloud_api_base_url)
            .field("workflow_access_token", &redact(&self.workflow_access_token))
            .field("github_api_base_url", &self.github_api_base_url)
            .field("workflow_owner", &self.workflow_owner)
            .field("workflow_repo", &self.workflow_repo)
            .field("workflow_file", &self.workflow_file)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Settings {
    /// 預設值 → 設定檔（可選）→ 環境變數
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let base = match config_path {
            Some(path) => toml_config::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// 以非空的環境變數覆蓋目前的值
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_PROVIDER_TOKEN) {
            self.provider_token = v;
        }
        if let Some(v) = non_empty(ENV_MESHERY_API_BASE_URL) {
            self.meshery_api_base_url = v;
        }
        if let Some(v) = non_empty(ENV_MESHERY_CLOUD_API_BASE_URL) {
            self.meshery_cloud_api_base_url = v;
        }
        if let Some(v) = non_empty(ENV_WORKFLOW_ACCESS_TOKEN) {
            self.workflow_access_token = v;
        }
        if let Some(v) = non_empty(ENV_GITHUB_API_BASE_URL) {
            self.github_api_base_url = v;
        }
        if let Some(v) = non_empty(ENV_REQUEST_TIMEOUT_SECS) {
            self.request_timeout_secs =
                v.trim()
                    .parse()
                    .map_err(|e| SnapshotError::InvalidConfigValue {
                        field: ENV_REQUEST_TIMEOUT_SECS.to_string(),
                        value: v.clone(),
                        reason: format!("not a number of seconds: {}", e),
                    })?;
        }

        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn dispatch_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            self.github_api_base_url.trim_end_matches('/'),
            self.workflow_owner,
            self.workflow_repo,
            self.workflow_file
        )
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_required_settings(&[
            ("providerToken", self.provider_token.as_str()),
            ("mesheryAPIBaseURL", self.meshery_api_base_url.as_str()),
            ("mesheryCloudAPIBaseURL", self.meshery_cloud_api_base_url.as_str()),
            ("workflowAccessToken", self.workflow_access_token.as_str()),
        ])?;

        validation::validate_url("meshery_api_base_url", &self.meshery_api_base_url)?;
        validation::validate_url("github_api_base_url", &self.github_api_base_url)?;
        validation::validate_non_empty_string("workflow_owner", &self.workflow_owner)?;
        validation::validate_non_empty_string("workflow_repo", &self.workflow_repo)?;
        validation::validate_non_empty_string("workflow_file", &self.workflow_file)?;
        validation::validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;

        Ok(())
    }
}
