use thiserror::Error;

/// HTTP 轉接層（Meshery / GitHub）回傳的錯誤
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request to {url}: {reason}")]
    InvalidRequest { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    HttpRequestFailed(#[from] reqwest::Error),

    #[error("Unexpected response code {status}: {body}")]
    UnexpectedResponseCode { status: u16, body: String },

    #[error("GitHub workflow authentication failed ({status}): {body}")]
    WorkflowAuthFailed { status: u16, body: String },

    #[error("Failed to decode API response: {message} (body: {body})")]
    DecodingFailed { message: String, body: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedResponseCode { status, .. }
            | ApiError::WorkflowAuthFailed { status, .. } => Some(*status),
            ApiError::HttpRequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid email format: {email}")]
    InvalidEmailFormat { email: String },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing required parameter(s): {}", .fields.join(", "))]
    MissingConfig { fields: Vec<String> },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialise HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to create Meshery design: {0}")]
    DesignCreationFailed(#[source] ApiError),

    #[error("Failed to generate Kanvas snapshot: {0}")]
    SnapshotGenerationFailed(#[source] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Api,
    Authentication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SnapshotError {
    /// 包在 DesignCreationFailed / SnapshotGenerationFailed 裡的 API 錯誤
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            SnapshotError::DesignCreationFailed(e) | SnapshotError::SnapshotGenerationFailed(e) => {
                Some(e)
            }
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SnapshotError::InvalidEmailFormat { .. } | SnapshotError::InvalidInput { .. } => {
                ErrorCategory::Input
            }
            SnapshotError::MissingConfig { .. }
            | SnapshotError::InvalidConfigValue { .. }
            | SnapshotError::ConfigParse { .. }
            | SnapshotError::Io(_)
            | SnapshotError::HttpClient(_) => ErrorCategory::Configuration,
            SnapshotError::DesignCreationFailed(e) | SnapshotError::SnapshotGenerationFailed(e) => {
                match e {
                    ApiError::HttpRequestFailed(_) => ErrorCategory::Network,
                    ApiError::WorkflowAuthFailed { .. } => ErrorCategory::Authentication,
                    ApiError::UnexpectedResponseCode { status: 401 | 403, .. } => {
                        ErrorCategory::Authentication
                    }
                    _ => ErrorCategory::Api,
                }
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Api => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Authentication => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SnapshotError::InvalidEmailFormat { email } => {
                format!("'{}' is not a valid email address", email)
            }
            SnapshotError::InvalidInput { field, reason } => format!("{}: {}", field, reason),
            SnapshotError::MissingConfig { fields } => {
                format!("Missing required parameter(s): {}", fields.join(", "))
            }
            SnapshotError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            SnapshotError::ConfigParse { message } => {
                format!("Could not read configuration: {}", message)
            }
            SnapshotError::Io(e) => format!("Could not read configuration file: {}", e),
            SnapshotError::HttpClient(e) => format!("Could not initialise the HTTP client: {}", e),
            SnapshotError::DesignCreationFailed(e) => match e {
                ApiError::UnexpectedResponseCode { status, body } => format!(
                    "Meshery rejected the design import with status {}: {}",
                    status, body
                ),
                ApiError::HttpRequestFailed(_) => "Could not reach the Meshery server".to_string(),
                other => format!("Could not create the Meshery design: {}", other),
            },
            SnapshotError::SnapshotGenerationFailed(e) => match e {
                ApiError::WorkflowAuthFailed { body, .. } => format!(
                    "GitHub refused the workflow access token: {}",
                    body
                ),
                ApiError::HttpRequestFailed(_) => "Could not reach the GitHub API".to_string(),
                other => format!("Could not trigger the snapshot workflow: {}", other),
            },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check the --file and --email arguments (emails must be lowercase, e.g. you@example.com)"
            }
            ErrorCategory::Configuration => {
                "Set PROVIDER_TOKEN, MESHERY_API_BASE_URL, MESHERY_CLOUD_API_BASE_URL and WORKFLOW_ACCESS_TOKEN, or pass --config"
            }
            ErrorCategory::Network => "Check network connectivity and the configured base URLs",
            ErrorCategory::Authentication => {
                "Refresh the provider token or workflow access token and try again"
            }
            ErrorCategory::Api => "Check that the chart URI points to a retrievable Helm chart package",
        }
    }
}

pub type Result<T> = std::result::Result<T, SnapshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_auth_is_authentication_category() {
        let err = SnapshotError::SnapshotGenerationFailed(ApiError::WorkflowAuthFailed {
            status: 403,
            body: "Bad credentials".to_string(),
        });
        assert_eq!(err.category(), ErrorCategory::Authentication);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("Bad credentials"));
    }

    #[test]
    fn test_missing_config_lists_every_field() {
        let err = SnapshotError::MissingConfig {
            fields: vec!["providerToken".to_string(), "workflowAccessToken".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required parameter(s): providerToken, workflowAccessToken"
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            SnapshotError::InvalidEmailFormat {
                email: "NOPE".to_string(),
            },
            SnapshotError::DesignCreationFailed(ApiError::UnexpectedResponseCode {
                status: 500,
                body: "server error".to_string(),
            }),
            SnapshotError::DesignCreationFailed(ApiError::DecodingFailed {
                message: "missing id".to_string(),
                body: "[{}]".to_string(),
            }),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{}", err);
        }
    }

    #[test]
    fn test_api_error_status() {
        let err = ApiError::UnexpectedResponseCode {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(502));
        let err = ApiError::DecodingFailed {
            message: "x".to_string(),
            body: String::new(),
        };
        assert_eq!(err.status(), None);
    }
}
