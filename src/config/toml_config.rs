use crate::config::Settings;
use crate::utils::error::{Result, SnapshotError};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is valid"));

/// 從 TOML 檔案載入設定
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    tracing::debug!("Loading settings from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// 從 TOML 字串解析設定
pub fn from_toml_str(content: &str) -> Result<Settings> {
    let processed = substitute_env_vars(content, |name| std::env::var(name).ok());

    toml::from_str(&processed).map_err(|e| SnapshotError::ConfigParse {
        message: format!("TOML parsing error: {}", e),
    })
}

/// 替換環境變數 (例如 ${PROVIDER_TOKEN})，找不到的保留原樣
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ENV_VAR_REGEX
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GITHUB_API_BASE_URL;

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let settings = from_toml_str(
            r#"
provider_token = "abc"
meshery_api_base_url = "https://meshery.example"
request_timeout_secs = 10
"#,
        )
        .unwrap();

        assert_eq!(settings.provider_token, "abc");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.github_api_base_url, DEFAULT_GITHUB_API_BASE_URL);
        assert_eq!(settings.workflow_file, "kanvas.yaml");
    }

    #[test]
    fn test_substitute_env_vars() {
        let lookup = |name: &str| (name == "TOKEN").then(|| "secret".to_string());
        assert_eq!(
            substitute_env_vars("token = \"${TOKEN}\"\nother = \"${UNSET}\"", lookup),
            "token = \"secret\"\nother = \"${UNSET}\""
        );
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = from_toml_str("provider_token = ").unwrap_err();
        assert!(matches!(err, SnapshotError::ConfigParse { .. }));
    }
}
