use serde::Serialize;
use std::fmt;

pub const ASSET_LOCATION_BASE: &str =
    "https://raw.githubusercontent.com/layer5labs/meshery-extensions-packages/master/action-assets/helm-plugin-assets";
pub const DISPATCH_REF: &str = "master";

/// 送往 Meshery `/api/pattern/import` 的 payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignRequest {
    pub save: bool,
    pub url: String,
    pub name: String,
    /// 沒有提供時送出空字串
    pub email: String,
}

impl DesignRequest {
    pub fn new(url: impl Into<String>, name: impl Into<String>, email: Option<&str>) -> Self {
        Self {
            save: true,
            url: url.into(),
            name: name.into(),
            email: email.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DesignId(String);

impl DesignId {
    /// 空字串不是合法的 ID
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssetLocation(String);

impl AssetLocation {
    pub fn for_design(id: &DesignId) -> Self {
        Self(format!("{}/{}.png", ASSET_LOCATION_BASE, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchInputs {
    #[serde(rename = "contentID")]
    pub content_id: DesignId,
    #[serde(rename = "assetLocation")]
    pub asset_location: AssetLocation,
    pub email: String,
}

/// GitHub `workflow_dispatch` 的 payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchRequest {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub inputs: DispatchInputs,
}

impl DispatchRequest {
    pub fn new(design_id: DesignId, asset_location: AssetLocation, email: Option<&str>) -> Self {
        Self {
            git_ref: DISPATCH_REF.to_string(),
            inputs: DispatchInputs {
                content_id: design_id,
                asset_location,
                email: email.unwrap_or_default().to_string(),
            },
        }
    }
}

/// CLI 傳入、尚未驗證的參數
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotRequest {
    pub chart_uri: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SnapshotRequest {
    pub fn new(chart_uri: impl Into<String>) -> Self {
        Self {
            chart_uri: chart_uri.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    pub design_id: DesignId,
    pub design_name: String,
    pub asset_location: AssetLocation,
    pub notify_email: Option<String>,
}

impl SnapshotReport {
    pub fn closing_message(&self) -> String {
        match &self.notify_email {
            Some(email) => format!(
                "You will be notified via email at {} when your Kanvas snapshot is ready.",
                email
            ),
            None => format!(
                "Snapshot generated. Snapshot URL: {}\n\
                 It may take 3-5 minutes for the Kanvas snapshot to display at the above URL.\n\
                 To receive the snapshot via email, use the --email option like this:\n\n\
                 helm kanvas-snapshot -f <chart-URI> [--name <snapshot-name>] [-e <email>]",
                self.asset_location
            ),
        }
    }
}
