use crate::adapters::{http, GitHubWorkflowClient, MesheryClient};
use crate::config::Settings;
use crate::core::{DesignImporter, SnapshotDispatcher};
use crate::domain::model::{
    AssetLocation, DesignRequest, DispatchRequest, SnapshotReport, SnapshotRequest,
};
use crate::utils::error::{Result, SnapshotError};
use crate::utils::validation::{derive_name_from_uri, validate_email_syntax, validate_non_empty_string};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Importing,
    Dispatching,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Importing => "importing",
            Stage::Dispatching => "dispatching",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// 驗證 → 匯入設計 → 觸發截圖，任一步失敗即中止，不回滾已建立的設計
pub struct SnapshotEngine<I: DesignImporter, D: SnapshotDispatcher> {
    importer: I,
    dispatcher: D,
}

impl SnapshotEngine<MesheryClient, GitHubWorkflowClient> {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client =
            http::build_client(settings.request_timeout()).map_err(SnapshotError::HttpClient)?;
        Ok(Self::new(
            MesheryClient::from_settings(client.clone(), settings),
            GitHubWorkflowClient::from_settings(client, settings),
        ))
    }
}

impl<I: DesignImporter, D: SnapshotDispatcher> SnapshotEngine<I, D> {
    pub fn new(importer: I, dispatcher: D) -> Self {
        Self {
            importer,
            dispatcher,
        }
    }

    pub async fn run(&self, request: SnapshotRequest) -> Result<SnapshotReport> {
        enter(Stage::Validating);
        let design_request = prepare_design_request(&request)?;
        let email = request.email.as_deref().filter(|e| !e.is_empty());

        enter(Stage::Importing);
        let design_id = self
            .importer
            .import_design(&design_request)
            .await
            .map_err(SnapshotError::DesignCreationFailed)?;

        enter(Stage::Dispatching);
        let asset_location = AssetLocation::for_design(&design_id);
        let dispatch_request = DispatchRequest::new(design_id.clone(), asset_location.clone(), email);
        self.dispatcher
            .dispatch_snapshot(&dispatch_request)
            .await
            .map_err(SnapshotError::SnapshotGenerationFailed)?;

        enter(Stage::Done);
        Ok(SnapshotReport {
            design_id,
            design_name: design_request.name,
            asset_location,
            notify_email: email.map(str::to_string),
        })
    }
}

fn enter(stage: Stage) {
    tracing::debug!("Snapshot stage: {}", stage);
}

pub fn prepare_design_request(request: &SnapshotRequest) -> Result<DesignRequest> {
    validate_non_empty_string("file", &request.chart_uri)?;

    let name = match request.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            let derived = derive_name_from_uri(&request.chart_uri);
            tracing::warn!("No design name provided. Using extracted name: {}", derived);
            derived
        }
    };

    let email = request.email.as_deref().filter(|e| !e.is_empty());
    if let Some(email) = email {
        if !validate_email_syntax(email) {
            return Err(SnapshotError::InvalidEmailFormat {
                email: email.to_string(),
            });
        }
    }

    Ok(DesignRequest::new(request.chart_uri.as_str(), name, email))
}
