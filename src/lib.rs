pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{GitHubWorkflowClient, MesheryClient};
pub use config::Settings;
pub use core::snapshot::SnapshotEngine;
pub use domain::model::{SnapshotReport, SnapshotRequest};
pub use utils::error::{ApiError, Result, SnapshotError};
