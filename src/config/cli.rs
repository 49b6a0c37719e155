use crate::domain::model::SnapshotRequest;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "helm-kanvas-snapshot", version)]
#[command(about = "Generate a Kanvas snapshot using a Helm chart")]
#[command(
    long_about = "Generate a Kanvas snapshot by providing a Helm chart URI.\n\n\
                  Example:\n\n  \
                  helm kanvas-snapshot -f https://meshery.github.io/meshery.io/charts/meshery-v0.7.109.tgz -e your-email@example.com --name nginx-helm"
)]
pub struct CliArgs {
    /// URI to Helm chart
    #[arg(short = 'f', long = "file", value_name = "CHART_URI")]
    pub file: String,

    /// Email address to notify when the snapshot is ready
    #[arg(short = 'e', long)]
    pub email: Option<String>,

    /// Name for the Meshery design (defaults to the chart file name)
    #[arg(long)]
    pub name: Option<String>,

    /// TOML file with credentials and endpoints
    #[arg(long, env = "KANVAS_SNAPSHOT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliArgs {
    pub fn snapshot_request(&self) -> SnapshotRequest {
        SnapshotRequest {
            chart_uri: self.file.clone(),
            name: self.name.clone().filter(|n| !n.is_empty()),
            email: self.email.clone().filter(|e| !e.is_empty()),
        }
    }
}
