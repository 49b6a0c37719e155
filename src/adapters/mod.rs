// Adapters layer: HTTP implementations of the domain ports.

pub mod github;
pub mod http;
pub mod meshery;

pub use github::GitHubWorkflowClient;
pub use meshery::MesheryClient;
