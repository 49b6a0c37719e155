pub mod snapshot;

pub use crate::domain::model::{
    AssetLocation, DesignId, DesignRequest, DispatchRequest, SnapshotReport, SnapshotRequest,
};
pub use crate::domain::ports::{DesignImporter, SnapshotDispatcher};
pub use crate::utils::error::Result;
