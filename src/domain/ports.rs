use crate::domain::model::{DesignId, DesignRequest, DispatchRequest};
use crate::utils::error::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait DesignImporter: Send + Sync {
    async fn import_design(&self, request: &DesignRequest) -> Result<DesignId, ApiError>;
}

/// 觸發非同步的渲染流程，不等待完成
#[async_trait]
pub trait SnapshotDispatcher: Send + Sync {
    async fn dispatch_snapshot(&self, request: &DispatchRequest) -> Result<(), ApiError>;
}
