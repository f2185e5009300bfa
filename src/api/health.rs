use crate::client::BlockfrostClient;
use crate::types::{ApiResult, HealthClockResponse, HealthResponse, RootResponse};

impl BlockfrostClient {
    pub async fn root(&self) -> ApiResult<RootResponse> {
        self.client.get(&[], None).await
    }

    pub async fn health(&self) -> ApiResult<HealthResponse> {
        self.client.get(&["health"], None).await
    }

    pub async fn health_clock(&self) -> ApiResult<HealthClockResponse> {
        self.client.get(&["health", "clock"], None).await
    }
}
