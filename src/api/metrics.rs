use crate::client::BlockfrostClient;
use crate::types::{ApiResult, Metric, MetricEndpoint};

impl BlockfrostClient {
    /// Usage of the project over the last 30 days, one entry per day.
    pub async fn metrics(&self) -> ApiResult<Vec<Metric>> {
        self.client.get(&["metrics"], None).await
    }

    pub async fn metrics_endpoints(&self) -> ApiResult<Vec<MetricEndpoint>> {
        self.client.get(&["metrics", "endpoints"], None).await
    }
}
