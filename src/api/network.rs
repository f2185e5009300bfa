use crate::client::BlockfrostClient;
use crate::types::{ApiResult, NetworkEra, NetworkResponse};

impl BlockfrostClient {
    pub async fn network(&self) -> ApiResult<NetworkResponse> {
        self.client.get(&["network"], None).await
    }

    pub async fn network_eras(&self) -> ApiResult<Vec<NetworkEra>> {
        self.client.get(&["network", "eras"], None).await
    }
}
