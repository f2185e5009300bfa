use crate::client::BlockfrostClient;
use crate::types::{ApiResult, GenesisResponse};

impl BlockfrostClient {
    pub async fn genesis(&self) -> ApiResult<GenesisResponse> {
        self.client.get(&["genesis"], None).await
    }
}
