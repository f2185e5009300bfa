use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{
    ApiResult, PoolDelegator, PoolExtended, PoolHistory, PoolMetadata, PoolRelay, PoolResponse,
    PoolRetirement, PoolUpdate,
};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    /// Bech32 ids of every registered stake pool.
    pub async fn pools(&self, pagination: &Pagination) -> ApiResult<Vec<String>> {
        self.client.get(&["pools"], Some(pagination)).await
    }

    pub fn pools_all(&self, cancel: CancellationToken) -> PageStream<String> {
        self.all(&["pools"], cancel)
    }

    pub async fn pools_extended(&self, pagination: &Pagination) -> ApiResult<Vec<PoolExtended>> {
        self.client.get(&["pools", "extended"], Some(pagination)).await
    }

    pub fn pools_extended_all(&self, cancel: CancellationToken) -> PageStream<PoolExtended> {
        self.all(&["pools", "extended"], cancel)
    }

    pub async fn pools_retired(&self, pagination: &Pagination) -> ApiResult<Vec<PoolRetirement>> {
        self.client.get(&["pools", "retired"], Some(pagination)).await
    }

    pub fn pools_retired_all(&self, cancel: CancellationToken) -> PageStream<PoolRetirement> {
        self.all(&["pools", "retired"], cancel)
    }

    pub async fn pools_retiring(&self, pagination: &Pagination) -> ApiResult<Vec<PoolRetirement>> {
        self.client.get(&["pools", "retiring"], Some(pagination)).await
    }

    pub fn pools_retiring_all(&self, cancel: CancellationToken) -> PageStream<PoolRetirement> {
        self.all(&["pools", "retiring"], cancel)
    }

    pub async fn pool(&self, pool_id: &str) -> ApiResult<PoolResponse> {
        let path = ["pools", pool_id];

        self.client.get(&path, None).await
    }

    pub async fn pool_history(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<PoolHistory>> {
        let path = ["pools", pool_id, "history"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn pool_history_all(
        &self,
        pool_id: &str,
        cancel: CancellationToken,
    ) -> PageStream<PoolHistory> {
        self.all(&["pools", pool_id, "history"], cancel)
    }

    pub async fn pool_metadata(&self, pool_id: &str) -> ApiResult<PoolMetadata> {
        let path = ["pools", pool_id, "metadata"];

        self.client.get(&path, None).await
    }

    pub async fn pool_relays(&self, pool_id: &str) -> ApiResult<Vec<PoolRelay>> {
        let path = ["pools", pool_id, "relays"];

        self.client.get(&path, None).await
    }

    pub async fn pool_delegators(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<PoolDelegator>> {
        let path = ["pools", pool_id, "delegators"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn pool_delegators_all(
        &self,
        pool_id: &str,
        cancel: CancellationToken,
    ) -> PageStream<PoolDelegator> {
        self.all(&["pools", pool_id, "delegators"], cancel)
    }

    pub async fn pool_blocks(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<String>> {
        let path = ["pools", pool_id, "blocks"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn pool_blocks_all(&self, pool_id: &str, cancel: CancellationToken) -> PageStream<String> {
        self.all(&["pools", pool_id, "blocks"], cancel)
    }

    pub async fn pool_updates(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<PoolUpdate>> {
        let path = ["pools", pool_id, "updates"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn pool_updates_all(
        &self,
        pool_id: &str,
        cancel: CancellationToken,
    ) -> PageStream<PoolUpdate> {
        self.all(&["pools", pool_id, "updates"], cancel)
    }
}
