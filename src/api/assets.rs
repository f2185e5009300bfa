use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{
    ApiResult, AssetAddress, AssetHistory, AssetListItem, AssetResponse, AssetTransaction,
};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn assets(&self, pagination: &Pagination) -> ApiResult<Vec<AssetListItem>> {
        self.client.get(&["assets"], Some(pagination)).await
    }

    pub fn assets_all(&self, cancel: CancellationToken) -> PageStream<AssetListItem> {
        self.all(&["assets"], cancel)
    }

    /// `asset` is the concatenation of the policy id and the hex-encoded
    /// asset name.
    pub async fn asset(&self, asset: &str) -> ApiResult<AssetResponse> {
        let path = ["assets", asset];

        self.client.get(&path, None).await
    }

    pub async fn asset_history(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AssetHistory>> {
        let path = ["assets", asset, "history"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn asset_history_all(
        &self,
        asset: &str,
        cancel: CancellationToken,
    ) -> PageStream<AssetHistory> {
        self.all(&["assets", asset, "history"], cancel)
    }

    pub async fn asset_transactions(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AssetTransaction>> {
        let path = ["assets", asset, "transactions"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn asset_transactions_all(
        &self,
        asset: &str,
        cancel: CancellationToken,
    ) -> PageStream<AssetTransaction> {
        self.all(&["assets", asset, "transactions"], cancel)
    }

    pub async fn asset_addresses(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AssetAddress>> {
        let path = ["assets", asset, "addresses"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn asset_addresses_all(
        &self,
        asset: &str,
        cancel: CancellationToken,
    ) -> PageStream<AssetAddress> {
        self.all(&["assets", asset, "addresses"], cancel)
    }

    pub async fn assets_by_policy(
        &self,
        policy_id: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AssetListItem>> {
        let path = ["assets", "policy", policy_id];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn assets_by_policy_all(
        &self,
        policy_id: &str,
        cancel: CancellationToken,
    ) -> PageStream<AssetListItem> {
        self.all(&["assets", "policy", policy_id], cancel)
    }
}
