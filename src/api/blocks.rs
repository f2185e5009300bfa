use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{ApiResult, BlockAddress, BlockResponse};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn block_latest(&self) -> ApiResult<BlockResponse> {
        self.client.get(&["blocks", "latest"], None).await
    }

    pub async fn block_latest_txs(&self, pagination: &Pagination) -> ApiResult<Vec<String>> {
        self.client.get(&["blocks", "latest", "txs"], Some(pagination)).await
    }

    pub fn block_latest_txs_all(&self, cancel: CancellationToken) -> PageStream<String> {
        self.all(&["blocks", "latest", "txs"], cancel)
    }

    /// `hash_or_number` is either the block hash or its height.
    pub async fn block(&self, hash_or_number: &str) -> ApiResult<BlockResponse> {
        let path = ["blocks", hash_or_number];

        self.client.get(&path, None).await
    }

    pub async fn block_by_slot(&self, slot: u64) -> ApiResult<BlockResponse> {
        let slot = slot.to_string();
        let path = ["blocks", "slot", slot.as_str()];

        self.client.get(&path, None).await
    }

    pub async fn block_by_epoch_slot(&self, epoch: u32, slot: u64) -> ApiResult<BlockResponse> {
        let epoch = epoch.to_string();
        let slot = slot.to_string();
        let path = ["blocks", "epoch", epoch.as_str(), "slot", slot.as_str()];

        self.client.get(&path, None).await
    }

    pub async fn blocks_next(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<BlockResponse>> {
        let path = ["blocks", hash_or_number, "next"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn blocks_next_all(
        &self,
        hash_or_number: &str,
        cancel: CancellationToken,
    ) -> PageStream<BlockResponse> {
        self.all(&["blocks", hash_or_number, "next"], cancel)
    }

    pub async fn blocks_previous(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<BlockResponse>> {
        let path = ["blocks", hash_or_number, "previous"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn blocks_previous_all(
        &self,
        hash_or_number: &str,
        cancel: CancellationToken,
    ) -> PageStream<BlockResponse> {
        self.all(&["blocks", hash_or_number, "previous"], cancel)
    }

    pub async fn block_txs(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<String>> {
        let path = ["blocks", hash_or_number, "txs"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn block_txs_all(
        &self,
        hash_or_number: &str,
        cancel: CancellationToken,
    ) -> PageStream<String> {
        self.all(&["blocks", hash_or_number, "txs"], cancel)
    }

    pub async fn block_addresses(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<BlockAddress>> {
        let path = ["blocks", hash_or_number, "addresses"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn block_addresses_all(
        &self,
        hash_or_number: &str,
        cancel: CancellationToken,
    ) -> PageStream<BlockAddress> {
        self.all(&["blocks", hash_or_number, "addresses"], cancel)
    }
}
