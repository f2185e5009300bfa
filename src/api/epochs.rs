use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{ApiResult, EpochParamResponse, EpochResponse, EpochStake, EpochStakePool};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn epoch_latest(&self) -> ApiResult<EpochResponse> {
        self.client.get(&["epochs", "latest"], None).await
    }

    pub async fn epoch_latest_parameters(&self) -> ApiResult<EpochParamResponse> {
        self.client.get(&["epochs", "latest", "parameters"], None).await
    }

    pub async fn epoch(&self, number: u32) -> ApiResult<EpochResponse> {
        let number = number.to_string();
        let path = ["epochs", number.as_str()];

        self.client.get(&path, None).await
    }

    pub async fn epoch_parameters(&self, number: u32) -> ApiResult<EpochParamResponse> {
        let number = number.to_string();
        let path = ["epochs", number.as_str(), "parameters"];

        self.client.get(&path, None).await
    }

    pub async fn epochs_next(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> ApiResult<Vec<EpochResponse>> {
        let number = number.to_string();
        let path = ["epochs", number.as_str(), "next"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn epochs_next_all(
        &self,
        number: u32,
        cancel: CancellationToken,
    ) -> PageStream<EpochResponse> {
        let number = number.to_string();
        self.all(&["epochs", number.as_str(), "next"], cancel)
    }

    pub async fn epochs_previous(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> ApiResult<Vec<EpochResponse>> {
        let number = number.to_string();
        let path = ["epochs", number.as_str(), "previous"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn epochs_previous_all(
        &self,
        number: u32,
        cancel: CancellationToken,
    ) -> PageStream<EpochResponse> {
        let number = number.to_string();
        self.all(&["epochs", number.as_str(), "previous"], cancel)
    }

    pub async fn epoch_stakes(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> ApiResult<Vec<EpochStake>> {
        let number = number.to_string();
        let path = ["epochs", number.as_str(), "stakes"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn epoch_stakes_all(
        &self,
        number: u32,
        cancel: CancellationToken,
    ) -> PageStream<EpochStake> {
        let number = number.to_string();
        self.all(&["epochs", number.as_str(), "stakes"], cancel)
    }

    pub async fn epoch_stakes_by_pool(
        &self,
        number: u32,
        pool_id: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<EpochStakePool>> {
        let number = number.to_string();
        let path = ["epochs", number.as_str(), "stakes", pool_id];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn epoch_stakes_by_pool_all(
        &self,
        number: u32,
        pool_id: &str,
        cancel: CancellationToken,
    ) -> PageStream<EpochStakePool> {
        let number = number.to_string();
        self.all(&["epochs", number.as_str(), "stakes", pool_id], cancel)
    }

    pub async fn epoch_blocks(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> ApiResult<Vec<String>> {
        let number = number.to_string();
        let path = ["epochs", number.as_str(), "blocks"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn epoch_blocks_all(&self, number: u32, cancel: CancellationToken) -> PageStream<String> {
        let number = number.to_string();
        self.all(&["epochs", number.as_str(), "blocks"], cancel)
    }

    pub async fn epoch_blocks_by_pool(
        &self,
        number: u32,
        pool_id: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<String>> {
        let number = number.to_string();
        let path = ["epochs", number.as_str(), "blocks", pool_id];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn epoch_blocks_by_pool_all(
        &self,
        number: u32,
        pool_id: &str,
        cancel: CancellationToken,
    ) -> PageStream<String> {
        let number = number.to_string();
        self.all(&["epochs", number.as_str(), "blocks", pool_id], cancel)
    }
}
