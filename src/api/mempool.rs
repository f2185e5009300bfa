use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{ApiResult, MempoolTransaction, MempoolTxHash};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn mempool(&self, pagination: &Pagination) -> ApiResult<Vec<MempoolTxHash>> {
        self.client.get(&["mempool"], Some(pagination)).await
    }

    pub fn mempool_all(&self, cancel: CancellationToken) -> PageStream<MempoolTxHash> {
        self.all(&["mempool"], cancel)
    }

    pub async fn mempool_tx(&self, hash: &str) -> ApiResult<MempoolTransaction> {
        let path = ["mempool", hash];

        self.client.get(&path, None).await
    }

    pub async fn mempool_by_address(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<MempoolTxHash>> {
        let path = ["mempool", "addresses", address];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn mempool_by_address_all(
        &self,
        address: &str,
        cancel: CancellationToken,
    ) -> PageStream<MempoolTxHash> {
        self.all(&["mempool", "addresses", address], cancel)
    }
}
