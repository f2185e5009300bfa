use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{ApiResult, MetadataCbor, MetadataJson, MetadataLabel};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn metadata_tx_labels(
        &self,
        pagination: &Pagination,
    ) -> ApiResult<Vec<MetadataLabel>> {
        self.client.get(&["metadata", "txs", "labels"], Some(pagination)).await
    }

    pub fn metadata_tx_labels_all(&self, cancel: CancellationToken) -> PageStream<MetadataLabel> {
        self.all(&["metadata", "txs", "labels"], cancel)
    }

    pub async fn metadata_tx_json(
        &self,
        label: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<MetadataJson>> {
        let path = ["metadata", "txs", "labels", label];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn metadata_tx_json_all(
        &self,
        label: &str,
        cancel: CancellationToken,
    ) -> PageStream<MetadataJson> {
        self.all(&["metadata", "txs", "labels", label], cancel)
    }

    pub async fn metadata_tx_cbor(
        &self,
        label: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<MetadataCbor>> {
        let path = ["metadata", "txs", "labels", label, "cbor"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn metadata_tx_cbor_all(
        &self,
        label: &str,
        cancel: CancellationToken,
    ) -> PageStream<MetadataCbor> {
        self.all(&["metadata", "txs", "labels", label, "cbor"], cancel)
    }
}
