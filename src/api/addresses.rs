use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{
    AddressExtendedResponse, AddressResponse, AddressTotalResponse, AddressTransaction,
    AddressUtxo, ApiResult,
};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn address(&self, address: &str) -> ApiResult<AddressResponse> {
        let path = ["addresses", address];

        self.client.get(&path, None).await
    }

    pub async fn address_extended(&self, address: &str) -> ApiResult<AddressExtendedResponse> {
        let path = ["addresses", address, "extended"];

        self.client.get(&path, None).await
    }

    pub async fn address_total(&self, address: &str) -> ApiResult<AddressTotalResponse> {
        let path = ["addresses", address, "total"];

        self.client.get(&path, None).await
    }

    /// Transactions touching `address`. `from`/`to` take `"<height>"` or
    /// `"<height>:<index>"`.
    pub async fn address_transactions(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AddressTransaction>> {
        let path = ["addresses", address, "transactions"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn address_transactions_all(
        &self,
        address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AddressTransaction> {
        self.all(&["addresses", address, "transactions"], cancel)
    }

    pub async fn address_utxos(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AddressUtxo>> {
        let path = ["addresses", address, "utxos"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn address_utxos_all(
        &self,
        address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AddressUtxo> {
        self.all(&["addresses", address, "utxos"], cancel)
    }

    pub async fn address_utxos_asset(
        &self,
        address: &str,
        asset: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AddressUtxo>> {
        let path = ["addresses", address, "utxos", asset];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn address_utxos_asset_all(
        &self,
        address: &str,
        asset: &str,
        cancel: CancellationToken,
    ) -> PageStream<AddressUtxo> {
        self.all(&["addresses", address, "utxos", asset], cancel)
    }
}
