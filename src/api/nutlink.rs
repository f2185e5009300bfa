use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{
    ApiResult, NutlinkAddress, NutlinkTicker, NutlinkTickerRecord, NutlinkTickerRecordByAddress,
};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn nutlink_address(&self, address: &str) -> ApiResult<NutlinkAddress> {
        let path = ["nutlink", address];

        self.client.get(&path, None).await
    }

    pub async fn nutlink_address_tickers(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<NutlinkTicker>> {
        let path = ["nutlink", address, "tickers"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn nutlink_address_tickers_all(
        &self,
        address: &str,
        cancel: CancellationToken,
    ) -> PageStream<NutlinkTicker> {
        self.all(&["nutlink", address, "tickers"], cancel)
    }

    pub async fn nutlink_address_ticker(
        &self,
        address: &str,
        ticker: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<NutlinkTickerRecord>> {
        let path = ["nutlink", address, "tickers", ticker];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn nutlink_address_ticker_all(
        &self,
        address: &str,
        ticker: &str,
        cancel: CancellationToken,
    ) -> PageStream<NutlinkTickerRecord> {
        self.all(&["nutlink", address, "tickers", ticker], cancel)
    }

    /// Records of `ticker` across every oracle address.
    pub async fn nutlink_ticker(
        &self,
        ticker: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<NutlinkTickerRecordByAddress>> {
        let path = ["nutlink", "tickers", ticker];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn nutlink_ticker_all(
        &self,
        ticker: &str,
        cancel: CancellationToken,
    ) -> PageStream<NutlinkTickerRecordByAddress> {
        self.all(&["nutlink", "tickers", ticker], cancel)
    }
}
