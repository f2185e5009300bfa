use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{
    ApiResult, ScriptCbor, ScriptDatum, ScriptDatumCbor, ScriptHash, ScriptJsonResponse,
    ScriptRedeemer, ScriptResponse,
};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn scripts(&self, pagination: &Pagination) -> ApiResult<Vec<ScriptHash>> {
        self.client.get(&["scripts"], Some(pagination)).await
    }

    pub fn scripts_all(&self, cancel: CancellationToken) -> PageStream<ScriptHash> {
        self.all(&["scripts"], cancel)
    }

    pub async fn script(&self, script_hash: &str) -> ApiResult<ScriptResponse> {
        let path = ["scripts", script_hash];

        self.client.get(&path, None).await
    }

    pub async fn script_json(&self, script_hash: &str) -> ApiResult<ScriptJsonResponse> {
        let path = ["scripts", script_hash, "json"];

        self.client.get(&path, None).await
    }

    pub async fn script_cbor(&self, script_hash: &str) -> ApiResult<ScriptCbor> {
        let path = ["scripts", script_hash, "cbor"];

        self.client.get(&path, None).await
    }

    pub async fn script_redeemers(
        &self,
        script_hash: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<ScriptRedeemer>> {
        let path = ["scripts", script_hash, "redeemers"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn script_redeemers_all(
        &self,
        script_hash: &str,
        cancel: CancellationToken,
    ) -> PageStream<ScriptRedeemer> {
        self.all(&["scripts", script_hash, "redeemers"], cancel)
    }

    pub async fn script_datum(&self, datum_hash: &str) -> ApiResult<ScriptDatum> {
        let path = ["scripts", "datum", datum_hash];

        self.client.get(&path, None).await
    }

    pub async fn script_datum_cbor(&self, datum_hash: &str) -> ApiResult<ScriptDatumCbor> {
        let path = ["scripts", "datum", datum_hash, "cbor"];

        self.client.get(&path, None).await
    }
}
