use crate::client::BlockfrostClient;
use crate::types::{
    ApiResult, TxCbor, TxDelegation, TxMetadata, TxMetadataCbor, TxMir, TxPoolRetire,
    TxPoolUpdate, TxRedeemer, TxRequiredSigner, TxResponse, TxStake, TxUtxos, TxWithdrawal,
};
use serde_json::Value;

impl BlockfrostClient {
    pub async fn transaction(&self, hash: &str) -> ApiResult<TxResponse> {
        let path = ["txs", hash];

        self.client.get(&path, None).await
    }

    pub async fn transaction_utxos(&self, hash: &str) -> ApiResult<TxUtxos> {
        let path = ["txs", hash, "utxos"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_stakes(&self, hash: &str) -> ApiResult<Vec<TxStake>> {
        let path = ["txs", hash, "stakes"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_delegations(&self, hash: &str) -> ApiResult<Vec<TxDelegation>> {
        let path = ["txs", hash, "delegations"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_withdrawals(&self, hash: &str) -> ApiResult<Vec<TxWithdrawal>> {
        let path = ["txs", hash, "withdrawals"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_mirs(&self, hash: &str) -> ApiResult<Vec<TxMir>> {
        let path = ["txs", hash, "mirs"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_pool_updates(&self, hash: &str) -> ApiResult<Vec<TxPoolUpdate>> {
        let path = ["txs", hash, "pool_updates"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_pool_retires(&self, hash: &str) -> ApiResult<Vec<TxPoolRetire>> {
        let path = ["txs", hash, "pool_retires"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_metadata(&self, hash: &str) -> ApiResult<Vec<TxMetadata>> {
        let path = ["txs", hash, "metadata"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_metadata_cbor(&self, hash: &str) -> ApiResult<Vec<TxMetadataCbor>> {
        let path = ["txs", hash, "metadata", "cbor"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_redeemers(&self, hash: &str) -> ApiResult<Vec<TxRedeemer>> {
        let path = ["txs", hash, "redeemers"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_required_signers(
        &self,
        hash: &str,
    ) -> ApiResult<Vec<TxRequiredSigner>> {
        let path = ["txs", hash, "required_signers"];

        self.client.get(&path, None).await
    }

    pub async fn transaction_cbor(&self, hash: &str) -> ApiResult<TxCbor> {
        let path = ["txs", hash, "cbor"];

        self.client.get(&path, None).await
    }

    /// Submits a signed transaction and returns its hash.
    pub async fn transaction_submit(&self, cbor: Vec<u8>) -> ApiResult<String> {
        self.client.post_cbor(&["tx", "submit"], cbor).await
    }

    /// Runs the Plutus scripts of `cbor` and returns the evaluator's answer
    /// (execution units per redeemer, or the evaluation failure) untouched.
    pub async fn transaction_evaluate(&self, cbor: Vec<u8>) -> ApiResult<Value> {
        self.client.post_cbor(&["utils", "txs", "evaluate"], cbor).await
    }
}
