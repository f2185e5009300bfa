use crate::client::BlockfrostClient;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{
    AccountAddress, AccountAddressesTotalResponse, AccountAsset, AccountDelegation,
    AccountHistory, AccountMir, AccountRegistration, AccountResponse, AccountReward, AccountUtxo,
    AccountWithdrawal, ApiResult,
};
use tokio_util::sync::CancellationToken;

impl BlockfrostClient {
    pub async fn accounts(&self, stake_address: &str) -> ApiResult<AccountResponse> {
        let path = ["accounts", stake_address];

        self.client.get(&path, None).await
    }

    pub async fn account_rewards(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountReward>> {
        let path = ["accounts", stake_address, "rewards"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_rewards_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountReward> {
        self.all(&["accounts", stake_address, "rewards"], cancel)
    }

    pub async fn account_history(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountHistory>> {
        let path = ["accounts", stake_address, "history"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_history_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountHistory> {
        self.all(&["accounts", stake_address, "history"], cancel)
    }

    pub async fn account_delegations(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountDelegation>> {
        let path = ["accounts", stake_address, "delegations"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_delegations_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountDelegation> {
        self.all(&["accounts", stake_address, "delegations"], cancel)
    }

    pub async fn account_registrations(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountRegistration>> {
        let path = ["accounts", stake_address, "registrations"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_registrations_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountRegistration> {
        self.all(&["accounts", stake_address, "registrations"], cancel)
    }

    pub async fn account_withdrawals(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountWithdrawal>> {
        let path = ["accounts", stake_address, "withdrawals"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_withdrawals_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountWithdrawal> {
        self.all(&["accounts", stake_address, "withdrawals"], cancel)
    }

    pub async fn account_mirs(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountMir>> {
        let path = ["accounts", stake_address, "mirs"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_mirs_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountMir> {
        self.all(&["accounts", stake_address, "mirs"], cancel)
    }

    pub async fn account_associated_addresses(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountAddress>> {
        let path = ["accounts", stake_address, "addresses"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_associated_addresses_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountAddress> {
        self.all(&["accounts", stake_address, "addresses"], cancel)
    }

    pub async fn account_associated_assets(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountAsset>> {
        let path = ["accounts", stake_address, "addresses", "assets"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_associated_assets_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountAsset> {
        self.all(&["accounts", stake_address, "addresses", "assets"], cancel)
    }

    pub async fn account_addresses_total(
        &self,
        stake_address: &str,
    ) -> ApiResult<AccountAddressesTotalResponse> {
        let path = ["accounts", stake_address, "addresses", "total"];

        self.client.get(&path, None).await
    }

    pub async fn account_utxos(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> ApiResult<Vec<AccountUtxo>> {
        let path = ["accounts", stake_address, "utxos"];

        self.client.get(&path, Some(pagination)).await
    }

    pub fn account_utxos_all(
        &self,
        stake_address: &str,
        cancel: CancellationToken,
    ) -> PageStream<AccountUtxo> {
        self.all(&["accounts", stake_address, "utxos"], cancel)
    }
}
