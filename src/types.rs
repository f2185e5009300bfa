use crate::errors::ClientError;
use blockfrost_openapi::models::{
    account_addresses_assets_inner::AccountAddressesAssetsInner,
    account_addresses_content_inner::AccountAddressesContentInner,
    account_addresses_total::AccountAddressesTotal, account_content::AccountContent,
    account_delegation_content_inner::AccountDelegationContentInner,
    account_registration_content_inner::AccountRegistrationContentInner,
    account_reward_content_inner::AccountRewardContentInner,
    account_utxo_content_inner::AccountUtxoContentInner,
    account_withdrawal_content_inner::AccountWithdrawalContentInner,
    address_content::AddressContent, address_content_extended::AddressContentExtended,
    address_content_total::AddressContentTotal,
    address_transactions_content_inner::AddressTransactionsContentInner,
    address_utxo_content_inner::AddressUtxoContentInner, asset::Asset,
    asset_history_inner::AssetHistoryInner, block_content::BlockContent,
    epoch_content::EpochContent, epoch_param_content::EpochParamContent,
    epoch_stake_content_inner::EpochStakeContentInner,
    epoch_stake_pool_content_inner::EpochStakePoolContentInner, genesis_content::GenesisContent,
    network::Network, network_eras_inner::NetworkErasInner,
    pool_delegators_inner::PoolDelegatorsInner, pool_list_extended_inner::PoolListExtendedInner,
    pool_updates_inner::PoolUpdatesInner, script_json::ScriptJson, tx_content::TxContent,
    tx_content_cbor::TxContentCbor, tx_content_delegations_inner::TxContentDelegationsInner,
    tx_content_metadata_cbor_inner::TxContentMetadataCborInner,
    tx_content_metadata_inner::TxContentMetadataInner, tx_content_mirs_inner::TxContentMirsInner,
    tx_content_pool_certs_inner::TxContentPoolCertsInner,
    tx_content_pool_retires_inner::TxContentPoolRetiresInner,
    tx_content_required_signers_inner::TxContentRequiredSignersInner,
    tx_content_stake_addr_inner::TxContentStakeAddrInner, tx_content_utxo::TxContentUtxo,
    tx_content_withdrawals_inner::TxContentWithdrawalsInner,
    tx_metadata_label_cbor_inner::TxMetadataLabelCborInner,
    tx_metadata_label_json_inner::TxMetadataLabelJsonInner,
    tx_metadata_labels_inner::TxMetadataLabelsInner,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type ApiResult<T> = Result<T, ClientError>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Amount {
    pub unit: String,
    pub quantity: String,
}

// root
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RootResponse {
    pub url: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HealthResponse {
    pub is_healthy: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HealthClockResponse {
    /// Milliseconds since the Unix epoch.
    pub server_time: u64,
}

// metrics
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Metric {
    pub time: i64,
    pub calls: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetricEndpoint {
    pub time: i64,
    pub calls: u64,
    pub endpoint: String,
}

// accounts
pub type AccountResponse = AccountContent;
pub type AccountReward = AccountRewardContentInner;
pub type AccountDelegation = AccountDelegationContentInner;
pub type AccountRegistration = AccountRegistrationContentInner;
pub type AccountWithdrawal = AccountWithdrawalContentInner;
pub type AccountAddress = AccountAddressesContentInner;
pub type AccountAsset = AccountAddressesAssetsInner;
pub type AccountAddressesTotalResponse = AccountAddressesTotal;
pub type AccountUtxo = AccountUtxoContentInner;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccountHistory {
    pub active_epoch: i32,
    pub amount: String,
    pub pool_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccountMir {
    pub tx_hash: String,
    pub amount: String,
}

// addresses
pub type AddressResponse = AddressContent;
pub type AddressExtendedResponse = AddressContentExtended;
pub type AddressTotalResponse = AddressContentTotal;
pub type AddressTransaction = AddressTransactionsContentInner;
pub type AddressUtxo = AddressUtxoContentInner;

// assets
pub type AssetResponse = Asset;
pub type AssetHistory = AssetHistoryInner;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AssetListItem {
    pub asset: String,
    pub quantity: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AssetTransaction {
    pub tx_hash: String,
    pub tx_index: u32,
    pub block_height: u64,
    pub block_time: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AssetAddress {
    pub address: String,
    pub quantity: String,
}

// blocks
pub type BlockResponse = BlockContent;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BlockAddress {
    pub address: String,
    pub transactions: Vec<BlockAddressTransaction>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BlockAddressTransaction {
    pub tx_hash: String,
}

// epochs
pub type EpochResponse = EpochContent;
pub type EpochParamResponse = EpochParamContent;
pub type EpochStake = EpochStakeContentInner;
pub type EpochStakePool = EpochStakePoolContentInner;

// ledger
pub type GenesisResponse = GenesisContent;

// mempool
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MempoolTxHash {
    pub tx_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MempoolTransaction {
    pub tx: MempoolTx,
    pub inputs: Vec<MempoolInput>,
    pub outputs: Vec<MempoolOutput>,
    pub redeemers: Option<Vec<MempoolRedeemer>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MempoolTx {
    pub hash: String,
    pub output_amount: Vec<Amount>,
    pub fees: String,
    pub deposit: String,
    pub size: u64,
    pub invalid_before: Option<String>,
    pub invalid_hereafter: Option<String>,
    pub utxo_count: u32,
    pub withdrawal_count: u32,
    pub mir_cert_count: u32,
    pub delegation_count: u32,
    pub stake_cert_count: u32,
    pub pool_update_count: u32,
    pub pool_retire_count: u32,
    pub asset_mint_or_burn_count: u32,
    pub redeemer_count: u32,
    pub valid_contract: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MempoolInput {
    pub address: Option<String>,
    pub tx_hash: String,
    pub output_index: u32,
    pub amount: Vec<Amount>,
    pub collateral: bool,
    pub reference: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MempoolOutput {
    pub address: String,
    pub amount: Vec<Amount>,
    pub output_index: u32,
    pub data_hash: Option<String>,
    pub inline_datum: Option<String>,
    pub collateral: bool,
    pub reference_script_hash: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MempoolRedeemer {
    pub tx_index: u32,
    pub purpose: String,
    pub unit_mem: String,
    pub unit_steps: String,
}

// metadata
pub type MetadataLabel = TxMetadataLabelsInner;
pub type MetadataJson = TxMetadataLabelJsonInner;
pub type MetadataCbor = TxMetadataLabelCborInner;

// network
pub type NetworkResponse = Network;
pub type NetworkEra = NetworkErasInner;

// nutlink
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NutlinkAddress {
    pub address: String,
    pub metadata_url: String,
    pub metadata_hash: String,
    pub metadata: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NutlinkTicker {
    pub name: String,
    pub count: u64,
    pub latest_block: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NutlinkTickerRecord {
    pub tx_hash: String,
    pub block_height: u64,
    pub tx_index: u32,
    pub payload: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NutlinkTickerRecordByAddress {
    pub address: String,
    pub tx_hash: String,
    pub block_height: u64,
    pub tx_index: u32,
    pub payload: Value,
}

// pools
pub type PoolExtended = PoolListExtendedInner;
pub type PoolDelegator = PoolDelegatorsInner;
pub type PoolUpdate = PoolUpdatesInner;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PoolRetirement {
    pub pool_id: String,
    pub epoch: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PoolResponse {
    pub pool_id: String,
    pub hex: String,
    pub vrf_key: String,
    pub blocks_minted: u64,
    pub blocks_epoch: u64,
    pub live_stake: String,
    pub live_size: f64,
    pub live_saturation: f64,
    pub live_delegators: u64,
    pub active_stake: String,
    pub active_size: f64,
    pub declared_pledge: String,
    pub live_pledge: String,
    pub margin_cost: f64,
    pub fixed_cost: String,
    pub reward_account: String,
    pub owners: Vec<String>,
    pub registration: Vec<String>,
    pub retirement: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PoolHistory {
    pub epoch: u32,
    pub blocks: u64,
    pub active_stake: String,
    pub active_size: f64,
    pub delegators_count: u64,
    pub rewards: String,
    pub fees: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PoolMetadata {
    pub pool_id: String,
    pub hex: String,
    pub url: Option<String>,
    pub hash: Option<String>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PoolRelay {
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
    pub dns: Option<String>,
    pub dns_srv: Option<String>,
    pub port: u16,
}

// scripts
pub type ScriptJsonResponse = ScriptJson;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptHash {
    pub script_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptResponse {
    pub script_hash: String,
    #[serde(rename = "type")]
    pub script_type: String,
    pub serialised_size: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptCbor {
    pub cbor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptRedeemer {
    pub tx_hash: String,
    pub tx_index: u32,
    pub purpose: String,
    pub redeemer_data_hash: String,
    pub datum_hash: Option<String>,
    pub unit_mem: String,
    pub unit_steps: String,
    pub fee: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScriptDatum {
    pub json_value: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptDatumCbor {
    pub cbor: String,
}

// txs
pub type TxResponse = TxContent;
pub type TxUtxos = TxContentUtxo;
pub type TxStake = TxContentStakeAddrInner;
pub type TxDelegation = TxContentDelegationsInner;
pub type TxWithdrawal = TxContentWithdrawalsInner;
pub type TxMir = TxContentMirsInner;
pub type TxPoolUpdate = TxContentPoolCertsInner;
pub type TxPoolRetire = TxContentPoolRetiresInner;
pub type TxMetadata = TxContentMetadataInner;
pub type TxMetadataCbor = TxContentMetadataCborInner;
pub type TxRequiredSigner = TxContentRequiredSignersInner;
pub type TxCbor = TxContentCbor;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TxRedeemer {
    pub tx_index: u32,
    pub purpose: String,
    pub script_hash: String,
    pub redeemer_data_hash: String,
    pub datum_hash: Option<String>,
    pub unit_mem: String,
    pub unit_steps: String,
    pub fee: String,
}

// utils
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DerivedAddress {
    pub xpub: String,
    pub role: u32,
    pub index: u32,
    pub address: String,
}

// ipfs
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IpfsAdded {
    pub name: String,
    pub ipfs_hash: String,
    pub size: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PinState {
    #[default]
    Queued,
    Pinned,
    Unpinned,
    Failed,
    Gc,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IpfsPinChange {
    pub time_created: i64,
    pub ipfs_hash: String,
    pub state: PinState,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IpfsPinnedObject {
    pub time_created: i64,
    pub time_pinned: i64,
    pub ipfs_hash: String,
    pub size: String,
    pub state: PinState,
}
