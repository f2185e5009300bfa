use blockfrost_openapi::models::{
    block_content::BlockContent, epoch_content::EpochContent, tx_content::TxContent,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEventType {
    Block,
    Transaction,
    Delegation,
    Epoch,
    #[serde(other)]
    Unknown,
}

/// Envelope shared by every webhook event. The type-specific part stays
/// undecoded in `payload`; see [`WebhookEvent::payload_as`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    pub id: String,
    pub webhook_id: String,
    /// Unix seconds.
    pub created: i64,
    #[serde(default)]
    pub api_version: Option<u32>,
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
    #[serde(default)]
    pub payload: Value,
}

impl WebhookEvent {
    /// Decodes `payload`, e.g. into [`BlockPayload`] for block events or
    /// `Vec<TransactionPayload>` for transaction events.
    pub fn payload_as<T>(&self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        T::deserialize(&self.payload)
    }
}

pub type BlockPayload = BlockContent;

/// One transaction of a `transaction` event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionPayload {
    pub tx: TxContent,
    #[serde(default)]
    pub inputs: Vec<Value>,
    #[serde(default)]
    pub outputs: Vec<Value>,
}

/// One transaction of a `delegation` event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DelegationPayload {
    pub tx: TxContent,
    #[serde(default)]
    pub delegations: Vec<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EpochBoundary {
    pub epoch: i32,
    pub start_time: i64,
    pub end_time: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EpochPayload {
    pub previous_epoch: EpochContent,
    pub current_epoch: EpochBoundary,
}
