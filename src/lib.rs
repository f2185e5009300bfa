//! Async client for the Blockfrost Cardano and IPFS APIs.
//!
//! ```no_run
//! use blockfrost_client::{BlockfrostClient, Pagination, Order};
//!
//! # async fn run() -> Result<(), blockfrost_client::ClientError> {
//! let client = BlockfrostClient::with_project_id("mainnetXXXXXXXX")?;
//! let latest = client.block_latest().await?;
//! let pools = client
//!     .pools(&Pagination::new().count(10).order(Order::Desc))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod fanout;
pub mod http;
pub mod json_client;
pub mod pagination;
pub mod types;
pub mod webhook;

pub use client::{BlockfrostClient, BlockfrostIpfs};
pub use config::{ClientOptions, Network};
pub use errors::{ApiError, BlockfrostError, ClientError};
pub use fanout::{PageResult, PageStream};
pub use http::HttpDoer;
pub use pagination::{Order, Pagination};
pub use tokio_util::sync::CancellationToken;
pub use webhook::{
    sign_payload, verify_webhook_signature, verify_webhook_signature_ignoring_time, WebhookError,
    WebhookErrorKind, WebhookEvent, WebhookEventType,
};
