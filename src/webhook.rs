//! Verification of the `Blockfrost-Signature` header attached to webhook
//! callbacks.
//!
//! The header carries a timestamp and one or more HMAC-SHA256 signatures of
//! `"<timestamp>.<raw body>"`, keyed with the webhook's auth token:
//!
//! ```text
//! Blockfrost-Signature: t=1650013856,v1=6474e86c...
//! ```

mod event;
mod signature;

pub use event::{
    BlockPayload, DelegationPayload, EpochBoundary, EpochPayload, TransactionPayload,
    WebhookEvent, WebhookEventType,
};
pub use signature::{
    sign_payload, verify_webhook_signature, verify_webhook_signature_ignoring_time,
};

use std::time::Duration;
use thiserror::Error;

pub const SIGNATURE_HEADER: &str = "Blockfrost-Signature";

/// Maximum age of a signature timestamp accepted by
/// [`verify_webhook_signature`].
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookErrorKind {
    /// The body is not a webhook event.
    InvalidPayload,
    /// The signature header is empty.
    NotSigned,
    /// The header is not a list of `key=value` pairs or lacks a usable `t`.
    InvalidHeader,
    /// The signature timestamp is older than the tolerance.
    TooOld,
    /// No `v1` signature matches the body.
    NoValidSignature,
}

impl WebhookErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPayload => "invalid webhook payload",
            Self::NotSigned => "webhook is not signed",
            Self::InvalidHeader => "invalid signature header",
            Self::TooOld => "signature timestamp is outside the tolerance zone",
            Self::NoValidSignature => "no valid signature for the payload",
        }
    }
}

/// Verification failure. `event` holds the decoded envelope whenever the
/// body itself was valid, so it can still be logged.
#[derive(Debug, Clone, Error)]
#[error("{}", .kind.as_str())]
pub struct WebhookError {
    pub kind: WebhookErrorKind,
    pub event: Option<WebhookEvent>,
}

impl WebhookError {
    pub(crate) fn new(kind: WebhookErrorKind, event: Option<WebhookEvent>) -> Self {
        Self { kind, event }
    }
}
