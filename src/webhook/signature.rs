use super::{WebhookError, WebhookErrorKind, WebhookEvent, DEFAULT_TOLERANCE};

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_SCHEME: &str = "v1";
const TIMESTAMP_KEY: &str = "t";

#[derive(Debug, Default, PartialEq, Eq)]
struct SignatureHeader {
    timestamp: Option<i64>,
    signatures: Vec<Vec<u8>>,
}

/// Splits `t=<unix>,v1=<hex>[,v1=<hex>...]`. A repeated `t` is accepted only
/// when it repeats the same value. `v1` values that are not hex are dropped
/// and unknown schemes are ignored.
fn parse_header(header: &str) -> Result<SignatureHeader, WebhookErrorKind> {
    let mut parsed = SignatureHeader::default();

    for pair in header.split(',') {
        let (key, value) = pair
            .trim()
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or(WebhookErrorKind::InvalidHeader)?;

        match key {
            TIMESTAMP_KEY => {
                let timestamp = value
                    .parse::<i64>()
                    .map_err(|_| WebhookErrorKind::InvalidHeader)?;

                if parsed.timestamp.is_some_and(|seen| seen != timestamp) {
                    return Err(WebhookErrorKind::InvalidHeader);
                }

                parsed.timestamp = Some(timestamp);
            },
            SIGNATURE_SCHEME => match hex::decode(value) {
                Ok(signature) => parsed.signatures.push(signature),
                Err(e) => warn!(error = %e, "skipping malformed v1 signature"),
            },
            scheme => warn!(scheme, "ignoring unsupported signature scheme"),
        }
    }

    Ok(parsed)
}

fn signer(timestamp: i64, body: &[u8], secret: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;

    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(body);

    Some(mac)
}

/// Header value signing `body` at `timestamp`, as Blockfrost would send it.
pub fn sign_payload(body: &[u8], secret: &str, timestamp: i64) -> Result<String, WebhookError> {
    let mac = signer(timestamp, body, secret)
        .ok_or_else(|| WebhookError::new(WebhookErrorKind::InvalidHeader, None))?;
    let signature = hex::encode(mac.finalize().into_bytes());

    Ok(format!("{TIMESTAMP_KEY}={timestamp},{SIGNATURE_SCHEME}={signature}"))
}

fn verify(
    body: &[u8],
    header: &str,
    secret: &str,
    tolerance: Option<Duration>,
) -> Result<WebhookEvent, WebhookError> {
    let event: WebhookEvent = serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "webhook body is not a webhook event");
        WebhookError::new(WebhookErrorKind::InvalidPayload, None)
    })?;

    let fail = |kind: WebhookErrorKind, event: WebhookEvent| {
        Err(WebhookError::new(kind, Some(event)))
    };

    if header.trim().is_empty() {
        return fail(WebhookErrorKind::NotSigned, event);
    }

    let parsed = match parse_header(header) {
        Ok(parsed) => parsed,
        Err(kind) => return fail(kind, event),
    };

    if parsed.signatures.is_empty() {
        return fail(WebhookErrorKind::NoValidSignature, event);
    }

    let Some(timestamp) = parsed.timestamp else {
        return fail(WebhookErrorKind::InvalidHeader, event);
    };

    if let Some(tolerance) = tolerance {
        let age = Utc::now().timestamp().saturating_sub(timestamp);

        if age > 0 && age.unsigned_abs() > tolerance.as_secs() {
            debug!(webhook_id = %event.webhook_id, timestamp, age, "stale webhook signature");
            return fail(WebhookErrorKind::TooOld, event);
        }
    }

    let Some(mac) = signer(timestamp, body, secret) else {
        return fail(WebhookErrorKind::NoValidSignature, event);
    };
    let expected = mac.finalize().into_bytes();

    let matched = parsed
        .signatures
        .iter()
        .any(|signature| bool::from(expected.as_slice().ct_eq(signature.as_slice())));

    if matched {
        Ok(event)
    } else {
        fail(WebhookErrorKind::NoValidSignature, event)
    }
}

/// Checks the `Blockfrost-Signature` header of a webhook request and
/// returns the decoded event. Signatures older than `tolerance` (or
/// [`DEFAULT_TOLERANCE`] when `None`) are rejected.
pub fn verify_webhook_signature(
    body: &[u8],
    header: &str,
    secret: &str,
    tolerance: Option<Duration>,
) -> Result<WebhookEvent, WebhookError> {
    verify(body, header, secret, Some(tolerance.unwrap_or(DEFAULT_TOLERANCE)))
}

/// Same as [`verify_webhook_signature`] without the age check, for replaying
/// recorded requests.
pub fn verify_webhook_signature_ignoring_time(
    body: &[u8],
    header: &str,
    secret: &str,
) -> Result<WebhookEvent, WebhookError> {
    verify(body, header, secret, None)
}
