use serde::{Deserialize, Serialize};
use std::{fmt, io};
use thiserror::Error;

/// Error body returned by the Blockfrost API.
/// Contains the following fields:
/// - status_code: the HTTP status code of the response
/// - error: a short description of the error
/// - message: a longer description of the error
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlockfrostError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl BlockfrostError {
    /// Empty body that only remembers the HTTP status. Used when the server
    /// sent something we could not decode.
    pub fn from_status(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }
}

impl fmt::Display for BlockfrostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockfrostError: {}", self.message)
    }
}

/// Non-2xx response from the API, keyed by status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad Request: {}", .0.message)]
    BadRequest(BlockfrostError),

    #[error("Unauthorized: {}", .0.message)]
    Unauthorized(BlockfrostError),

    #[error("Not Found: {}", .0.message)]
    NotFound(BlockfrostError),

    #[error("Auto banned: {}", .0.message)]
    AutoBanned(BlockfrostError),

    #[error("Usage limit reached: {}", .0.message)]
    OverusageLimit(BlockfrostError),

    #[error("Internal Server Error: {}", .0.message)]
    InternalServerError(BlockfrostError),

    #[error("Unexpected response ({}): {}", .0.status_code, .0.message)]
    Unknown(BlockfrostError),
}

impl ApiError {
    /// Picks the variant for `status`. The HTTP status wins over whatever the
    /// body claims, so an undecodable body still reports the right code.
    pub fn from_status(status: u16, mut body: BlockfrostError) -> Self {
        body.status_code = status;

        match status {
            400 => Self::BadRequest(body),
            403 => Self::Unauthorized(body),
            404 => Self::NotFound(body),
            418 => Self::AutoBanned(body),
            429 => Self::OverusageLimit(body),
            500 => Self::InternalServerError(body),
            _ => Self::Unknown(body),
        }
    }

    pub fn body(&self) -> &BlockfrostError {
        match self {
            Self::BadRequest(body)
            | Self::Unauthorized(body)
            | Self::NotFound(body)
            | Self::AutoBanned(body)
            | Self::OverusageLimit(body)
            | Self::InternalServerError(body)
            | Self::Unknown(body) => body,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Client configuration error: {0}")]
    Config(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid path parameter: {0:?}")]
    InvalidPath(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// HTTP status behind this error, if the request got that far.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code()),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(ApiError::NotFound(_)))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        ClientError::Config(format!("Invalid header value: {err}"))
    }
}
